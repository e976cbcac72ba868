use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SEPARATORS_RE: Regex = Regex::new(r"[\s\-()]").unwrap();
    static ref PHONE_RES: [Regex; 3] = [
        // local: 03XXXXXXXXX
        Regex::new(r"^03[0-9]{9}$").unwrap(),
        // +923XXXXXXXXX
        Regex::new(r"^\+923[0-9]{9}$").unwrap(),
        // 923XXXXXXXXX
        Regex::new(r"^923[0-9]{9}$").unwrap(),
    ];
}

/// Drops whitespace, hyphens and parentheses.
pub fn clean_phone_number(raw: &str) -> String {
    SEPARATORS_RE.replace_all(raw, "").into_owned()
}

/// Accepts Pakistani mobile numbers in local (`03..`), `+92 3..` or `92 3..` form.
pub fn is_valid_phone_number(raw: &str) -> bool {
    let cleaned = clean_phone_number(raw);
    if cleaned.is_empty() {
        return false;
    }
    PHONE_RES.iter().any(|re| re.is_match(&cleaned))
}
