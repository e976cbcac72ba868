use std::net::SocketAddr;

use axum::http::HeaderMap;

pub const UNKNOWN: &str = "unknown";

const MAPPED_V4_PREFIX: &str = "::ffff:";

/// Zeroes the host part of a client address before it is stored.
///
/// `a.b.c.d` and `::ffff:a.b.c.d` lose their last octet, other colon
/// separated addresses lose their last segment. Anything unrecognised is
/// kept as is, and a missing address becomes `"unknown"`. Applying it twice
/// yields the same result as applying it once.
pub fn anonymize_ip(addr: Option<&str>) -> String {
    let Some(addr) = addr.map(str::trim).filter(|a| !a.is_empty()) else {
        return UNKNOWN.to_string();
    };

    let mapped = addr
        .get(..MAPPED_V4_PREFIX.len())
        .filter(|p| p.eq_ignore_ascii_case(MAPPED_V4_PREFIX));
    if let Some(prefix) = mapped {
        let v4 = &addr[prefix.len()..];
        if v4.contains('.') {
            return match zero_last_octet(v4) {
                Some(masked) => format!("{prefix}{masked}"),
                None => addr.to_string(),
            };
        }
    }

    if addr.contains('.') && !addr.contains(':') {
        return zero_last_octet(addr).unwrap_or_else(|| addr.to_string());
    }

    if addr.contains(':') {
        let mut segments: Vec<&str> = addr.split(':').collect();
        if segments.len() >= 2 {
            if let Some(last) = segments.last_mut() {
                *last = "0";
            }
            return segments.join(":");
        }
    }

    addr.to_string()
}

fn zero_last_octet(v4: &str) -> Option<String> {
    let octets: Vec<&str> = v4.split('.').collect();
    if octets.len() != 4 {
        return None;
    }
    Some(format!("{}.{}.{}.0", octets[0], octets[1], octets[2]))
}

/// Picks the caller's address: first `X-Forwarded-For` entry, then
/// `X-Real-IP`, then the socket peer.
pub fn resolve_client_ip(headers: &HeaderMap, remote: Option<SocketAddr>) -> Option<String> {
    let forwarded = header_str(headers, "x-forwarded-for")
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());
    if let Some(ip) = forwarded {
        return Some(ip.to_string());
    }

    if let Some(ip) = header_str(headers, "x-real-ip")
        .map(str::trim)
        .filter(|v| !v.is_empty())
    {
        return Some(ip.to_string());
    }

    remote.map(|addr| addr.ip().to_string())
}

pub fn user_agent(headers: &HeaderMap) -> String {
    header_str(headers, axum::http::header::USER_AGENT.as_str())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(UNKNOWN)
        .to_string()
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
