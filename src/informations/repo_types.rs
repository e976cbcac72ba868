use std::str::FromStr;

use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::AppError;
use crate::locations::repo_types::Coordinates;
use crate::phone::is_valid_phone_number;

pub const MISSING_FIELDS: &str = "All fields are required";
pub const INVALID_PHONE: &str =
    "Please enter a valid phone number (03XXXXXXXXX, +923XXXXXXXXX or 923XXXXXXXXX)";
pub const INVALID_GENDER: &str = "Gender must be one of Male, Female or Other";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            "Other" => Ok(Gender::Other),
            _ => Err(AppError::validation(INVALID_GENDER)),
        }
    }
}

/// Review outcome of a submission. Set to `Pending` on insert; the review
/// process moves it once to a final state (guarded in the schema).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Pending,
    Eligible,
    NotEligible,
}

impl ReviewStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReviewStatus::Pending => "pending",
            ReviewStatus::Eligible => "eligible",
            ReviewStatus::NotEligible => "not_eligible",
        }
    }
}

impl FromStr for ReviewStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ReviewStatus::Pending),
            "eligible" => Ok(ReviewStatus::Eligible),
            "not_eligible" => Ok(ReviewStatus::NotEligible),
            other => anyhow::bail!("unknown review status {other:?}"),
        }
    }
}

/// A submission that passed validation. Only [`NewInformation::validate`]
/// builds one, so every stored record went through the same checks.
#[derive(Debug, Clone)]
pub struct NewInformation {
    pub name: String,
    pub father: String,
    pub gender: Gender,
    pub phone_number: String,
    pub address: String,
    pub location: Option<Coordinates>,
}

/// Raw submission fields as received.
#[derive(Debug, Default)]
pub struct InformationFields<'a> {
    pub name: Option<&'a str>,
    pub father: Option<&'a str>,
    pub gender: Option<&'a str>,
    pub phone_number: Option<&'a str>,
    pub address: Option<&'a str>,
    pub location: Option<Coordinates>,
}

impl NewInformation {
    pub fn validate(fields: InformationFields<'_>) -> Result<Self, AppError> {
        let required = |v: Option<&str>| {
            v.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .ok_or_else(|| AppError::validation(MISSING_FIELDS))
        };

        let name = required(fields.name)?;
        let father = required(fields.father)?;
        let gender = required(fields.gender)?;
        let phone_number = required(fields.phone_number)?;
        let address = required(fields.address)?;

        if !is_valid_phone_number(&phone_number) {
            return Err(AppError::validation(INVALID_PHONE));
        }
        let gender = gender.parse::<Gender>()?;

        Ok(Self {
            name,
            father,
            gender,
            phone_number,
            address,
            location: fields.location,
        })
    }
}

/// What the store hands back after an insert.
#[derive(Debug, Clone)]
pub struct InformationRecord {
    pub id: Uuid,
    pub name: String,
    pub phone_number: String,
    pub status: ReviewStatus,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, FromRow)]
pub struct InformationRow {
    pub id: Uuid,
    pub name: String,
    pub phone_number: String,
    pub status: String,
    pub created_at: OffsetDateTime,
}

impl TryFrom<InformationRow> for InformationRecord {
    type Error = anyhow::Error;

    fn try_from(r: InformationRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: r.id,
            name: r.name,
            phone_number: r.phone_number,
            status: r.status.parse()?,
            created_at: r.created_at,
        })
    }
}
