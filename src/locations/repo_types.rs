use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Location ready to be written. The IP is already anonymized.
#[derive(Debug, Clone)]
pub struct NewLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub ip_address: String,
    pub user_agent: String,
}

/// Stored location document, IP and user agent included.
#[derive(Debug, Clone, FromRow)]
pub struct LocationRecord {
    pub id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub ip_address: String,
    pub user_agent: String,
    pub created_at: OffsetDateTime,
}

impl LocationRecord {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Public projection of a location. Never carries the IP or user agent.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LocationSummary {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
