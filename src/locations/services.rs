use serde_json::Value;
use tracing::info;

use super::repo_types::{LocationRecord, LocationSummary, NewLocation};
use crate::client_ip::anonymize_ip;
use crate::error::AppError;
use crate::store::LocationStore;

pub const MISSING_COORDINATES: &str = "Latitude and longitude are required";
pub const INVALID_COORDINATES: &str = "Latitude and longitude must be valid numbers";

/// Reads an optional coordinate by presence, not truthiness: `0` is a
/// real coordinate. `Ok(None)` means the field was absent, null or an
/// empty string.
pub(crate) fn parse_coordinate(value: Option<&Value>) -> Result<Option<f64>, AppError> {
    let parsed = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(None),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };
    match parsed {
        Some(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(AppError::validation(INVALID_COORDINATES)),
    }
}

pub async fn save_location(
    store: &dyn LocationStore,
    latitude: Option<&Value>,
    longitude: Option<&Value>,
    raw_ip: Option<&str>,
    user_agent: &str,
) -> Result<LocationRecord, AppError> {
    let (Some(latitude), Some(longitude)) = (parse_coordinate(latitude)?, parse_coordinate(longitude)?)
    else {
        return Err(AppError::validation(MISSING_COORDINATES));
    };

    let location = NewLocation {
        latitude,
        longitude,
        ip_address: anonymize_ip(raw_ip),
        user_agent: user_agent.to_string(),
    };
    let record = store.insert_location(&location).await?;
    info!(
        location_id = %record.id,
        ip = %record.ip_address,
        user_agent = %record.user_agent,
        created_at = %record.created_at,
        "location saved"
    );
    Ok(record)
}

pub async fn list_locations(store: &dyn LocationStore) -> Result<Vec<LocationSummary>, AppError> {
    Ok(store.list_locations().await?)
}
