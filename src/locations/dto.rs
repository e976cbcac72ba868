use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::repo_types::{Coordinates, LocationSummary};

/// Coordinates arrive as JSON numbers or numeric strings, so they are kept
/// raw until the recorder parses them.
#[derive(Debug, Deserialize)]
pub struct SaveLocationRequest {
    #[serde(default)]
    pub latitude: Option<Value>,
    #[serde(default)]
    pub longitude: Option<Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveLocationResponse {
    pub success: bool,
    pub message: String,
    pub location_id: Uuid,
    pub location: Coordinates,
}

#[derive(Debug, Serialize)]
pub struct LocationsResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<LocationSummary>,
}
