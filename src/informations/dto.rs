use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitInformationRequest {
    pub name: Option<String>,
    pub father: Option<String>,
    pub gender: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub latitude: Option<Value>,
    #[serde(default)]
    pub longitude: Option<Value>,
}

/// Only what the client needs to confirm the submission.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedInformation {
    pub id: Uuid,
    pub name: String,
    pub phone_number: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitInformationResponse {
    pub success: bool,
    pub message: String,
    pub data: SubmittedInformation,
}
