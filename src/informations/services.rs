use tracing::info;

use super::dto::{SubmitInformationRequest, SubmittedInformation};
use super::repo_types::{InformationFields, NewInformation};
use crate::error::AppError;
use crate::locations::repo_types::Coordinates;
use crate::locations::services::parse_coordinate;
use crate::store::InformationStore;

pub const PARTIAL_COORDINATES: &str = "Latitude and longitude must be provided together";

pub async fn submit_information(
    store: &dyn InformationStore,
    req: &SubmitInformationRequest,
) -> Result<SubmittedInformation, AppError> {
    let location = match (
        parse_coordinate(req.latitude.as_ref())?,
        parse_coordinate(req.longitude.as_ref())?,
    ) {
        (Some(latitude), Some(longitude)) => Some(Coordinates { latitude, longitude }),
        (None, None) => None,
        _ => return Err(AppError::validation(PARTIAL_COORDINATES)),
    };

    let information = NewInformation::validate(InformationFields {
        name: req.name.as_deref(),
        father: req.father.as_deref(),
        gender: req.gender.as_deref(),
        phone_number: req.phone_number.as_deref(),
        address: req.address.as_deref(),
        location,
    })?;

    let record = store.insert_information(&information).await?;
    info!(
        information_id = %record.id,
        status = record.status.as_str(),
        created_at = %record.created_at,
        "information submitted"
    );

    Ok(SubmittedInformation {
        id: record.id,
        name: record.name,
        phone_number: record.phone_number,
    })
}
