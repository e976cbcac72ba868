use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use tracing::{error, instrument, warn};

use super::dto::{SubmitInformationRequest, SubmitInformationResponse};
use super::services;
use crate::{
    error::{ApiError, AppError},
    state::AppState,
};

const SUBMITTED_MESSAGE: &str = "Thanks for filling form. We will inform you on your number after 20 min, you are eligible for imdada or not";

pub fn information_routes() -> Router<AppState> {
    Router::new().route("/submit-information", post(submit_information))
}

#[instrument(skip(state, payload))]
pub async fn submit_information(
    State(state): State<AppState>,
    payload: Result<Json<SubmitInformationRequest>, JsonRejection>,
) -> Result<Json<SubmitInformationResponse>, ApiError> {
    const CONTEXT: &str = "Error submitting information";

    let Json(payload) = payload.map_err(|e| {
        warn!(error = %e, "rejected information body");
        state.api_error(AppError::from(e), CONTEXT)
    })?;

    let data = services::submit_information(state.informations.as_ref(), &payload)
        .await
        .map_err(|e| {
            match &e {
                AppError::Persistence(cause) => {
                    error!(error = %format!("{cause:#}"), "submit information failed")
                }
                other => warn!(error = %other, "invalid information submission"),
            }
            state.api_error(e, CONTEXT)
        })?;

    Ok(Json(SubmitInformationResponse {
        success: true,
        message: SUBMITTED_MESSAGE.into(),
        data,
    }))
}
