use std::net::SocketAddr;

use axum::{
    extract::{rejection::JsonRejection, ConnectInfo, State},
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use tracing::{error, instrument, warn};

use super::dto::{LocationsResponse, SaveLocationRequest, SaveLocationResponse};
use super::services;
use crate::{
    client_ip::{resolve_client_ip, user_agent},
    error::{ApiError, AppError},
    state::AppState,
};

pub fn location_routes() -> Router<AppState> {
    Router::new()
        .route("/save-location", post(save_location))
        .route("/locations", get(list_locations))
}

#[instrument(skip_all)]
pub async fn save_location(
    State(state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    payload: Result<Json<SaveLocationRequest>, JsonRejection>,
) -> Result<Json<SaveLocationResponse>, ApiError> {
    const CONTEXT: &str = "Error saving location";

    let Json(payload) = payload.map_err(|e| {
        warn!(error = %e, "rejected location body");
        state.api_error(AppError::from(e), CONTEXT)
    })?;

    let raw_ip = resolve_client_ip(&headers, connect_info.map(|ConnectInfo(addr)| addr));
    let ua = user_agent(&headers);

    let record = services::save_location(
        state.locations.as_ref(),
        payload.latitude.as_ref(),
        payload.longitude.as_ref(),
        raw_ip.as_deref(),
        &ua,
    )
    .await
    .map_err(|e| {
        match &e {
            AppError::Persistence(cause) => error!(error = %format!("{cause:#}"), "save location failed"),
            other => warn!(error = %other, "invalid location"),
        }
        state.api_error(e, CONTEXT)
    })?;

    Ok(Json(SaveLocationResponse {
        success: true,
        message: "Location saved successfully".into(),
        location_id: record.id,
        location: record.coordinates(),
    }))
}

#[instrument(skip(state))]
pub async fn list_locations(
    State(state): State<AppState>,
) -> Result<Json<LocationsResponse>, ApiError> {
    let data = services::list_locations(state.locations.as_ref())
        .await
        .map_err(|e| {
            error!(error = %e, "list locations failed");
            state.api_error(e, "Error fetching locations")
        })?;

    Ok(Json(LocationsResponse {
        success: true,
        count: data.len(),
        data,
    }))
}
