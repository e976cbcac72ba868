use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed input.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// Store unavailable or write failure.
    #[error(transparent)]
    Persistence(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the client facing error. `context` is the message used for
    /// server side failures; `expose_detail` decides whether the internal
    /// cause is echoed back.
    pub fn into_api(self, context: &str, expose_detail: bool) -> ApiError {
        let status = self.status();
        match self {
            AppError::Validation(message) | AppError::NotFound(message) => ApiError {
                status,
                message,
                error: None,
            },
            AppError::Persistence(err) => ApiError::internal(context, format!("{err:#}"), expose_detail),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(_: JsonRejection) -> Self {
        AppError::validation("Invalid request body")
    }
}

/// `{success: false, message, error?}` envelope returned for every failure.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub error: Option<Value>,
}

impl ApiError {
    pub fn internal(message: &str, detail: String, expose_detail: bool) -> Self {
        let error = if expose_detail {
            Value::String(detail)
        } else {
            Value::Object(Default::default())
        };
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.to_string(),
            error: Some(error),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            success: false,
            message: self.message,
            error: self.error,
        };
        (self.status, Json(body)).into_response()
    }
}
