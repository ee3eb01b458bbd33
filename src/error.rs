use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use crate::registry::RegistryError;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
        }
    }
}

impl From<RegistryError> for ApiError {
    fn from(value: RegistryError) -> Self {
        match value {
            RegistryError::InvalidClassDetails
            | RegistryError::InvalidBookingDetails
            | RegistryError::InvalidRange => ApiError::BadRequest(value.to_string()),
            RegistryError::ClassNotFound => ApiError::NotFound(value.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(value: serde_json::Error) -> Self {
        warn!("Unreadable request body: {value}");
        ApiError::BadRequest(format!("Invalid request body: {value}"))
    }
}
