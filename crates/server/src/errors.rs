use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use models::errors::ModelError;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// Handler error rendered as `{"errors": "<message>"}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: String,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: impl Into<String>, detail: Option<String>) -> Self {
        Self { status, title: title.into(), detail }
    }

    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Unauthorized", None)
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let msg = self.detail.unwrap_or(self.title);
        (self.status, Json(ErrorBody::new(msg))).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) | ServiceError::Model(ModelError::Validation(msg)) => {
                JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(msg))
            }
            ServiceError::Conflict(msg) => JsonApiError::new(StatusCode::BAD_REQUEST, "Conflict", Some(msg)),
            ServiceError::Model(ModelError::Duplicate(msg)) => {
                warn!(detail = %msg, "duplicate key");
                JsonApiError::new(StatusCode::BAD_REQUEST, "Conflict", Some("Duplicate entry".into()))
            }
            ServiceError::NotFound(msg) => JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(msg)),
            ServiceError::Unauthorized(msg) => {
                warn!(reason = %msg, "request rejected");
                JsonApiError::new(StatusCode::UNAUTHORIZED, "Unauthorized", Some(msg))
            }
            other => {
                error!(code = other.code(), error = %other, "request failed");
                JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", None)
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("migration failed: {0}")]
    Migration(String),
}
