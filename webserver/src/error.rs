//! WebServer-specific error types

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use generator::GenerationError;
use serde_json::json;
use shared::SharedError;
use thiserror::Error;

/// Message returned whenever the provider credential is missing
pub const CREDENTIAL_MESSAGE: &str = "API credential not configured";

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("required environment variable {name} is not set")]
    MissingCredential { name: &'static str },

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),
}

pub type WebServerResult<T> = Result<T, WebServerError>;

/// JSON error body returned by the API handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    /// Body that failed to bind; `field` is the request's primary field
    pub fn missing_field(field: &str) -> Self {
        Self::bad_request(format!("{field} is required"))
    }
}

impl From<GenerationError> for ApiError {
    fn from(err: GenerationError) -> Self {
        if err.is_invalid_input() {
            ApiError::bad_request(err.to_string())
        } else if err.is_configuration() {
            ApiError::internal(CREDENTIAL_MESSAGE)
        } else {
            ApiError::internal(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
