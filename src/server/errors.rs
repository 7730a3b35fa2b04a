//! Application-level error types for the viewer server.
//!
//! The only route with custom error handling is `/api/metadata`; everything
//! else relies on the static-serving layer's default behavior. Both variants
//! map to HTTP 503 with a fixed JSON body that the viewer page keys off of,
//! so the body texts are a compatibility contract and must not change.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// JSON body returned on metadata failures. Field order (`error`, then
/// `message`) is part of the response contract.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: &'static str,
}

/// Errors surfaced on the metadata route.
#[derive(Error, Debug)]
pub enum AppError {
    /// metadata.json does not exist; preprocessing has not run yet.
    #[error("metadata.json not found; preprocessing has not run")]
    MetadataNotReady,

    /// metadata.json exists but reading it failed.
    #[error("failed to read metadata.json: {0}")]
    MetadataRead(std::io::Error),
}

impl AppError {
    /// Stable machine-readable error code for the JSON body.
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::MetadataNotReady => "metadata_not_ready",
            AppError::MetadataRead(_) => "read_error",
        }
    }

    /// Human-readable message for the JSON body. The preprocess.py reference
    /// tells the operator exactly what to run.
    pub fn client_message(&self) -> &'static str {
        match self {
            AppError::MetadataNotReady => {
                "Run preprocess.py to generate processed/metadata.json"
            }
            AppError::MetadataRead(_) => "Failed to read metadata file",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.error_type(),
            message: self.client_message(),
        };
        (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response()
    }
}
