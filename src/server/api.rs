use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use crate::server::errors::AppError;
use crate::server::state::AppState;

/// `GET /api/metadata`: serve the preprocessed metadata file verbatim, or
/// report why it cannot be served.
///
/// Absence means the external preprocessing step has not run yet and is
/// permanent until an operator acts; a failed read after the existence check
/// is a transient delivery problem. The two cases get distinct error codes so
/// the viewer can show an actionable message for the first and a retry hint
/// for the second.
pub async fn metadata_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    if !state.metadata.exists() {
        return Err(AppError::MetadataNotReady);
    }

    let bytes = state.metadata.read().map_err(|e| {
        warn!("metadata.json exists but could not be read: {}", e);
        AppError::MetadataRead(e)
    })?;

    Ok(([(header::CONTENT_TYPE, "application/json")], bytes).into_response())
}
