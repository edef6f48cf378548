//! Accident analysis handler
//!
//! The whole pipeline for one request: validate the upload, spool it to
//! transient storage, encode it, call the vision model, and return the
//! extracted report. The spooled file is removed on every exit path.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use crashsight_vision::to_data_uri;
use serde_json::Value;

use crate::error::HttpAppError;
use crate::spool::SpooledImage;
use crate::state::AppState;
use crate::upload::{extract_image_field, validate_content_type, validate_file_size};

/// Analyze an uploaded accident photo.
///
/// # Errors
/// - `AppError::InvalidInput` - missing file or disallowed MIME type (400)
/// - `AppError::PayloadTooLarge` - file exceeds the size ceiling (400)
/// - `AppError::Upstream` - model call failed (500)
/// - `AppError::UpstreamTimeout` - model call exceeded the bounded wait (504)
#[tracing::instrument(skip(state, multipart), fields(operation = "analyze_accident"))]
pub async fn analyze_accident(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<Value>, HttpAppError> {
    let (data, original_filename, content_type) = extract_image_field(multipart).await?;

    validate_content_type(&content_type, &state.config.allowed_content_types)?;
    validate_file_size(data.len(), state.config.max_file_size_bytes)?;

    let spooled = SpooledImage::write(&state.config.upload_dir, &original_filename, &data).await?;
    tracing::info!(
        original_filename = %original_filename,
        content_type = %content_type,
        file_size = data.len(),
        spool_path = %spooled.path().display(),
        "Processing upload"
    );

    // Encoder step: read the spooled file back and embed it as a data URI.
    // Early returns from here on drop the guard, which deletes the file.
    let bytes = spooled.read().await?;
    let report = state.vision.analyze(to_data_uri(&bytes)).await?;

    spooled.remove().await;

    Ok(Json(report))
}
