//! Axum route handler for the image upload endpoint.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::media::CROPPED_SLOT;
use crate::state::AppState;

/// Multipart field carrying the image.
const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

/// POST /upload/
///
/// Accepts `multipart/form-data` with a `file` field, replaces both image slots and
/// returns the public URL of the cropped slot. Other fields are ignored.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut file: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(multipart_error)?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        debug!(
            file_name = field.file_name().unwrap_or("<unnamed>"),
            content_type = field.content_type().unwrap_or("<none>"),
            "Receiving upload"
        );
        let data = field
            .bytes()
            .await
            .map_err(multipart_error)?;
        file = Some(data);
    }

    let bytes =
        file.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    state.slots.replace(bytes).await?;

    Ok(Json(UploadResponse {
        url: state.config.upload_url(CROPPED_SLOT),
    }))
}

/// Keeps the body-limit rejection distinguishable from a malformed form.
fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::BadRequest(e.body_text())
    }
}
