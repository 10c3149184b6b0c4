//! Multipart upload handler and extension validation.

use axum::Router;
use axum::extract::{Extension, Multipart};
use axum::response::Json as JsonResponse;
use axum::routing::post;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::config::ALLOWED_EXTENSIONS;
use crate::error::ApiError;
use crate::storage::Storage;

#[derive(Serialize)]
pub(crate) struct UploadResponse {
    message: &'static str,
    filename: String,
}

/// Routes served by the upload API.
pub fn routes(storage: Arc<Storage>) -> Router {
    Router::new()
        .route("/api/upload", post(upload_file))
        .layer(Extension(storage))
}

/// Accepts a multipart form with a `file` field and stores the payload
/// under its original filename in the upload directory.
pub async fn upload_file(
    Extension(storage): Extension<Arc<Storage>>,
    mut multipart: Multipart,
) -> Result<JsonResponse<UploadResponse>, ApiError> {
    // A body the parser cannot read carries no usable file field, so parse
    // failures get the same answer as a missing field.
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::MissingFile)?
    {
        if field.name() != Some("file") {
            continue;
        }

        // A part without a filename is the browser convention for a file
        // input submitted with nothing chosen.
        let filename = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => return Err(ApiError::MissingFile),
        };
        if !allowed_file(&filename) {
            return Err(ApiError::DisallowedType);
        }

        let data = field.bytes().await.map_err(|_| ApiError::MissingFile)?;
        storage.save_file(&filename, &data).await?;

        info!(filename, bytes = data.len(), "file uploaded");
        return Ok(JsonResponse(UploadResponse {
            message: "File successfully uploaded",
            filename,
        }));
    }

    Err(ApiError::MissingFile)
}

/// Checks the segment following the first `.` against the allow-list.
///
/// Matches the upstream behavior: `photo.tar.gz` is judged by `tar` and
/// rejected, while `a.png.exe` is judged by `png` and accepted.
fn allowed_file(filename: &str) -> bool {
    filename
        .split('.')
        .nth(1)
        .is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}
