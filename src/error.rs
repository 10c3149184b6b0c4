//! API error types and response conversions.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json as JsonResponse, Response};
use serde_json::json;

use crate::storage::StorageError;

pub enum ApiError {
    /// No `file` field in the form, or the field carries an empty filename.
    MissingFile,
    /// Filename extension is not in the allow-list.
    DisallowedType,
    /// Filename resolves outside the upload directory.
    InvalidName,
    NotFound(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingFile => (
                StatusCode::BAD_REQUEST,
                JsonResponse(json!({ "error": "No file selected" })),
            )
                .into_response(),
            ApiError::DisallowedType => (
                StatusCode::BAD_REQUEST,
                JsonResponse(json!({ "error": "Allowed file types are png, jpg, jpeg, gif" })),
            )
                .into_response(),
            ApiError::InvalidName => (
                StatusCode::BAD_REQUEST,
                JsonResponse(json!({ "error": "Invalid filename" })),
            )
                .into_response(),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            // Storage faults stay opaque, without the structured error body.
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response(),
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(error: StorageError) -> Self {
        match error {
            StorageError::InvalidName => ApiError::InvalidName,
            StorageError::Io(err) => ApiError::Internal(err.to_string()),
        }
    }
}
