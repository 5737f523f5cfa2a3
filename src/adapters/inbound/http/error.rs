use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::dto::ErrorResponseDto;
use crate::domain::errors::{StorageError, ValidationError};

/// HTTP-facing wrapper around the domain error taxonomy.
///
/// Handlers return this from `?` and axum renders the structured body;
/// the kind-to-status mapping lives in exactly one place.
#[derive(Debug)]
pub struct ApiError(pub StorageError);

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            StorageError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            StorageError::NotFound { .. } => StatusCode::NOT_FOUND,
            StorageError::AccessDenied { .. } => StatusCode::FORBIDDEN,
            StorageError::BackendUnavailable { .. } => StatusCode::BAD_GATEWAY,
            StorageError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self(StorageError::InvalidInput {
            message: message.into(),
        })
    }

    pub fn not_found(key: impl Into<String>) -> Self {
        Self(StorageError::NotFound { key: key.into() })
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponseDto {
            error: self.0.kind().to_string(),
            message: self.0.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}
