use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Client-facing error carrying an HTTP status and a message.
///
/// The message is returned to the client verbatim as `{"error": message}`, so it must
/// never contain internal details.
#[derive(Error, Debug)]
#[error("{status}: {message}")]
pub struct ApiError {
    /// Status code of the response
    pub status: StatusCode,
    /// Message returned to the client
    pub message: String,
}

impl ApiError {
    /// Create an error with an arbitrary status code
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// 404 Not Found
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// 409 Conflict
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!("API error: {}", self);

        (
            self.status,
            Json(ErrorDto {
                error: self.message,
            }),
        )
            .into_response()
    }
}
