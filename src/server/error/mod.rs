//! Error types for the Holocron server.
//!
//! All errors implement `IntoResponse` for Axum HTTP responses and use `thiserror` for
//! their `Display` and `Error` implementations.

/// Client-facing API error.
pub mod api;
/// Configuration errors.
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::{
        error::{api::ApiError, config::ConfigError},
        util::password::PasswordError,
    },
};

/// Main error type for the Holocron server.
///
/// Aggregates domain errors and external library errors so handlers can use `?` throughout.
/// The `IntoResponse` implementation maps each to an HTTP response for API consumers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Client-facing error with its own status code.
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// Password hashing failed.
    #[error(transparent)]
    PasswordError(#[from] PasswordError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] DbErr),
    /// I/O error while binding or serving.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - Status of the [`ApiError`] - For errors raised deliberately by services
/// - 409 Conflict - For unique or foreign key constraint violations
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ApiError(err) => err.into_response(),
            Self::DbErr(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    tracing::debug!("Unique constraint violation: {}", detail);

                    ApiError::conflict("A record with the same unique value already exists")
                        .into_response()
                }
                Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                    tracing::debug!("Foreign key constraint violation: {}", detail);

                    ApiError::conflict("The record is referenced by or references another record")
                        .into_response()
                }
                _ => InternalServerError(err).into_response(),
            },
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
