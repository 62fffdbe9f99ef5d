//! Error types for the Souk server application.
//!
//! All errors implement `IntoResponse` for Axum HTTP responses and use
//! `thiserror` for ergonomic error definitions. Validation failures map to
//! 400 Bad Request; everything else is treated as an internal server error
//! with the cause logged and a generic message returned to the client.
//! Not-found outcomes are decided inline in controllers from affected-row
//! counts, so they never appear here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Main error type for the Souk server application.
#[derive(Error, Debug)]
pub enum Error {
    /// Required request input was missing or malformed.
    #[error("{0}")]
    ValidationError(String),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For validation failures, with the message in the body
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ValidationError(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto { error: message }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the full error message for debugging, but returns a generic error
/// message to the client to avoid exposing internal implementation details.
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
