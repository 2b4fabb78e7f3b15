//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type returned by every handler, extractor
//! and middleware. It wraps domain-specific errors and implements
//! `IntoResponse` so that each failure maps to exactly one status code.

pub mod config;
pub mod validation;

use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, validation::ValidationErrors},
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic error conversion. Variants that
/// describe a client mistake carry a message for logging or for the response
/// body; everything else becomes a 500 with a generic message.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// The request body failed one or more declared constraints.
    ///
    /// Results in 422 Unprocessable Entity with the field-to-messages map as body.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Parent or child resource does not exist.
    ///
    /// Results in 404 Not Found with an empty body. The message is only logged.
    #[error("{0}")]
    NotFound(String),

    /// Path parameter or request body could not be parsed into the expected type.
    ///
    /// Results in 400 Bad Request with the parse error as message.
    #[error("{0}")]
    UnparsableInput(String),

    /// None of the endpoint's media types appears in the `Accept` header.
    ///
    /// Results in 406 Not Acceptable with an empty body.
    #[error("No acceptable media type for Accept header '{0}'")]
    NotAcceptable(String),

    /// The request body has a `Content-Type` the endpoint does not consume.
    ///
    /// Results in 415 Unsupported Media Type.
    #[error("{0}")]
    UnsupportedMediaType(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::UnparsableInput(rejection.body_text())
    }
}

/// Converts application errors into HTTP responses.
///
/// Error bodies are always JSON, whatever media type was negotiated.
///
/// # Returns
/// - 400 Bad Request - For `UnparsableInput`
/// - 404 Not Found - For `NotFound`, empty body
/// - 406 Not Acceptable - For `NotAcceptable`, empty body
/// - 415 Unsupported Media Type - For `UnsupportedMediaType`
/// - 422 Unprocessable Entity - For `Validation`
/// - 500 Internal Server Error - For all other error types (DbErr, ConfigErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                StatusCode::NOT_FOUND.into_response()
            }
            Self::NotAcceptable(accept) => {
                tracing::debug!("Not acceptable: '{}'", accept);
                StatusCode::NOT_ACCEPTABLE.into_response()
            }
            Self::Validation(errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response()
            }
            Self::UnparsableInput(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::UnsupportedMediaType(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                Json(ErrorDto { error: msg }),
            )
                .into_response(),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message
/// to the client.
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
