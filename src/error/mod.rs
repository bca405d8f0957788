//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{auth::AuthError, config::ConfigError},
    model::api::ErrorDto,
};

/// Top-level application error type.
///
/// Aggregates all error types that can occur in the application and provides
/// automatic conversion to HTTP responses following the service's status
/// taxonomy: 400 malformed input, 403 privacy/ownership violation, 404 missing
/// entity, 409 duplicate, 500 everything else. Infrastructure variants use
/// `#[from]` for automatic conversion and always map to 500 with a generic
/// client-facing message; the details are only logged.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error; delegates to `AuthError::into_response()`.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// URL construction error from the OAuth endpoints.
    #[error(transparent)]
    UrlErr(#[from] url::ParseError),

    /// I/O error from binding or serving the network listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Malformed or missing request fields.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Privacy or ownership violation.
    ///
    /// Results in 403 Forbidden with the provided message.
    #[error("{0}")]
    Forbidden(String),

    /// Resource not found.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness violation: daily-post limit, duplicate like, duplicate
    /// relation, taken nickname.
    ///
    /// Results in 409 Conflict with the provided message.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with a message for server-side logging.
    ///
    /// Results in 500 Internal Server Error; the client sees a generic body.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// 4xx variants carry their specific message to the client; everything else
/// is logged in full and answered with a generic 500 body to avoid leaking
/// implementation details.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Forbidden(msg) => {
                (StatusCode::FORBIDDEN, Json(ErrorDto { error: msg })).into_response()
            }
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: msg })).into_response()
            }
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

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the error message and returns a generic body to the client. Used as
/// the fallback for errors without a specific HTTP mapping.
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
