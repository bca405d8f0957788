use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No live session for the request.
    ///
    /// The session store holds no user id for this request, either because
    /// the client never logged in or because logout flushed the session.
    /// The store is the source of truth for token liveness, so this rejects
    /// the request regardless of any credentials the client still holds.
    /// Results in a 401 Unauthorized response.
    #[error("Request carries no live session")]
    NotLoggedIn,

    /// The session references a user id that no longer exists.
    ///
    /// Happens when an account is deleted while a session for it is still
    /// live. Results in a 401 Unauthorized response.
    #[error("Session user {0} not found in database")]
    UserNotInDatabase(i32),

    /// CSRF state validation failed during the OAuth callback.
    ///
    /// The state token in the callback URL does not match the token stored
    /// in the session. Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay generic; the precise cause is available to
/// server logs through the `Display` impl.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotLoggedIn | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Login required".to_string(),
                }),
            )
                .into_response(),
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "There was an issue logging you in, please try again.".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
