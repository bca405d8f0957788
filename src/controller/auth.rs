use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, AppError},
    middleware::session::{AuthSession, CsrfSession},
    model::api::MessageDto,
    service::{auth::AuthService, user::UserService},
    state::AppState,
};

/// Query parameters for the OAuth callback endpoint.
///
/// # Fields
/// - `state` - CSRF protection token that must match the value stored in the session
/// - `code` - Authorization code used to exchange for access tokens
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from Google SSO for token exchange.
    pub code: String,
}

/// GET /api/auth/login - Redirect to the Google consent screen.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.http_client, &state.oauth_client);

    let (url, csrf_token) = auth_service.login_url();

    // Store CSRF token in session for verification during callback
    CsrfSession::new(&session)
        .set_token(csrf_token.secret().to_string())
        .await?;

    Ok(Redirect::temporary(url.as_ref()))
}

/// GET /api/auth/callback - Complete the OAuth code exchange and log in.
///
/// Validates the CSRF state against the session, exchanges the code for the
/// provider email, finds or creates the account, and stores the user id in
/// the session.
///
/// # Returns
/// - `200 OK`: Profile of the logged-in user
/// - `400 Bad Request`: CSRF state missing or mismatched
/// - `500 Internal Server Error`: Token exchange or database error
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    validate_csrf(&session, &params.0.state).await?;

    let auth_service = AuthService::new(&state.db, &state.http_client, &state.oauth_client);
    let user = auth_service.callback(params.0.code).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    let info = UserService::new(&state.db, state.storage.as_ref())
        .info(user.id)
        .await?;

    Ok((StatusCode::OK, Json(info)))
}

/// GET /api/auth/logout - Drop the server-side session.
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    ))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    if let Some(state) = stored_state {
        if state == csrf_state {
            return Ok(());
        }
    }

    Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
}
