use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::{auth::AuthGuard, session::AuthSession},
    model::{api::Json, user::PutUserDto},
    service::user::UserService,
    state::AppState,
};

/// Nickname search query.
#[derive(Debug, Deserialize)]
pub struct SearchUserParams {
    #[serde(default)]
    pub nickname: String,
}

/// GET /api/users/me - Profile of the logged-in user.
///
/// # Returns
/// - `200 OK`: Profile with diary and mate counts
/// - `401 Unauthorized`: Not logged in
pub async fn get_me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let info = UserService::new(&state.db, state.storage.as_ref())
        .info(user.id)
        .await?;

    Ok((StatusCode::OK, Json(info)))
}

/// PUT /api/users/me - Partial profile update for the logged-in user.
///
/// # Returns
/// - `200 OK`: Updated profile
/// - `400 Bad Request`: Nickname outside 2..=14 characters
/// - `409 Conflict`: Nickname already taken
pub async fn put_me(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<PutUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let info = UserService::new(&state.db, state.storage.as_ref())
        .update(user, payload)
        .await?;

    Ok((StatusCode::OK, Json(info)))
}

/// DELETE /api/users/me - Delete the logged-in user's account.
///
/// The session is cleared alongside the account.
pub async fn delete_me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    UserService::new(&state.db, state.storage.as_ref())
        .delete_account(user.id)
        .await?;

    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/users?nickname= - Search users by nickname fragment.
///
/// # Returns
/// - `200 OK`: Matching compact profiles, nickname-ordered
/// - `400 Bad Request`: Blank nickname fragment
pub async fn search_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<SearchUserParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_user().await?;

    let profiles = UserService::new(&state.db, state.storage.as_ref())
        .search(&params.nickname)
        .await?;

    Ok((StatusCode::OK, Json(profiles)))
}

/// GET /api/users/{user_id}/music - A user's music history, newest first.
///
/// Tracks from entries the viewer cannot see are filtered out.
///
/// # Returns
/// - `200 OK`: The listener's profile plus visible tracks
/// - `404 Not Found`: Unknown user
pub async fn get_music_history(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).require_user().await?;

    let history = UserService::new(&state.db, state.storage.as_ref())
        .music_history(viewer.id, user_id)
        .await?;

    Ok((StatusCode::OK, Json(history)))
}

/// GET /api/users/{user_id} - Public profile of another user.
///
/// # Returns
/// - `200 OK`: Profile with diary and mate counts
/// - `404 Not Found`: Unknown user
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_user().await?;

    let info = UserService::new(&state.db, state.storage.as_ref())
        .info(user_id)
        .await?;

    Ok((StatusCode::OK, Json(info)))
}
