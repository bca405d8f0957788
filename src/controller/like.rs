use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::diary::LikedDto,
    service::like::LikeService,
    state::AppState,
};

/// POST /api/diaries/{diary_id}/like - Like a diary entry.
///
/// The like row and the entry's counter move in one transaction.
///
/// # Returns
/// - `201 Created`: Like stored and counter incremented
/// - `403 Forbidden`: Privacy tier excludes the viewer
/// - `404 Not Found`: Unknown entry
/// - `409 Conflict`: Already liked; nothing changes
pub async fn like_diary(
    State(state): State<AppState>,
    session: Session,
    Path(diary_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    LikeService::new(&state.db).like(user.id, diary_id).await?;

    Ok(StatusCode::CREATED)
}

/// DELETE /api/diaries/{diary_id}/like - Remove the viewer's like.
///
/// # Returns
/// - `204 No Content`: Like removed and counter decremented
/// - `404 Not Found`: Unknown entry, or the viewer had not liked it
pub async fn unlike_diary(
    State(state): State<AppState>,
    session: Session,
    Path(diary_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    LikeService::new(&state.db).unlike(user.id, diary_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/diaries/{diary_id}/like - Whether the viewer has liked the entry.
pub async fn get_liked(
    State(state): State<AppState>,
    session: Session,
    Path(diary_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let liked = LikeService::new(&state.db).liked(user.id, diary_id).await?;

    Ok((StatusCode::OK, Json(LikedDto { liked })))
}
