use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::{api::Json, comment::PostCommentDto},
    service::comment::CommentService,
    state::AppState,
};

/// POST /api/diaries/{diary_id}/comments - Comment on a diary entry.
///
/// Notifies the entry's author, and the mentioned user when one is named.
///
/// # Returns
/// - `201 Created`: The stored comment with presigned profiles
/// - `400 Bad Request`: Empty content
/// - `403 Forbidden`: Privacy tier excludes the writer
/// - `404 Not Found`: Unknown entry or mentioned user
pub async fn post_comment(
    State(state): State<AppState>,
    session: Session,
    Path(diary_id): Path<i32>,
    Json(payload): Json<PostCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let service = CommentService::new(&state.db, state.storage.as_ref());
    let comment = service.post(user.id, diary_id, payload).await?;

    Ok((StatusCode::CREATED, Json(comment)))
}

/// GET /api/diaries/{diary_id}/comments - Comments on an entry, newest first.
pub async fn get_comments(
    State(state): State<AppState>,
    session: Session,
    Path(diary_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let service = CommentService::new(&state.db, state.storage.as_ref());
    let comments = service.list(user.id, diary_id).await?;

    Ok((StatusCode::OK, Json(comments)))
}

/// PUT /api/comments/{comment_id} - Edit a comment.
///
/// # Returns
/// - `200 OK`: The updated comment
/// - `403 Forbidden`: Caller did not write the comment
/// - `404 Not Found`: Unknown comment or mentioned user
pub async fn put_comment(
    State(state): State<AppState>,
    session: Session,
    Path(comment_id): Path<i32>,
    Json(payload): Json<PostCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let service = CommentService::new(&state.db, state.storage.as_ref());
    let comment = service.put(user.id, comment_id, payload).await?;

    Ok((StatusCode::OK, Json(comment)))
}

/// DELETE /api/comments/{comment_id} - Delete a comment; writer only.
pub async fn delete_comment(
    State(state): State<AppState>,
    session: Session,
    Path(comment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let service = CommentService::new(&state.db, state.storage.as_ref());
    service.delete(user.id, comment_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
