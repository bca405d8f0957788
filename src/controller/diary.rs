use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::{api::Json, diary::PostDiaryDto},
    service::diary::DiaryService,
    state::AppState,
};

/// POST /api/diaries - Post today's diary entry.
///
/// The entry and its music, weather, and ordered images are stored in one
/// transaction; a second entry on the same calendar day is rejected and
/// leaves nothing behind.
///
/// # Returns
/// - `201 Created`: The stored entry as the author sees it
/// - `400 Bad Request`: Empty title/content or incomplete music/weather
/// - `409 Conflict`: An entry already exists for today
pub async fn post_diary(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<PostDiaryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let service = DiaryService::new(&state.db, state.storage.as_ref());
    let diary = service.post(user.id, payload).await?;

    Ok((StatusCode::CREATED, Json(diary)))
}

/// GET /api/diaries/{diary_id} - Single diary entry with attachments.
///
/// # Returns
/// - `200 OK`: The entry with presigned media and like status
/// - `403 Forbidden`: Privacy tier excludes the viewer
/// - `404 Not Found`: Unknown entry
pub async fn get_diary(
    State(state): State<AppState>,
    session: Session,
    Path(diary_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let service = DiaryService::new(&state.db, state.storage.as_ref());
    let diary = service.get(user.id, diary_id).await?;

    Ok((StatusCode::OK, Json(diary)))
}

/// PUT /api/diaries/{diary_id} - Replace an entry's content and attachments.
///
/// # Returns
/// - `200 OK`: The updated entry
/// - `400 Bad Request`: Empty title/content or incomplete music/weather
/// - `403 Forbidden`: Caller is not the author
/// - `404 Not Found`: Unknown entry
pub async fn put_diary(
    State(state): State<AppState>,
    session: Session,
    Path(diary_id): Path<i32>,
    Json(payload): Json<PostDiaryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let service = DiaryService::new(&state.db, state.storage.as_ref());
    let diary = service.put(user.id, diary_id, payload).await?;

    Ok((StatusCode::OK, Json(diary)))
}

/// DELETE /api/diaries/{diary_id} - Delete an entry and its dependents.
pub async fn delete_diary(
    State(state): State<AppState>,
    session: Session,
    Path(diary_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let service = DiaryService::new(&state.db, state.storage.as_ref());
    service.delete(user.id, diary_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
