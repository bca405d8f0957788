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
    service::notification::NotificationService,
    state::AppState,
};

/// GET /api/notifications/unread - The viewer's unread notifications.
pub async fn get_unread(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let notifications = NotificationService::new(&state.db).unread(user.id).await?;

    Ok((StatusCode::OK, Json(notifications)))
}

/// GET /api/notifications/read - The viewer's read notifications.
pub async fn get_read(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let notifications = NotificationService::new(&state.db).read(user.id).await?;

    Ok((StatusCode::OK, Json(notifications)))
}

/// PUT /api/notifications/{notification_id}/read - Mark one as read.
///
/// # Returns
/// - `200 OK`: The updated notification
/// - `404 Not Found`: Unknown id, or another recipient's notification
pub async fn mark_read(
    State(state): State<AppState>,
    session: Session,
    Path(notification_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let notification = NotificationService::new(&state.db)
        .mark_read(user.id, notification_id)
        .await?;

    Ok((StatusCode::OK, Json(notification)))
}
