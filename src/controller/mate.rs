use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::{api::Json, mate::PostMateDto},
    service::mate::MateService,
    state::AppState,
};

/// GET /api/mates - The viewer's accepted mates.
pub async fn get_mates(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let service = MateService::new(&state.db, state.storage.as_ref());
    let mates = service.mates(user.id).await?;

    Ok((StatusCode::OK, Json(mates)))
}

/// POST /api/mates/requests - Send a mate request.
///
/// The receiver is notified.
///
/// # Returns
/// - `201 Created`: Request stored
/// - `400 Bad Request`: Requesting oneself
/// - `404 Not Found`: Unknown receiver
/// - `409 Conflict`: A relation already exists in either direction
pub async fn post_request(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<PostMateDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let service = MateService::new(&state.db, state.storage.as_ref());
    service.request(user.id, payload).await?;

    Ok(StatusCode::CREATED)
}

/// GET /api/mates/requests/sent - The viewer's pending outgoing requests.
pub async fn get_sent_requests(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let service = MateService::new(&state.db, state.storage.as_ref());
    let requests = service.sent_requests(user.id).await?;

    Ok((StatusCode::OK, Json(requests)))
}

/// GET /api/mates/requests/received - The viewer's pending incoming requests.
pub async fn get_received_requests(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let service = MateService::new(&state.db, state.storage.as_ref());
    let requests = service.received_requests(user.id).await?;

    Ok((StatusCode::OK, Json(requests)))
}

/// PUT /api/mates/requests/{mate_id}/accept - Accept a pending request.
///
/// Receiver only; the requester is notified.
///
/// # Returns
/// - `200 OK`: Relation accepted
/// - `403 Forbidden`: Caller is not the receiver
/// - `404 Not Found`: No pending request with this id
pub async fn accept_request(
    State(state): State<AppState>,
    session: Session,
    Path(mate_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let service = MateService::new(&state.db, state.storage.as_ref());
    service.accept(user.id, mate_id).await?;

    Ok(StatusCode::OK)
}

/// DELETE /api/mates/requests/{mate_id} - Reject a pending request.
pub async fn reject_request(
    State(state): State<AppState>,
    session: Session,
    Path(mate_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let service = MateService::new(&state.db, state.storage.as_ref());
    service.reject(user.id, mate_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/mates/{mate_id} - Dissolve an accepted relation.
///
/// Either side of the relation may remove it.
pub async fn delete_mate(
    State(state): State<AppState>,
    session: Session,
    Path(mate_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let service = MateService::new(&state.db, state.storage.as_ref());
    service.remove(user.id, mate_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
