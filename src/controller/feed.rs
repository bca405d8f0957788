use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::api::PaginationQuery,
    service::feed::FeedService,
    state::AppState,
};

#[derive(Deserialize)]
pub struct CalendarParams {
    /// Target month in `YYYY-MM` form.
    pub month: String,
}

/// GET /api/diaries/feeds/mine - One page of the viewer's own entries.
///
/// Pagination defaults to page 1, limit 5; invalid values fall back to the
/// defaults rather than erroring.
pub async fn my_feed(
    State(state): State<AppState>,
    session: Session,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let service = FeedService::new(&state.db, state.storage.as_ref());
    let page = service.my_posts(user.id, &pagination).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// GET /api/diaries/feeds/mates - One page of accepted mates' entries.
///
/// Covers public and mate-tier entries; a viewer with no mates gets an
/// empty page.
pub async fn mate_feed(
    State(state): State<AppState>,
    session: Session,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let service = FeedService::new(&state.db, state.storage.as_ref());
    let page = service.mate_feed(user.id, &pagination).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// GET /api/diaries/feeds/explore - One page of everyone's public entries.
pub async fn explore_feed(
    State(state): State<AppState>,
    session: Session,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let service = FeedService::new(&state.db, state.storage.as_ref());
    let page = service.explore(user.id, &pagination).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// GET /api/diaries/calendar/{user_id}?month=YYYY-MM - A month of entry
/// markers for one user.
///
/// The privacy tiers included depend on the viewer's relation to the target:
/// owners see everything, mates see mate and public entries, strangers see
/// public entries only.
///
/// # Returns
/// - `200 OK`: (date, diary_id, emoji, mood) markers for the month
/// - `400 Bad Request`: Month not in `YYYY-MM` form
/// - `404 Not Found`: Unknown target user
pub async fn calendar(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Query(params): Query<CalendarParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let service = FeedService::new(&state.db, state.storage.as_ref());
    let entries = service.calendar(user.id, user_id, &params.month).await?;

    Ok((StatusCode::OK, Json(entries)))
}
