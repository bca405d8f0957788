use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{error::AppError, middleware::auth::AuthGuard, state::AppState};

#[derive(Deserialize)]
pub struct DownloadUrlParams {
    /// Storage key of the object to read.
    pub key: String,
}

#[derive(Deserialize)]
pub struct UploadUrlParams {
    /// Storage key the object will be written to.
    pub key: String,
    /// MIME type the upload must carry.
    pub content_type: String,
}

#[derive(Serialize)]
pub struct PresignedUrlDto {
    pub url: String,
}

/// GET /api/storage/download-url - Presigned read URL for a stored object.
///
/// Credentials never reach the client; the URL expires after a few minutes.
pub async fn get_download_url(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<DownloadUrlParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_user().await?;

    let url = state.storage.download_url(&params.key).await?;

    Ok((StatusCode::OK, Json(PresignedUrlDto { url })))
}

/// GET /api/storage/upload-url - Presigned write URL for a storage key.
pub async fn get_upload_url(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<UploadUrlParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_user().await?;

    let url = state
        .storage
        .upload_url(&params.key, &params.content_type)
        .await?;

    Ok((StatusCode::OK, Json(PresignedUrlDto { url })))
}
