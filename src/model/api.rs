//! Generic API envelope types, body extraction, and pagination.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AppError;

/// JSON body extractor reporting malformed payloads as 400.
///
/// Axum's own `Json` rejects undeserializable bodies with 422; every
/// malformed input here is a plain bad request, including syntactically
/// valid JSON carrying an out-of-set enum value.
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Error body returned for every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Plain confirmation body for writes without a richer payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDto {
    pub message: String,
}

const DEFAULT_PAGE: u64 = 1;
const DEFAULT_LIMIT: u64 = 5;

/// Offset pagination query parameters.
///
/// Both fields are lenient: a missing, non-numeric or zero value falls back
/// to the default instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationQuery {
    #[serde(default, deserialize_with = "lenient_u64")]
    page: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    limit: Option<u64>,
}

impl PaginationQuery {
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }

    /// 1-based page number, at least 1.
    pub fn page(&self) -> u64 {
        match self.page {
            Some(page) if page >= 1 => page,
            _ => DEFAULT_PAGE,
        }
    }

    /// Page size, at least 1.
    pub fn limit(&self) -> u64 {
        match self.limit {
            Some(limit) if limit >= 1 => limit,
            _ => DEFAULT_LIMIT,
        }
    }

    /// Rows to skip: `limit * (page - 1)`.
    pub fn offset(&self) -> u64 {
        self.limit() * (self.page() - 1)
    }
}

/// Deserializes a query value as `u64`, mapping anything unparsable to
/// `None` instead of failing the whole request.
fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.parse().ok()))
}
