//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned for each request handler
//! through Axum's state extraction. All fields are cheap to clone: the
//! database connection is a pooled handle, `reqwest::Client` is an `Arc`
//! internally, the OAuth client is designed to be cloned, and the storage
//! client is reference-counted.

use std::sync::Arc;

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use crate::storage::ObjectStorage;

/// Type alias for the OAuth2 client configured for Google authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for external API requests (OAuth token exchange,
    /// provider profile lookups).
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Google authentication flow.
    pub oauth_client: OAuth2Client,

    /// Object storage client producing presigned media URLs.
    pub storage: Arc<dyn ObjectStorage>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        storage: Arc<dyn ObjectStorage>,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            storage,
        }
    }
}
