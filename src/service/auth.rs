//! Google OAuth2 login flow.
//!
//! The session store is the single source of truth for login state: the
//! callback stores the user id in the session, logout clears it, and no
//! provider token is ever handed to the client.

use oauth2::{AuthorizationCode, CsrfToken, Scope, TokenResponse};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use url::Url;

use crate::{
    data::user::UserRepository,
    error::AppError,
    state::OAuth2Client,
    util::nickname,
};

const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

/// Attempts at finding a free random nickname before giving up.
const NICKNAME_ATTEMPTS: usize = 10;

/// Profile fields returned from Google's OpenID userinfo endpoint.
#[derive(Debug, Deserialize)]
struct GoogleUserInfo {
    email: String,
}

/// Service for the Google OAuth2 authentication flow.
///
/// Orchestrates the authorization-code exchange, the userinfo lookup, and
/// find-or-create of the local account keyed by provider email.
pub struct AuthService<'a> {
    /// Database connection for user operations.
    pub db: &'a DatabaseConnection,
    /// HTTP client for Google API requests.
    pub http_client: &'a reqwest::Client,
    /// OAuth2 client for the Google authentication flow.
    pub oauth_client: &'a OAuth2Client,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
        }
    }

    /// Generates a Google OAuth2 login URL with CSRF protection.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - The consent-screen URL and the CSRF state
    ///   token the callback must echo
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .url();

        (authorize_url, csrf_state)
    }

    /// Handles the OAuth2 callback and resolves the local account.
    ///
    /// Exchanges the authorization code, reads the verified email from the
    /// userinfo endpoint, and returns the matching user, creating one with
    /// a fresh random nickname on first login.
    ///
    /// # Arguments
    /// - `authorization_code` - Code from Google's redirect
    ///
    /// # Returns
    /// - `Ok(Model)` - The logged-in user
    /// - `Err(AppError)` - Token exchange, userinfo fetch, or database failure
    pub async fn callback(
        &self,
        authorization_code: String,
    ) -> Result<entity::user::Model, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AppError::InternalError(format!("OAuth code exchange failed: {}", e)))?;

        let userinfo: GoogleUserInfo = self
            .http_client
            .get(GOOGLE_USERINFO_URL)
            .bearer_auth(token.access_token().secret())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        self.find_or_create_user(userinfo.email).await
    }

    /// Looks up the account for a provider email, creating it on first
    /// login.
    async fn find_or_create_user(&self, email: String) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        if let Some(user) = user_repo.find_by_email(&email).await? {
            return Ok(user);
        }

        let nickname = self.available_nickname(&user_repo).await?;
        let user = user_repo.create(email, nickname).await?;

        tracing::info!(user_id = user.id, "Created account on first login");

        Ok(user)
    }

    async fn available_nickname<'b>(
        &self,
        user_repo: &UserRepository<'b, DatabaseConnection>,
    ) -> Result<String, AppError> {
        for _ in 0..NICKNAME_ATTEMPTS {
            let candidate = nickname::generate();
            if user_repo.find_by_nickname(&candidate).await?.is_none() {
                return Ok(candidate);
            }
        }

        Err(AppError::InternalError(
            "Exhausted nickname generation attempts".to_string(),
        ))
    }
}
