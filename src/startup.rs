use std::sync::Arc;

use aws_config::BehaviorVersion;
use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::MySqlStore;

use crate::{
    config::Config,
    error::AppError,
    state::OAuth2Client,
    storage::{ObjectStorage, S3Storage},
};

/// Connects to the MySQL database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is
/// up to date before the application accepts requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions live in a MySQL table next to the application data; this store
/// is the single source of truth for whether a login is still live. Logout
/// deletes the session row, which invalidates the client's cookie no matter
/// what the client still holds.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<MySqlStore>, AppError> {
    let pool = db.get_mysql_connection_pool();
    let session_store = MySqlStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    Ok(SessionManagerLayer::new(session_store)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Builds the HTTP client used for OAuth token exchange and profile lookups.
///
/// Redirects are disabled; every external endpoint we call responds
/// directly, and following redirects would only widen the SSRF surface.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Configures the OAuth2 client for the Google authorization-code flow.
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let client = BasicClient::new(ClientId::new(config.google_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.google_client_secret.clone()))
        .set_auth_uri(AuthUrl::new(config.google_auth_url.clone())?)
        .set_token_uri(TokenUrl::new(config.google_token_url.clone())?)
        .set_redirect_uri(RedirectUrl::new(config.google_redirect_url.clone())?);

    Ok(client)
}

/// Creates the S3-backed object storage client.
///
/// Credentials and region come from the ambient AWS environment; the rest
/// of the application only sees the [`ObjectStorage`] trait.
pub async fn setup_storage(config: &Config) -> Arc<dyn ObjectStorage> {
    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let client = aws_sdk_s3::Client::new(&aws_config);

    Arc::new(S3Storage::new(client, config.s3_bucket.clone()))
}
