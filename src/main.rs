//! Social diary API backend.
//!
//! The service follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - SeaORM repositories over the diary schema
//! - **Model Layer** (`model/`) - Request and response DTOs
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Authentication guard and typed session access
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP clients, object storage)
//! - **Startup** (`startup`) - Initialization of database, sessions, OAuth, and storage
//! - **Router** (`router`) - Axum route configuration
//! - **Storage** (`storage`) - Presigned URL generation for the media bucket

mod config;
mod controller;
mod data;
mod error;
mod middleware;
mod model;
mod router;
mod service;
mod startup;
mod state;
mod storage;
mod util;

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;
    let storage = startup::setup_storage(&config).await;

    let app = router::router()
        .with_state(AppState::new(db, http_client, oauth_client, storage))
        .layer(session);

    let address = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;

    tracing::info!("Listening on {}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
