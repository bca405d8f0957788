use crate::error::{config::ConfigError, AppError};

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

pub struct Config {
    pub database_url: String,
    pub port: u16,

    pub google_client_id: String,
    pub google_client_secret: String,
    pub google_redirect_url: String,

    pub google_auth_url: String,
    pub google_token_url: String,

    pub s3_bucket: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(4000),
            google_client_id: std::env::var("GOOGLE_CLIENT_ID")
                .map_err(|_| ConfigError::MissingEnvVar("GOOGLE_CLIENT_ID".to_string()))?,
            google_client_secret: std::env::var("GOOGLE_CLIENT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("GOOGLE_CLIENT_SECRET".to_string()))?,
            google_redirect_url: std::env::var("GOOGLE_REDIRECT_URL")
                .map_err(|_| ConfigError::MissingEnvVar("GOOGLE_REDIRECT_URL".to_string()))?,
            google_auth_url: GOOGLE_AUTH_URL.to_string(),
            google_token_url: GOOGLE_TOKEN_URL.to_string(),
            s3_bucket: std::env::var("S3_BUCKET")
                .map_err(|_| ConfigError::MissingEnvVar("S3_BUCKET".to_string()))?,
        })
    }
}
