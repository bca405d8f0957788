//! Presigned-URL access to the object store.
//!
//! The rest of the application only ever sees storage keys and short-lived
//! presigned URLs produced here; credentials never leave this module. URLs
//! are recomputed on every read and expire after [`PRESIGN_EXPIRY`].

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::presigning::PresigningConfig;

use crate::error::AppError;

/// How long a presigned URL stays valid.
pub const PRESIGN_EXPIRY: Duration = Duration::from_secs(600);

/// Seam between the services and the object store.
///
/// Implemented by [`S3Storage`] in production and by in-memory fakes in
/// service tests.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Returns a short-lived URL granting read access to `key`.
    async fn download_url(&self, key: &str) -> Result<String, AppError>;

    /// Returns a short-lived URL granting write access to `key` with the
    /// given content type.
    async fn upload_url(&self, key: &str, content_type: &str) -> Result<String, AppError>;
}

/// S3-backed implementation of [`ObjectStorage`].
pub struct S3Storage {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3Storage {
    pub fn new(client: aws_sdk_s3::Client, bucket: String) -> Self {
        Self { client, bucket }
    }

    fn presigning_config() -> Result<PresigningConfig, AppError> {
        PresigningConfig::expires_in(PRESIGN_EXPIRY)
            .map_err(|e| AppError::InternalError(format!("Invalid presigning config: {}", e)))
    }
}

#[async_trait]
impl ObjectStorage for S3Storage {
    async fn download_url(&self, key: &str) -> Result<String, AppError> {
        let request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(Self::presigning_config()?)
            .await
            .map_err(|e| {
                AppError::InternalError(format!("Failed to presign download for {}: {}", key, e))
            })?;

        Ok(request.uri().to_string())
    }

    async fn upload_url(&self, key: &str, content_type: &str) -> Result<String, AppError> {
        let request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .presigned(Self::presigning_config()?)
            .await
            .map_err(|e| {
                AppError::InternalError(format!("Failed to presign upload for {}: {}", key, e))
            })?;

        Ok(request.uri().to_string())
    }
}

/// Presigns an optional stored key, passing `None` through.
///
/// Profile images are nullable everywhere they appear, so this keeps the
/// call sites short.
pub async fn presign_optional(
    storage: &dyn ObjectStorage,
    key: Option<&str>,
) -> Result<Option<String>, AppError> {
    match key {
        Some(key) => Ok(Some(storage.download_url(key).await?)),
        None => Ok(None),
    }
}
