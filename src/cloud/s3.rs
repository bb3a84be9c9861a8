use std::fs;
use std::path::Path;

use log::{debug, info};
use rusoto_core::{ByteStream, HttpClient, Region};
use rusoto_credential::StaticProvider;
use rusoto_s3::{PutObjectRequest, S3Client, S3};

use crate::config::MinioConfig;
use crate::errors::{BackupError, Result};

/// S3-compatible uploader bound to one bucket.
///
/// The client talks TLS to the configured endpoint with static credentials.
/// The `minio.port` config field is not honored; uploads always go to
/// `https://<endpoint>` on the default TLS port.
pub struct ObjectStore {
    bucket: String,
    client: S3Client,
}

impl ObjectStore {
    pub fn from_config(minio: &MinioConfig) -> Result<Self> {
        let region = Region::Custom {
            name: "minio".to_string(),
            endpoint: format!("https://{}", minio.endpoint),
        };

        let credentials = StaticProvider::new_minimal(
            minio.access_key.clone(),
            minio.security_key.clone(),
        );

        let http_client = HttpClient::new().map_err(|e| {
            BackupError::ObjectStore(format!("failed to create HTTP client: {}", e))
        })?;

        Ok(ObjectStore {
            bucket: minio.bucket.clone(),
            client: S3Client::new_with(http_client, credentials, region),
        })
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Upload one staged archive under `key` with a single PutObject call.
    ///
    /// No retry and no multipart: the archive was staged locally as one
    /// unit, and a failed upload fails the run.
    pub async fn put_object(&self, key: &str, local_path: &Path) -> Result<()> {
        let contents =
            fs::read(local_path).map_err(|e| BackupError::filesystem(local_path, e))?;
        let size = contents.len();

        debug!(
            "Uploading {} ({} bytes) to s3://{}/{}",
            local_path.display(),
            size,
            self.bucket,
            key
        );

        let request = PutObjectRequest {
            bucket: self.bucket.clone(),
            key: key.to_string(),
            body: Some(ByteStream::from(contents)),
            content_length: Some(size as i64),
            ..Default::default()
        };

        self.client.put_object(request).await.map_err(|e| {
            BackupError::ObjectStore(format!(
                "PUT s3://{}/{} failed: {}",
                self.bucket, key, e
            ))
        })?;

        info!("Uploaded s3://{}/{}", self.bucket, key);
        Ok(())
    }
}
