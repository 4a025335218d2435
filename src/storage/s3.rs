use std::time::Duration;

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;

use super::{StorageBackend, StorageError, content_type_for};

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// S3-compatible object storage backend. Built against Cloudflare R2 (auto
/// region, custom endpoint) but works with anything speaking the S3 API.
pub struct S3Backend {
    client: Client,
    bucket: String,
}

impl S3Backend {
    pub async fn connect(
        endpoint_url: &str,
        access_key_id: &str,
        secret_access_key: &str,
        bucket: &str,
    ) -> Self {
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .endpoint_url(endpoint_url)
            .region(Region::new("auto"))
            .credentials_provider(Credentials::new(
                access_key_id,
                secret_access_key,
                None,
                None,
                "r2-static",
            ))
            .load()
            .await;
        Self {
            client: Client::new(&shared),
            bucket: bucket.to_string(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// One HEAD against the bucket, bounded by a short timeout. Run once at
    /// startup; a failure here takes the remote out of rotation for the
    /// lifetime of the process.
    pub async fn probe(&self) -> Result<(), StorageError> {
        let head = self.client.head_bucket().bucket(&self.bucket).send();
        match tokio::time::timeout(PROBE_TIMEOUT, head).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => Err(StorageError::Backend(format!("{}", DisplayErrorContext(&e)))),
            Err(_) => Err(StorageError::Backend("bucket probe timed out".into())),
        }
    }
}

#[async_trait]
impl StorageBackend for S3Backend {
    async fn put(&self, key: &str, data: Bytes) -> Result<(), StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type_for(key))
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|e| StorageError::Backend(format!("{}", DisplayErrorContext(&e))))?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Bytes, StorageError> {
        let out = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                let service = e.into_service_error();
                if service.is_no_such_key() {
                    StorageError::NotFound
                } else {
                    StorageError::Backend(format!("{}", DisplayErrorContext(&service)))
                }
            })?;
        let data = out
            .body
            .collect()
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        Ok(data.into_bytes())
    }

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        match self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(e) => {
                let service = e.into_service_error();
                if service.is_not_found() {
                    Ok(false)
                } else {
                    Err(StorageError::Backend(format!(
                        "{}",
                        DisplayErrorContext(&service)
                    )))
                }
            }
        }
    }

    async fn delete_prefix(&self, prefix: &str) -> Result<(), StorageError> {
        let mut continuation: Option<String> = None;
        loop {
            let mut req = self
                .client
                .list_objects_v2()
                .bucket(&self.bucket)
                .prefix(format!("{prefix}/"));
            if let Some(token) = continuation.take() {
                req = req.continuation_token(token);
            }
            let page = req
                .send()
                .await
                .map_err(|e| StorageError::Backend(format!("{}", DisplayErrorContext(&e))))?;
            for object in page.contents() {
                if let Some(key) = object.key() {
                    self.client
                        .delete_object()
                        .bucket(&self.bucket)
                        .key(key)
                        .send()
                        .await
                        .map_err(|e| {
                            StorageError::Backend(format!("{}", DisplayErrorContext(&e)))
                        })?;
                }
            }
            match page.next_continuation_token() {
                Some(token) => continuation = Some(token.to_string()),
                None => break,
            }
        }
        Ok(())
    }
}
