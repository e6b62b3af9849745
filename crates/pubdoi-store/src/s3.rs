//! S3-compatible object store client.

use std::fs;
use std::path::Path;
use std::time::Duration;

use chrono::Utc;
use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::ObjectStore;
use crate::error::StoreError;
use crate::sign::{SigningParams, authorization_header, sha256_hex, uri_encode};

/// HTTP request timeout for uploads.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Access key pair for request signing.
#[derive(Debug, Clone)]
pub struct S3Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
}

/// Blocking S3 client scoped to one bucket and region.
pub struct S3Store {
    bucket: String,
    region: String,
    credentials: S3Credentials,
    client: Client,
}

impl S3Store {
    /// Create a client with the default request timeout.
    pub fn new(
        bucket: impl Into<String>,
        region: impl Into<String>,
        credentials: S3Credentials,
    ) -> Result<Self, StoreError> {
        Self::with_timeout(bucket, region, credentials, REQUEST_TIMEOUT)
    }

    /// Create a client with an explicit request timeout.
    pub fn with_timeout(
        bucket: impl Into<String>,
        region: impl Into<String>,
        credentials: S3Credentials,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            bucket: bucket.into(),
            region: region.into(),
            credentials,
            client,
        })
    }

    fn host(&self) -> String {
        format!("{}.s3.{}.amazonaws.com", self.bucket, self.region)
    }

    /// Public URL of an object under the bucket's virtual-hosted-style host.
    #[must_use]
    pub fn public_url(&self, key: &str) -> String {
        format!("https://{}/{}", self.host(), uri_encode(key, false))
    }
}

impl ObjectStore for S3Store {
    fn upload(&self, local_path: &Path, key: &str) -> Result<String, StoreError> {
        if !local_path.exists() {
            return Err(StoreError::FileNotFound {
                path: local_path.to_path_buf(),
            });
        }
        let body = fs::read(local_path).map_err(|source| StoreError::Io {
            path: local_path.to_path_buf(),
            source,
        })?;

        let host = self.host();
        let timestamp = Utc::now();
        let amz_date = timestamp.format("%Y%m%dT%H%M%SZ").to_string();
        let payload_hash = sha256_hex(&body);
        let canonical_uri = format!("/{}", uri_encode(key, false));
        // Sorted lowercase header list; host and x-amz-* must be signed.
        let headers = vec![
            ("host".to_string(), host.clone()),
            ("x-amz-content-sha256".to_string(), payload_hash.clone()),
            ("x-amz-date".to_string(), amz_date.clone()),
        ];
        let authorization = authorization_header(&SigningParams {
            access_key_id: &self.credentials.access_key_id,
            secret_access_key: &self.credentials.secret_access_key,
            region: &self.region,
            service: "s3",
            method: "PUT",
            canonical_uri: &canonical_uri,
            canonical_query: "",
            headers: &headers,
            payload_hash: &payload_hash,
            timestamp,
        });

        let url = self.public_url(key);
        debug!(key, bytes = body.len(), "uploading object");
        let response = self
            .client
            .put(&url)
            .header("Authorization", authorization)
            .header("x-amz-content-sha256", payload_hash)
            .header("x-amz-date", amz_date)
            .body(body)
            .send()?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(StoreError::Upload { status, message });
        }
        info!(key, %url, "object uploaded");
        Ok(url)
    }
}
