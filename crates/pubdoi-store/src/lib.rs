//! Object store upload client.
//!
//! The pipeline talks to storage through the [`ObjectStore`] trait;
//! [`S3Store`] is the S3-compatible implementation using blocking HTTP
//! with AWS Signature V4 request signing.

mod error;
mod s3;
mod sign;

pub use error::StoreError;
pub use s3::{S3Credentials, S3Store};

use std::path::Path;

/// Upload-by-key interface to the object store.
pub trait ObjectStore {
    /// Upload a local file under `key`, returning its public URL.
    fn upload(&self, local_path: &Path, key: &str) -> Result<String, StoreError>;
}
