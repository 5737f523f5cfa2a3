//! Storage adapters built on the Apache `object_store` crate.
//!
//! `ObjectStoreAdapter` implements the `ObjectStore` port for any backend
//! the crate supports; `create_s3_store` builds the AWS/MinIO backend from
//! startup configuration.

mod object_store_adapter;

pub use object_store_adapter::ObjectStoreAdapter;

use object_store::{ObjectStore as BackendObjectStore, aws::AmazonS3Builder};
use std::sync::Arc;

/// Connection settings for an S3-compatible backend.
#[derive(Debug, Clone)]
pub struct S3Settings {
    pub bucket: String,
    pub region: String,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    /// Custom endpoint for MinIO / localstack style deployments.
    pub endpoint: Option<String>,
}

/// Create an S3 backend from settings.
///
/// Credentials are optional so the AWS SDK's ambient credential chain
/// (instance profiles, SSO) keeps working; when both keys are provided
/// they are passed through as static credentials. The settings values are
/// never logged.
pub fn create_s3_store(
    settings: &S3Settings,
) -> Result<Arc<dyn BackendObjectStore>, object_store::Error> {
    let mut builder = AmazonS3Builder::from_env()
        .with_bucket_name(&settings.bucket)
        .with_region(&settings.region);

    if let Some(access_key_id) = &settings.access_key_id {
        builder = builder.with_access_key_id(access_key_id);
    }

    if let Some(secret_access_key) = &settings.secret_access_key {
        builder = builder.with_secret_access_key(secret_access_key);
    }

    if let Some(endpoint) = &settings.endpoint {
        builder = builder.with_endpoint(endpoint);
        if endpoint.starts_with("http://") {
            builder = builder.with_allow_http(true);
        }
    }

    let store = builder.build()?;
    Ok(Arc::new(store))
}
