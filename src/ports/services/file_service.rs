use async_trait::async_trait;

use crate::domain::{
    errors::StorageResult,
    models::{ObjectContent, StoredObject, UploadRequest},
    value_objects::{KeyPrefix, ObjectKey},
};

/// Port for file management operations.
/// This trait defines the business surface exposed to the HTTP layer.
#[async_trait]
pub trait FileService: Send + Sync + 'static {
    /// Upload a file, overwriting any existing object at the same key.
    /// Returns the metadata of the written object.
    async fn upload(&self, request: UploadRequest) -> StorageResult<StoredObject>;

    /// Download a file. Fails with `NotFound` when the key is absent.
    async fn download(&self, key: &ObjectKey) -> StorageResult<ObjectContent>;

    /// List files under a prefix. An empty result is not an error.
    async fn list(
        &self,
        prefix: Option<&KeyPrefix>,
        max_results: Option<usize>,
    ) -> StorageResult<Vec<StoredObject>>;

    /// Delete a file. Idempotent: deleting a missing key succeeds.
    async fn delete(&self, key: &ObjectKey) -> StorageResult<()>;
}
