use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::{
    errors::StorageResult,
    models::{ObjectContent, StoredObject},
    value_objects::ObjectKey,
};

/// Port for object storage operations.
/// This abstracts the actual storage backend (S3, MinIO, in-memory, ...).
#[async_trait]
pub trait ObjectStore: Send + Sync + 'static {
    /// Store object data, overwriting any existing object at the key.
    async fn put_object(
        &self,
        key: &ObjectKey,
        data: Bytes,
        content_type: Option<&str>,
    ) -> StorageResult<StoredObject>;

    /// Retrieve object data together with its stored content type.
    async fn get_object(&self, key: &ObjectKey) -> StorageResult<ObjectContent>;

    /// Delete object data. Deleting a missing key is a silent success.
    async fn delete_object(&self, key: &ObjectKey) -> StorageResult<()>;

    /// List objects whose keys start with the given prefix.
    async fn list_objects(
        &self,
        prefix: Option<&str>,
        max_results: Option<usize>,
    ) -> StorageResult<Vec<StoredObject>>;
}
