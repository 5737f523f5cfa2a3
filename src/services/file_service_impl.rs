use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    domain::{
        errors::{StorageError, StorageResult},
        models::{ObjectContent, StoredObject, UploadRequest},
        value_objects::{KeyPrefix, ObjectKey},
    },
    ports::{services::FileService, storage::ObjectStore},
    services::retry::{RetryPolicy, with_retry},
};

/// Implementation of FileService over a storage backend.
///
/// Owns the storage gateway contract: retry of transient failures,
/// content-type inference, and ETag fallback. All validation of keys and
/// prefixes happens before this layer, in the value-object constructors.
#[derive(Clone)]
pub struct FileServiceImpl {
    store: Arc<dyn ObjectStore>,
    retry: RetryPolicy,
}

impl FileServiceImpl {
    /// Create a new FileServiceImpl with the default retry policy.
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self {
            store,
            retry: RetryPolicy::default(),
        }
    }

    /// Override the retry policy.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Caller-supplied content type wins; otherwise guess from the key's
    /// extension.
    fn resolve_content_type(key: &ObjectKey, supplied: Option<String>) -> Option<String> {
        supplied.or_else(|| {
            mime_guess::from_path(key.as_str())
                .first_raw()
                .map(str::to_string)
        })
    }

    /// Calculate an ETag for object data when the backend does not supply
    /// one.
    fn calculate_etag(data: &[u8]) -> String {
        format!("{:x}", md5::compute(data))
    }

    /// Access-denied failures almost always mean bad credentials in the
    /// environment, so they get elevated severity.
    fn note_failure(operation: &str, err: &StorageError) {
        if let StorageError::AccessDenied { message } = err {
            tracing::error!(operation, %message, "storage access denied, check credentials");
        }
    }
}

#[async_trait]
impl FileService for FileServiceImpl {
    async fn upload(&self, request: UploadRequest) -> StorageResult<StoredObject> {
        let content_type = Self::resolve_content_type(&request.key, request.content_type);

        let store = self.store.clone();
        let key = request.key.clone();
        let data = request.data.clone();
        let result = with_retry(&self.retry, "put_object", move || {
            let store = store.clone();
            let key = key.clone();
            let data = data.clone();
            let content_type = content_type.clone();
            async move { store.put_object(&key, data, content_type.as_deref()).await }
        })
        .await;

        match result {
            Ok(mut object) => {
                if object.etag.is_none() {
                    object.etag = Some(Self::calculate_etag(&request.data));
                }
                tracing::debug!(key = %object.key, size = object.size, "object uploaded");
                Ok(object)
            }
            Err(err) => {
                Self::note_failure("upload", &err);
                Err(err)
            }
        }
    }

    async fn download(&self, key: &ObjectKey) -> StorageResult<ObjectContent> {
        let store = self.store.clone();
        let key_owned = key.clone();
        let result = with_retry(&self.retry, "get_object", move || {
            let store = store.clone();
            let key = key_owned.clone();
            async move { store.get_object(&key).await }
        })
        .await;

        result.inspect_err(|err| Self::note_failure("download", err))
    }

    async fn list(
        &self,
        prefix: Option<&KeyPrefix>,
        max_results: Option<usize>,
    ) -> StorageResult<Vec<StoredObject>> {
        let prefix_str = prefix.map(|p| p.as_str().to_string());

        let store = self.store.clone();
        let result = with_retry(&self.retry, "list_objects", move || {
            let store = store.clone();
            let prefix = prefix_str.clone();
            async move { store.list_objects(prefix.as_deref(), max_results).await }
        })
        .await;

        result.inspect_err(|err| Self::note_failure("list", err))
    }

    async fn delete(&self, key: &ObjectKey) -> StorageResult<()> {
        let store = self.store.clone();
        let key_owned = key.clone();
        let result = with_retry(&self.retry, "delete_object", move || {
            let store = store.clone();
            let key = key_owned.clone();
            async move { store.delete_object(&key).await }
        })
        .await;

        match result {
            Ok(()) => {
                tracing::debug!(key = %key, "object deleted");
                Ok(())
            }
            Err(err) => {
                Self::note_failure("delete", &err);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::storage::ObjectStoreAdapter;
    use bytes::Bytes;
    use object_store::memory::InMemory;

    fn in_memory_service() -> FileServiceImpl {
        let store = Arc::new(ObjectStoreAdapter::new(Arc::new(InMemory::new())));
        FileServiceImpl::new(store).with_retry_policy(RetryPolicy::none())
    }

    fn upload_request(key: &str, data: &'static [u8], content_type: Option<&str>) -> UploadRequest {
        UploadRequest {
            key: ObjectKey::new(key).unwrap(),
            data: Bytes::from_static(data),
            content_type: content_type.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_upload_then_download_round_trip() {
        let service = in_memory_service();

        let object = service
            .upload(upload_request("reports/2024/q1.csv", b"a,b,c\n1,2,3", Some("text/csv")))
            .await
            .unwrap();
        assert_eq!(object.size, 11);
        assert_eq!(object.content_type.as_deref(), Some("text/csv"));
        assert!(object.etag.is_some());

        let content = service
            .download(&ObjectKey::new("reports/2024/q1.csv").unwrap())
            .await
            .unwrap();
        assert_eq!(content.data.as_ref(), b"a,b,c\n1,2,3");
        assert_eq!(content.content_type.as_deref(), Some("text/csv"));
    }

    #[tokio::test]
    async fn test_content_type_inferred_from_extension() {
        let service = in_memory_service();

        let object = service
            .upload(upload_request("reports/2024/q1.csv", b"a,b,c", None))
            .await
            .unwrap();
        assert_eq!(object.content_type.as_deref(), Some("text/csv"));
    }

    #[tokio::test]
    async fn test_upload_overwrites_existing_key() {
        let service = in_memory_service();
        let key = ObjectKey::new("file.txt").unwrap();

        service
            .upload(upload_request("file.txt", b"first", None))
            .await
            .unwrap();
        service
            .upload(upload_request("file.txt", b"second", None))
            .await
            .unwrap();

        let content = service.download(&key).await.unwrap();
        assert_eq!(content.data.as_ref(), b"second");
    }

    #[tokio::test]
    async fn test_download_missing_key_is_not_found() {
        let service = in_memory_service();
        let err = service
            .download(&ObjectKey::new("missing.txt").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let service = in_memory_service();
        let key = ObjectKey::new("file.txt").unwrap();

        service
            .upload(upload_request("file.txt", b"bytes", None))
            .await
            .unwrap();

        service.delete(&key).await.unwrap();
        // Second delete of the same key must also succeed.
        service.delete(&key).await.unwrap();

        let err = service.download(&key).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_filters_by_prefix() {
        let service = in_memory_service();
        service
            .upload(upload_request("reports/2024/q1.csv", b"1", None))
            .await
            .unwrap();
        service
            .upload(upload_request("reports/2024/q2.csv", b"2", None))
            .await
            .unwrap();
        service
            .upload(upload_request("invoices/jan.pdf", b"3", None))
            .await
            .unwrap();

        let prefix = KeyPrefix::new("reports/2024/").unwrap();
        let mut keys: Vec<String> = service
            .list(Some(&prefix), None)
            .await
            .unwrap()
            .into_iter()
            .map(|o| o.key.as_str().to_string())
            .collect();
        keys.sort();
        assert_eq!(keys, vec!["reports/2024/q1.csv", "reports/2024/q2.csv"]);

        let empty = service
            .list(Some(&KeyPrefix::new("archive/").unwrap()), None)
            .await
            .unwrap();
        assert!(empty.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_uploads_leave_one_payload() {
        let service = in_memory_service();
        let key = ObjectKey::new("contended.txt").unwrap();

        let (a, b) = tokio::join!(
            service.upload(upload_request("contended.txt", b"payload-a", None)),
            service.upload(upload_request("contended.txt", b"payload-b", None)),
        );
        a.unwrap();
        b.unwrap();

        let content = service.download(&key).await.unwrap();
        assert!(
            content.data.as_ref() == b"payload-a" || content.data.as_ref() == b"payload-b",
            "exactly one of the concurrent payloads must win"
        );
    }
}
