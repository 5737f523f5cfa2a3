use async_trait::async_trait;
use bytes::Bytes;
use futures::StreamExt;
use object_store::{
    Attribute, Attributes, ObjectStore as BackendObjectStore, PutOptions, PutPayload,
    path::Path as ObjectPath,
};
use std::sync::Arc;

use crate::{
    domain::{
        errors::{StorageError, StorageResult},
        models::{ObjectContent, StoredObject},
        value_objects::ObjectKey,
    },
    ports::storage::ObjectStore,
};

/// Adapter that implements the ObjectStore port using the Apache
/// `object_store` crate. The same adapter serves S3, MinIO, and the
/// in-memory backend used by tests; the wire protocol stays entirely the
/// backend crate's concern.
pub struct ObjectStoreAdapter {
    inner: Arc<dyn BackendObjectStore>,
}

impl ObjectStoreAdapter {
    pub fn new(store: Arc<dyn BackendObjectStore>) -> Self {
        Self { inner: store }
    }

    fn to_object_path(key: &ObjectKey) -> ObjectPath {
        ObjectPath::from(key.as_str())
    }

    /// Translate backend failures into the service-level taxonomy.
    ///
    /// `Generic` covers the network and throttling failures the backend
    /// cannot classify further, which is exactly the transient class the
    /// retry policy wants.
    fn map_error(key: &str, err: object_store::Error) -> StorageError {
        match err {
            object_store::Error::NotFound { .. } => StorageError::NotFound {
                key: key.to_string(),
            },
            object_store::Error::PermissionDenied { ref source, .. }
            | object_store::Error::Unauthenticated { ref source, .. } => {
                StorageError::AccessDenied {
                    message: source.to_string(),
                }
            }
            object_store::Error::InvalidPath { .. } => StorageError::InvalidInput {
                message: err.to_string(),
            },
            object_store::Error::Generic { ref source, .. } => {
                StorageError::BackendUnavailable {
                    message: err.to_string(),
                    source: Some(source.to_string()),
                }
            }
            other => StorageError::Internal {
                message: other.to_string(),
            },
        }
    }
}

#[async_trait]
impl ObjectStore for ObjectStoreAdapter {
    async fn put_object(
        &self,
        key: &ObjectKey,
        data: Bytes,
        content_type: Option<&str>,
    ) -> StorageResult<StoredObject> {
        let path = Self::to_object_path(key);
        let size = data.len() as u64;
        let payload = PutPayload::from(data);

        let mut attributes = Attributes::new();
        if let Some(ct) = content_type {
            attributes.insert(Attribute::ContentType, ct.to_string().into());
        }

        let options = PutOptions {
            attributes,
            ..Default::default()
        };

        let result = self
            .inner
            .put_opts(&path, payload, options)
            .await
            .map_err(|e| Self::map_error(key.as_str(), e))?;

        Ok(StoredObject {
            key: key.clone(),
            size,
            content_type: content_type.map(str::to_string),
            etag: result.e_tag,
            last_modified: chrono::Utc::now(),
        })
    }

    async fn get_object(&self, key: &ObjectKey) -> StorageResult<ObjectContent> {
        let path = Self::to_object_path(key);

        let result = self
            .inner
            .get(&path)
            .await
            .map_err(|e| Self::map_error(key.as_str(), e))?;

        let content_type = result
            .attributes
            .get(&Attribute::ContentType)
            .map(|v| v.to_string());
        let last_modified = result.meta.last_modified;

        let data = result
            .bytes()
            .await
            .map_err(|e| Self::map_error(key.as_str(), e))?;

        Ok(ObjectContent {
            key: key.clone(),
            data,
            content_type,
            last_modified,
        })
    }

    async fn delete_object(&self, key: &ObjectKey) -> StorageResult<()> {
        let path = Self::to_object_path(key);

        match self.inner.delete(&path).await {
            Ok(()) => Ok(()),
            // Deleting a missing key is a success, mirroring S3 semantics.
            Err(object_store::Error::NotFound { .. }) => Ok(()),
            Err(e) => Err(Self::map_error(key.as_str(), e)),
        }
    }

    async fn list_objects(
        &self,
        prefix: Option<&str>,
        max_results: Option<usize>,
    ) -> StorageResult<Vec<StoredObject>> {
        let prefix = prefix.filter(|p| !p.is_empty());

        // The backend evaluates prefixes per path segment, while the
        // contract is plain string-prefix matching ("reports/20" must
        // match "reports/2024/q1.csv"). List from the last
        // segment-aligned parent and match the raw prefix per key.
        let parent_path = prefix
            .and_then(|p| p.rfind('/').map(|idx| &p[..idx]))
            .filter(|parent| !parent.is_empty())
            .map(ObjectPath::from);

        let mut stream = self.inner.list(parent_path.as_ref());
        let mut objects = Vec::new();
        let max = max_results.unwrap_or(usize::MAX);

        while objects.len() < max {
            let Some(result) = stream.next().await else {
                break;
            };

            let meta = result.map_err(|e| Self::map_error(prefix.unwrap_or(""), e))?;

            let key = ObjectKey::new(meta.location.to_string()).map_err(|e| {
                StorageError::Internal {
                    message: format!("Backend returned unrepresentable key: {}", e),
                }
            })?;

            if let Some(p) = prefix {
                if !key.has_prefix(p) {
                    continue;
                }
            }

            objects.push(StoredObject {
                key,
                size: meta.size,
                // ObjectMeta carries no content type in list responses.
                content_type: None,
                etag: meta.e_tag,
                last_modified: meta.last_modified,
            });
        }

        Ok(objects)
    }
}
