use bytes::Bytes;
use chrono::{DateTime, Utc};

use crate::domain::value_objects::ObjectKey;

/// Metadata describing an object at rest in the bucket.
///
/// The object store is the sole owner of the bytes; the service never
/// keeps an independent copy beyond the request lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub key: ObjectKey,
    pub size: u64,
    pub content_type: Option<String>,
    pub etag: Option<String>,
    pub last_modified: DateTime<Utc>,
}

/// An object's content together with the metadata needed to serve it.
#[derive(Debug, Clone)]
pub struct ObjectContent {
    pub key: ObjectKey,
    pub data: Bytes,
    pub content_type: Option<String>,
    pub last_modified: DateTime<Utc>,
}

/// Request to upload (or overwrite) an object.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub key: ObjectKey,
    pub data: Bytes,
    pub content_type: Option<String>,
}
