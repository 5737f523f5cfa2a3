use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::models::StoredObject;

/// DTO for object metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectInfoDto {
    pub key: String,
    pub size: u64,
    pub content_type: Option<String>,
    pub etag: Option<String>,
    pub last_modified: DateTime<Utc>,
}

impl From<StoredObject> for ObjectInfoDto {
    fn from(object: StoredObject) -> Self {
        Self {
            key: object.key.as_str().to_string(),
            size: object.size,
            content_type: object.content_type,
            etag: object.etag,
            last_modified: object.last_modified,
        }
    }
}

/// Query parameters for listing files
#[derive(Debug, Clone, Deserialize)]
pub struct ListFilesQueryDto {
    pub prefix: Option<String>,
    pub max_results: Option<usize>,
}

/// DTO for file list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListFilesResponseDto {
    pub files: Vec<ObjectInfoDto>,
    pub count: usize,
}

impl ListFilesResponseDto {
    pub fn new(files: Vec<ObjectInfoDto>) -> Self {
        let count = files.len();
        Self { files, count }
    }
}

/// DTO for the multi-file project upload response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectUploadResponseDto {
    pub project_id: String,
    /// Uploaded key -> status, keyed by the full storage key.
    pub upload_results: BTreeMap<String, String>,
}

/// DTO for error responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponseDto {
    pub error: String,
    pub message: String,
}
