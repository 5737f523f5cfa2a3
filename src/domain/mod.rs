pub mod errors;
pub mod models;
pub mod value_objects;

pub use errors::{StorageError, StorageResult, ValidationError};
pub use models::{ObjectContent, StoredObject, UploadRequest};
pub use value_objects::{KeyPrefix, ObjectKey};
