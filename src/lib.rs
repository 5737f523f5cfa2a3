pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - core entities and value objects
pub use domain::{
    KeyPrefix,
    ObjectContent,
    // Value objects
    ObjectKey,
    // Errors
    StorageError,
    StorageResult,
    // Models
    StoredObject,
    UploadRequest,
    ValidationError,
};

// Port types - interfaces for external systems
pub use ports::{FileService, ObjectStore};

// Service implementations
pub use services::{FileServiceImpl, RetryPolicy};

// Application factory and configuration
pub use app::{
    AppBuilder, AppConfig, AppError, AppServices, StorageBackend, create_in_memory_app,
    create_s3_app,
};

// Adapter types - infrastructure implementations
pub use adapters::outbound::storage::{ObjectStoreAdapter, S3Settings};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        AppBuilder, AppServices, FileService, FileServiceImpl, KeyPrefix, ObjectKey, ObjectStore,
        ObjectStoreAdapter, RetryPolicy, S3Settings, create_in_memory_app, create_s3_app,
    };
}
