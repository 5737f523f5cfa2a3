use object_store::memory::InMemory;
use std::sync::Arc;

use crate::{
    adapters::outbound::storage::{ObjectStoreAdapter, S3Settings, create_s3_store},
    ports::storage::ObjectStore,
    services::{FileServiceImpl, RetryPolicy},
};

/// Immutable configuration for the application, constructed once at
/// startup and passed into the builder. Nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage_backend: StorageBackend,
    pub retry: RetryPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_backend: StorageBackend::InMemory,
            retry: RetryPolicy::default(),
        }
    }
}

/// Storage backend configuration
#[derive(Debug, Clone)]
pub enum StorageBackend {
    /// Ephemeral store for tests and local development.
    InMemory,
    /// S3 or any S3-compatible endpoint (MinIO, localstack).
    S3(S3Settings),
}

/// Application services container
pub struct AppServices {
    pub file_service: FileServiceImpl,
}

/// Application builder for dependency injection
pub struct AppBuilder {
    config: AppConfig,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_storage_backend(mut self, backend: StorageBackend) -> Self {
        self.config.storage_backend = backend;
        self
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.config.retry = retry;
        self
    }

    /// Build the complete application with services.
    pub fn build(self) -> Result<AppServices, AppError> {
        let store = self.create_storage_adapter()?;
        let file_service =
            FileServiceImpl::new(store).with_retry_policy(self.config.retry.clone());

        Ok(AppServices { file_service })
    }

    fn create_storage_adapter(&self) -> Result<Arc<dyn ObjectStore>, AppError> {
        match &self.config.storage_backend {
            StorageBackend::InMemory => Ok(Arc::new(ObjectStoreAdapter::new(Arc::new(
                InMemory::new(),
            )))),
            StorageBackend::S3(settings) => {
                let store = create_s3_store(settings).map_err(|e| AppError::StorageInit {
                    message: e.to_string(),
                })?;
                Ok(Arc::new(ObjectStoreAdapter::new(store)))
            }
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Application-level errors. All of these are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Storage initialization error: {message}")]
    StorageInit { message: String },
}

/// Create an in-memory application for testing and development.
pub fn create_in_memory_app() -> Result<AppServices, AppError> {
    AppBuilder::new()
        .with_storage_backend(StorageBackend::InMemory)
        .build()
}

/// Create an S3-backed application.
pub fn create_s3_app(settings: S3Settings) -> Result<AppServices, AppError> {
    AppBuilder::new()
        .with_storage_backend(StorageBackend::S3(settings))
        .build()
}
