use crate::domain::errors::ValidationError;

/// Service-level error taxonomy for storage operations.
///
/// Backend-specific failures are translated into these kinds at the
/// storage adapter boundary; everything above the adapter reasons only in
/// terms of this enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Malformed key, prefix, or request payload. Never retried.
    InvalidInput { message: String },

    /// Requested key absent from the bucket.
    NotFound { key: String },

    /// Credential or permission failure. Never retried; usually indicates
    /// misconfiguration rather than a caller mistake.
    AccessDenied { message: String },

    /// Transient network or throttling failure. Retried with bounded
    /// backoff before being surfaced.
    BackendUnavailable {
        message: String,
        source: Option<String>,
    },

    /// Anything else the backend reported that does not fit the taxonomy.
    Internal { message: String },
}

impl StorageError {
    /// Whether the retry policy should attempt this operation again.
    pub fn is_transient(&self) -> bool {
        matches!(self, StorageError::BackendUnavailable { .. })
    }

    /// Short machine-readable kind name, used in structured error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            StorageError::InvalidInput { .. } => "invalid_input",
            StorageError::NotFound { .. } => "not_found",
            StorageError::AccessDenied { .. } => "access_denied",
            StorageError::BackendUnavailable { .. } => "backend_unavailable",
            StorageError::Internal { .. } => "internal",
        }
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
            StorageError::NotFound { key } => {
                write!(f, "Object not found: {}", key)
            }
            StorageError::AccessDenied { message } => {
                write!(f, "Access denied: {}", message)
            }
            StorageError::BackendUnavailable { message, .. } => {
                write!(f, "Storage backend unavailable: {}", message)
            }
            StorageError::Internal { message } => {
                write!(f, "Internal storage error: {}", message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<ValidationError> for StorageError {
    fn from(err: ValidationError) -> Self {
        StorageError::InvalidInput {
            message: err.to_string(),
        }
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
