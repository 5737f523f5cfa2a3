use crate::domain::errors::ValidationError;

const MAX_PREFIX_LENGTH: usize = 1024;

/// A validated key prefix for list operations.
///
/// Prefixes share the object-key character rules but may be empty (list
/// everything) and may end with '/' (list a logical directory).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPrefix(String);

impl KeyPrefix {
    /// Create a new KeyPrefix with validation.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if value.len() > MAX_PREFIX_LENGTH {
            return Err(ValidationError::PrefixTooLong {
                actual: value.len(),
                max: MAX_PREFIX_LENGTH,
            });
        }

        if value.contains('\0') {
            return Err(ValidationError::InvalidPrefixCharacter('\0'));
        }

        if value.starts_with('/') {
            return Err(ValidationError::PrefixStartsWithSlash);
        }

        if value.contains("//") {
            return Err(ValidationError::PrefixContainsDoubleSlash);
        }

        if value.split('/').any(|segment| segment == "." || segment == "..") {
            return Err(ValidationError::PrefixTraversalSegment);
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for KeyPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
