/// Validation errors for domain value objects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    // ObjectKey validation errors
    EmptyObjectKey,
    ObjectKeyTooLong { actual: usize, max: usize },
    InvalidObjectKeyCharacter(char),
    ObjectKeyStartsWithSlash,
    ObjectKeyEndsWithSlash,
    ObjectKeyContainsDoubleSlash,
    ObjectKeyTraversalSegment,

    // KeyPrefix validation errors
    PrefixTooLong { actual: usize, max: usize },
    InvalidPrefixCharacter(char),
    PrefixStartsWithSlash,
    PrefixContainsDoubleSlash,
    PrefixTraversalSegment,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyObjectKey => write!(f, "Object key cannot be empty"),
            ValidationError::ObjectKeyTooLong { actual, max } => {
                write!(f, "Object key too long: {} bytes (max: {})", actual, max)
            }
            ValidationError::InvalidObjectKeyCharacter(c) => {
                write!(f, "Invalid character in object key: {:?}", c)
            }
            ValidationError::ObjectKeyStartsWithSlash => {
                write!(f, "Object key cannot start with '/'")
            }
            ValidationError::ObjectKeyEndsWithSlash => {
                write!(f, "Object key cannot end with '/'")
            }
            ValidationError::ObjectKeyContainsDoubleSlash => {
                write!(f, "Object key cannot contain '//'")
            }
            ValidationError::ObjectKeyTraversalSegment => {
                write!(f, "Object key cannot contain '.' or '..' path segments")
            }
            ValidationError::PrefixTooLong { actual, max } => {
                write!(f, "Prefix too long: {} bytes (max: {})", actual, max)
            }
            ValidationError::InvalidPrefixCharacter(c) => {
                write!(f, "Invalid character in prefix: {:?}", c)
            }
            ValidationError::PrefixStartsWithSlash => {
                write!(f, "Prefix cannot start with '/'")
            }
            ValidationError::PrefixContainsDoubleSlash => {
                write!(f, "Prefix cannot contain '//'")
            }
            ValidationError::PrefixTraversalSegment => {
                write!(f, "Prefix cannot contain '.' or '..' path segments")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
