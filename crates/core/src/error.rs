//! Error types for Tessera tuple operations.

use alloc::string::String;

/// Result type alias for Tessera operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for descriptor and tuple operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Required input was missing or inconsistent.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
    /// Positional descriptor lookup outside the field range.
    #[error("No field at index {index} (descriptor has {num_fields} fields)")]
    FieldNotFound { index: usize, num_fields: usize },
    /// No descriptor entry carries the requested name.
    #[error("No field named {name:?}")]
    FieldNameNotFound { name: String },
    /// Tuple slot access outside the slot array.
    #[error("Index {index} out of range for tuple with {len} fields")]
    IndexOutOfRange { index: usize, len: usize },
}

impl Error {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates a positional field lookup error.
    pub fn field_not_found(index: usize, num_fields: usize) -> Self {
        Error::FieldNotFound { index, num_fields }
    }

    /// Creates a field name lookup error.
    pub fn field_name_not_found(name: impl Into<String>) -> Self {
        Error::FieldNameNotFound { name: name.into() }
    }

    /// Creates a slot index error.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }

    /// Returns true for both positional and name-based lookup failures.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::FieldNotFound { .. } | Error::FieldNameNotFound { .. }
        )
    }
}
