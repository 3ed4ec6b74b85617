//! Error types for SenML pack operations

use thiserror::Error;

use crate::label::Label;
use crate::value::ValueType;

/// Result type alias for SenML operations
pub type Result<T> = std::result::Result<T, SenMLError>;

/// Errors that can occur while decoding, reading, or re-encoding SenML packs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SenMLError {
    /// Malformed input buffer
    #[error("Decode error: {message}")]
    Decode { message: String },

    /// A record could not be written back out in the active encoding
    #[error("Encode error: {message}")]
    Encode { message: String },

    /// Record index beyond the store's bounds
    #[error("Record index {index} out of range for pack of {len} records")]
    IndexOutOfRange { index: usize, len: usize },

    /// The requested label has no field in the target record
    #[error("Field not present in record: {label}")]
    FieldNotPresent { label: Label },

    /// The on-wire leaf does not match the label's declared value type
    #[error("Type mismatch for {label}: expected {expected}, found {found} leaf")]
    TypeMismatch {
        label: Label,
        expected: ValueType,
        found: &'static str,
    },
}

impl SenMLError {
    /// Create a decode error
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an encode error
    pub fn encode<S: Into<String>>(message: S) -> Self {
        Self::Encode {
            message: message.into(),
        }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create a field not present error
    pub fn field_not_present(label: Label) -> Self {
        Self::FieldNotPresent { label }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(label: Label, expected: ValueType, found: &'static str) -> Self {
        Self::TypeMismatch {
            label,
            expected,
            found,
        }
    }
}
