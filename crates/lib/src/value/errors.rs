//! Error types for value conversions.

use thiserror::Error;

use super::Value;

/// Errors raised when converting a [`Value`] to or from another representation.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ValueError {
    /// The value has a different dynamic type than requested
    #[error("Value type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// A float that JSON cannot represent (NaN or infinite)
    #[error("Float {value} has no JSON representation")]
    NotANumber { value: f64 },
}

impl ValueError {
    pub(crate) fn type_mismatch(expected: &str, actual: &Value) -> Self {
        ValueError::TypeMismatch {
            expected: expected.to_string(),
            actual: actual.type_name().to_string(),
        }
    }

    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(self, ValueError::TypeMismatch { .. })
    }

    /// Check if this error is a non-finite float
    pub fn is_number_error(&self) -> bool {
        matches!(self, ValueError::NotANumber { .. })
    }
}

impl From<ValueError> for crate::Error {
    fn from(err: ValueError) -> Self {
        crate::Error::Value(err)
    }
}
