//!
//! stockutil: utilities for working with loosely-typed data.
//!
//! ## Core Concepts
//!
//! * **Values (`value::Value`)**: A closed tagged union of null, boolean, integer, float, text, list and map values. Equality is strict and never coerces between types.
//! * **Mappings (`maputil::Mapping`)**: String-keyed collections of values, the input and output of a merge.
//! * **Merging (`maputil::merge_all`)**: A left fold over any number of mappings that keeps every distinct value for a key instead of letting the last writer win. Disputed keys hold a `value::Conflict` listing the values in encounter order.
//! * **Slices (`sliceutil`)**: Containment, compaction, uniqueness and array-or-scalar traversal with early stop.
//! * **Detection (`detect`)**: Classifying values and numeric-looking text as integers, floats or hexadecimal literals.
//!
//! The library is pure: nothing here performs I/O or keeps state between calls.
//! Diagnostics are emitted through `tracing`; install a subscriber to see them.

pub mod detect;
pub mod maputil;
pub mod sliceutil;
pub mod traits;
pub mod value;

pub use maputil::{Mapping, merge, merge_all};
pub use traits::Merge;
pub use value::{Conflict, Value};

/// Result type used throughout the stockutil library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the stockutil library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured value errors from the value module
    #[error(transparent)]
    Value(value::ValueError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Serialize(_) => "serialize",
            Error::Value(_) => "value",
        }
    }

    /// Check if this error is a malformed document.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }

    /// Check if this error is type-related.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Value(value_err) => value_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error is a float with no JSON representation.
    pub fn is_number_error(&self) -> bool {
        match self {
            Error::Value(value_err) => value_err.is_number_error(),
            _ => false,
        }
    }
}
