//! Errors raised by the model layer.
//!
//! Shapes are plain values, so very little can fail: inserting a duplicate
//! key through an entry helper, strictly parsing an enumeration, or reading
//! a document for an operation the catalogue does not know.

use derive_builder::UninitializedFieldError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// An entry helper was handed a key the map already holds.
    #[error("Duplicated keys ({key}) are provided for {field}")]
    DuplicateKey { field: &'static str, key: String },

    /// Strict parsing of an enumeration was given an empty string.
    #[error("{0} value cannot be null or empty")]
    EmptyEnumValue(&'static str),

    /// Strict parsing of an enumeration was given a value outside its set.
    #[error("Cannot create {shape} from value '{value}'")]
    UnknownEnumValue { shape: &'static str, value: String },

    /// A builder was asked to build without a member it needs.
    #[error("Field {0} was not initialized")]
    UninitializedField(&'static str),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Unknown enumeration: {0}")]
    UnknownEnum(String),

    /// A JSON document could not be read as the requested shape.
    #[error("Malformed {shape} document: {reason}")]
    Document { shape: &'static str, reason: String },
}

impl From<UninitializedFieldError> for ModelError {
    fn from(value: UninitializedFieldError) -> Self {
        ModelError::UninitializedField(value.field_name())
    }
}
