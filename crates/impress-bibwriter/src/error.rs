//! Error types for impress-bibwriter

use thiserror::Error;

use crate::braces::BraceError;
use crate::field::Field;

/// A field value that cannot be written to a `.bib` file.
///
/// Carries the field and the offending value verbatim so callers can show
/// both to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid value for field `{field}`: {reason}")]
pub struct InvalidFieldValue {
    pub field: Field,
    pub value: String,
    #[source]
    pub reason: BraceError,
}

impl InvalidFieldValue {
    pub fn new(field: Field, value: impl Into<String>, reason: BraceError) -> Self {
        Self {
            field,
            value: value.into(),
            reason,
        }
    }
}

/// Configuration validation error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A configured field name could never appear in a `.bib` file
    #[error("Invalid field name in {list}: {name:?}")]
    InvalidFieldName { list: &'static str, name: String },
}

#[cfg(feature = "uniffi")]
#[derive(Error, Debug)]
#[derive(uniffi::Error)]
#[uniffi(flat_error)]
pub enum FieldWriterError {
    #[error("{0}")]
    InvalidFieldValue(String),
}

#[cfg(feature = "uniffi")]
impl From<InvalidFieldValue> for FieldWriterError {
    fn from(err: InvalidFieldValue) -> Self {
        FieldWriterError::InvalidFieldValue(err.to_string())
    }
}
