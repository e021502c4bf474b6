//! BibTeX entry data structures

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// A single field of an entry, value as held in memory (not yet encoded)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibTeXField {
    pub field: Field,
    pub value: String,
}

/// The fields of one entry about to be written.
///
/// The cite key is only carried for diagnostics; entry layout belongs to
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibTeXEntry {
    pub cite_key: String,
    pub fields: Vec<BibTeXField>,
}

impl BibTeXEntry {
    /// Create a new BibTeX entry
    pub fn new(cite_key: impl Into<String>) -> Self {
        Self {
            cite_key: cite_key.into(),
            fields: Vec::new(),
        }
    }

    /// Add a field to the entry, keeping insertion order
    pub fn add_field(&mut self, field: impl Into<Field>, value: impl Into<String>) {
        self.fields.push(BibTeXField {
            field: field.into(),
            value: value.into(),
        });
    }

    /// Get a field value
    pub fn get_field(&self, field: &Field) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| &f.field == field)
            .map(|f| f.value.as_str())
    }
}
