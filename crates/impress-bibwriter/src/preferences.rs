//! Field writer configuration
//!
//! Which fields have their `#name#` references turned into `@string` macros,
//! and which fields upstream cleanup must leave untouched.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::field::Field;

/// Settings for a writing session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldPreferences {
    /// Master switch for `@string` references; when off no field gets them
    pub resolve_strings: bool,
    /// Fields whose `#name#` references are written as `@string` macros
    pub resolvable_fields: BTreeSet<Field>,
    /// Fields exempt from whitespace cleanup before writing.
    ///
    /// The writer itself never alters a value; this list is read by the
    /// save actions that run before it.
    pub non_wrappable_fields: BTreeSet<Field>,
}

impl Default for FieldPreferences {
    fn default() -> Self {
        Self {
            resolve_strings: true,
            resolvable_fields: BTreeSet::from([Field::Month]),
            non_wrappable_fields: BTreeSet::from([
                Field::Abstract,
                Field::Comment,
                Field::Doi,
                Field::File,
                Field::Isbn,
                Field::Issn,
                Field::Pdf,
                Field::Review,
                Field::Url,
            ]),
        }
    }
}

impl FieldPreferences {
    /// Create preferences with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Preferences with no resolvable and no non-wrappable fields
    pub fn empty() -> Self {
        Self {
            resolve_strings: true,
            resolvable_fields: BTreeSet::new(),
            non_wrappable_fields: BTreeSet::new(),
        }
    }

    pub fn with_resolve_strings(mut self, resolve_strings: bool) -> Self {
        self.resolve_strings = resolve_strings;
        self
    }

    pub fn with_resolvable_field(mut self, field: impl Into<Field>) -> Self {
        self.resolvable_fields.insert(field.into());
        self
    }

    pub fn with_non_wrappable_field(mut self, field: impl Into<Field>) -> Self {
        self.non_wrappable_fields.insert(field.into());
        self
    }

    /// Whether `#name#` references in this field become macros
    pub fn is_resolvable(&self, field: &Field) -> bool {
        self.resolve_strings && self.resolvable_fields.contains(field)
    }

    /// Whether upstream cleanup must skip this field
    pub fn is_non_wrappable(&self, field: &Field) -> bool {
        self.non_wrappable_fields.contains(field)
    }

    /// Load preferences from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Serialize preferences to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load preferences from a TOML string
    #[cfg(feature = "toml-config")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialize preferences to TOML
    #[cfg(feature = "toml-config")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Check that every configured field has a usable name
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lists = [
            ("resolvable_fields", &self.resolvable_fields),
            ("non_wrappable_fields", &self.non_wrappable_fields),
        ];
        for (list, fields) in lists {
            if let Some(field) = fields.iter().find(|f| !f.is_legal_name()) {
                return Err(ConfigError::InvalidFieldName {
                    list,
                    name: field.as_str().to_string(),
                });
            }
        }
        Ok(())
    }
}
