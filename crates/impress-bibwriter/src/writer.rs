//! BibTeX field writing
//!
//! Turns an in-memory field value into the text that goes on the right of
//! `=` in a `.bib` file. Values are never trimmed or re-wrapped here; save
//! actions that normalize whitespace run before the writer.

use tracing::{debug, trace, warn};

use crate::braces::check_braces;
use crate::entry::BibTeXEntry;
use crate::error::InvalidFieldValue;
use crate::field::Field;
use crate::preferences::FieldPreferences;
use crate::string_refs::{self, Segment};

/// Writes field values for one save session
#[derive(Debug, Clone, Default)]
pub struct FieldWriter {
    preferences: FieldPreferences,
}

impl FieldWriter {
    pub fn new(preferences: FieldPreferences) -> Self {
        Self { preferences }
    }

    pub fn preferences(&self) -> &FieldPreferences {
        &self.preferences
    }

    /// Encode `content` for `field`
    pub fn write(&self, field: &Field, content: &str) -> Result<String, InvalidFieldValue> {
        write_field(field, content, &self.preferences)
    }

    /// The segments `content` is written as, after the same brace check as [`write`](Self::write)
    pub fn segments(&self, field: &Field, content: &str) -> Result<Vec<Segment>, InvalidFieldValue> {
        split_value(field, content, &self.preferences)
    }

    /// Encode every field of `entry` independently.
    ///
    /// Results come back in field order; an invalid field does not stop the
    /// ones after it from being written.
    pub fn write_entry_fields(
        &self,
        entry: &BibTeXEntry,
    ) -> Vec<(Field, Result<String, InvalidFieldValue>)> {
        entry
            .fields
            .iter()
            .map(|f| {
                let written = self.write(&f.field, &f.value);
                if let Err(e) = &written {
                    warn!(cite_key = %entry.cite_key, field = %f.field, "{}", e);
                }
                (f.field.clone(), written)
            })
            .collect()
    }
}

/// Encode `content` for `field` under `preferences`.
///
/// Non-resolvable fields come back as `{content}` with `content` untouched.
/// Resolvable fields have their `#name#` references written as bare macro
/// names joined with `#`.
pub fn write_field(
    field: &Field,
    content: &str,
    preferences: &FieldPreferences,
) -> Result<String, InvalidFieldValue> {
    let segments = split_value(field, content, preferences)?;
    Ok(string_refs::render(&segments))
}

/// Brace-check `content`, then split it the way `field` is written.
///
/// Non-resolvable fields give one literal holding the whole value (none for
/// the empty value), which renders back to exactly `{content}`.
fn split_value(
    field: &Field,
    content: &str,
    preferences: &FieldPreferences,
) -> Result<Vec<Segment>, InvalidFieldValue> {
    check_braces(content).map_err(|reason| {
        debug!(%field, value = content, %reason, "rejected field value");
        InvalidFieldValue::new(field.clone(), content, reason)
    })?;

    if !preferences.is_resolvable(field) {
        return Ok(if content.is_empty() {
            Vec::new()
        } else {
            vec![Segment::Literal(content.to_string())]
        });
    }

    let segments = string_refs::resolve(content);
    trace!(%field, segments = segments.len(), "resolved string references");
    Ok(segments)
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn write_field_ffi(
    field: String,
    value: String,
    resolvable_fields: Vec<String>,
) -> Result<String, crate::error::FieldWriterError> {
    let mut preferences = FieldPreferences::empty();
    for name in resolvable_fields {
        preferences = preferences.with_resolvable_field(name);
    }
    Ok(write_field(&Field::from_str(&field), &value, &preferences)?)
}
