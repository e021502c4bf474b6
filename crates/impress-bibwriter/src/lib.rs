//! BibTeX field value writing
//!
//! This crate produces the exact text written for a field value in a `.bib`
//! file, so that saved libraries round-trip byte for byte.
//!
//! Features:
//! - Escape-aware brace balance checking
//! - `#name#` references written as `@string` macro concatenations
//! - Per-session field preferences, loadable from JSON or TOML
//!
//! ```
//! use impress_bibwriter::{Field, FieldPreferences, FieldWriter};
//!
//! let writer = FieldWriter::new(FieldPreferences::default());
//! assert_eq!(writer.write(&Field::Title, "mytitle").unwrap(), "{mytitle}");
//! assert_eq!(
//!     writer.write(&Field::Month, "#jan# - #feb#").unwrap(),
//!     "jan # { - } # feb"
//! );
//! ```

mod braces;
mod entry;
mod error;
mod field;
mod preferences;
pub mod string_refs;
mod writer;

pub use braces::{check_braces, is_balanced, BraceError};
pub use entry::{BibTeXEntry, BibTeXField};
pub use error::{ConfigError, InvalidFieldValue};
pub use field::Field;
pub use preferences::FieldPreferences;
pub use string_refs::Segment;
pub use writer::{write_field, FieldWriter};

#[cfg(feature = "uniffi")]
pub use error::FieldWriterError;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
