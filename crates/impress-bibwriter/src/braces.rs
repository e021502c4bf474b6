//! Brace balance checking for BibTeX field values
//!
//! A value may only be written between `{` and `}` if its own braces nest
//! properly. A backslash escapes exactly the character that follows it, so
//! `\{` and `\}` never open or close a group.

/// Why a value's braces do not balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BraceError {
    #[error("unbalanced braces: {depth} group(s) left open")]
    UnclosedGroup { depth: usize },
    #[error("unbalanced braces: closing brace at byte {offset} has no opening brace")]
    UnexpectedClose { offset: usize },
}

/// Check that every unescaped `{` in `text` has a matching unescaped `}`
pub fn check_braces(text: &str) -> Result<(), BraceError> {
    let mut depth = 0usize;
    let mut chars = text.char_indices();

    while let Some((offset, c)) = chars.next() {
        match c {
            '\\' => {
                // Escaped character never counts, whatever it is
                chars.next();
            }
            '{' => depth += 1,
            '}' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(BraceError::UnexpectedClose { offset })?;
            }
            _ => {}
        }
    }

    if depth == 0 {
        Ok(())
    } else {
        Err(BraceError::UnclosedGroup { depth })
    }
}

/// Convenience wrapper around [`check_braces`]
pub fn is_balanced(text: &str) -> bool {
    check_braces(text).is_ok()
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn check_braces_ffi(value: String) -> bool {
    is_balanced(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_balanced() {
        assert!(is_balanced(""));
        assert!(is_balanced("mytitle"));
        assert!(is_balanced("Incorporating evolutionary {Measures}"));
        assert!(is_balanced("{{nested} {groups}}"));
    }

    #[test]
    fn test_unclosed_group() {
        assert_eq!(
            check_braces("{"),
            Err(BraceError::UnclosedGroup { depth: 1 })
        );
        assert_eq!(
            check_braces("{{a}"),
            Err(BraceError::UnclosedGroup { depth: 1 })
        );
    }

    #[test]
    fn test_escaped_closing_brace_does_not_close() {
        assert_eq!(
            check_braces("{\\}"),
            Err(BraceError::UnclosedGroup { depth: 1 })
        );
    }

    #[test]
    fn test_escaped_non_brace_is_harmless() {
        assert!(is_balanced("Incorporating {\\O}evolutionary {Measures}"));
        assert!(is_balanced("{\\\"o}"));
    }

    #[test]
    fn test_escaped_braces_are_ignored() {
        assert!(is_balanced("\\{"));
        assert!(is_balanced("\\}"));
        assert!(is_balanced("{\\{}"));
    }

    #[test]
    fn test_stray_closing_brace() {
        assert_eq!(
            check_braces("a}"),
            Err(BraceError::UnexpectedClose { offset: 1 })
        );
        assert_eq!(
            check_braces("{}}{"),
            Err(BraceError::UnexpectedClose { offset: 2 })
        );
    }

    #[test]
    fn test_trailing_backslash() {
        assert!(is_balanced("text\\"));
        assert!(!is_balanced("{text\\"));
    }

    #[test]
    fn test_offsets_are_byte_offsets() {
        assert_eq!(
            check_braces("ü}"),
            Err(BraceError::UnexpectedClose { offset: 2 })
        );
    }
}
