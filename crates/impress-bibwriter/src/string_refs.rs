//! `@string` reference resolution
//!
//! Inside the library, a reference to a BibTeX `@string` macro is written
//! between two `#` characters, e.g. `#jan# - #feb#`. On the way out such a
//! value becomes the BibTeX concatenation `jan # { - } # feb`.

use serde::{Deserialize, Serialize};

use crate::braces::is_balanced;

/// One piece of a value, in the order it appeared
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Segment {
    /// Text written verbatim between braces
    Literal(String),
    /// Name of an `@string` macro, written bare
    MacroReference(String),
}

impl Segment {
    fn text(&self) -> &str {
        match self {
            Self::Literal(text) | Self::MacroReference(text) => text,
        }
    }

    /// BibTeX form of this single segment
    pub fn render(&self) -> String {
        match self {
            Self::Literal(text) => format!("{{{}}}", text),
            Self::MacroReference(name) => name.clone(),
        }
    }
}

/// Count `#` characters that are not preceded by an escaping backslash
fn count_delimiters(text: &str) -> usize {
    let mut count = 0;
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '#' => count += 1,
            _ => {}
        }
    }
    count
}

/// Split `text` into literal and macro-reference segments.
///
/// An odd number of unescaped `#` cannot be paired, so the whole value is
/// returned as a single literal. A pair with nothing in between (`##`) is
/// dropped and the text on either side joins into one literal. If a pair
/// cuts through a brace group, leaving any segment unbalanced, the value is
/// also kept as a single literal.
pub fn resolve(text: &str) -> Vec<Segment> {
    if count_delimiters(text) % 2 != 0 {
        return vec![Segment::Literal(text.to_string())];
    }

    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut name = String::new();
    let mut in_name = false;
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let target = if in_name { &mut name } else { &mut literal };
                target.push(c);
                if let Some(escaped) = chars.next() {
                    target.push(escaped);
                }
            }
            '#' if in_name => {
                in_name = false;
                if !name.is_empty() {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::MacroReference(std::mem::take(&mut name)));
                }
            }
            '#' => in_name = true,
            _ if in_name => name.push(c),
            _ => literal.push(c),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    if segments.iter().all(|s| is_balanced(s.text())) {
        segments
    } else {
        vec![Segment::Literal(text.to_string())]
    }
}

/// Join segments into a BibTeX value expression.
///
/// A lone literal renders as the ordinary braced form; no segments at all
/// (the empty value) renders as `{}`.
pub fn render(segments: &[Segment]) -> String {
    if segments.is_empty() {
        return "{}".to_string();
    }

    segments
        .iter()
        .map(Segment::render)
        .collect::<Vec<_>>()
        .join(" # ")
}
