//! BibTeX field identifiers

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named slot on a BibTeX entry.
///
/// Well-known fields get their own variant; anything else is carried as
/// `Unknown` with its lowercased name, so two fields are equal exactly when
/// their names are equal ignoring case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Field {
    Abstract,
    Address,
    Author,
    BookTitle,
    Comment,
    Doi,
    Edition,
    Editor,
    File,
    Institution,
    Isbn,
    Issn,
    Journal,
    Keywords,
    Month,
    Note,
    Number,
    Organization,
    Pages,
    Pdf,
    Publisher,
    Review,
    School,
    Series,
    Title,
    Url,
    Volume,
    Year,
    Unknown(String),
}

impl Field {
    /// Parse a field from its name (case-insensitive)
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "abstract" => Self::Abstract,
            "address" => Self::Address,
            "author" => Self::Author,
            "booktitle" => Self::BookTitle,
            "comment" => Self::Comment,
            "doi" => Self::Doi,
            "edition" => Self::Edition,
            "editor" => Self::Editor,
            "file" => Self::File,
            "institution" => Self::Institution,
            "isbn" => Self::Isbn,
            "issn" => Self::Issn,
            "journal" => Self::Journal,
            "keywords" => Self::Keywords,
            "month" => Self::Month,
            "note" => Self::Note,
            "number" => Self::Number,
            "organization" => Self::Organization,
            "pages" => Self::Pages,
            "pdf" => Self::Pdf,
            "publisher" => Self::Publisher,
            "review" => Self::Review,
            "school" => Self::School,
            "series" => Self::Series,
            "title" => Self::Title,
            "url" => Self::Url,
            "volume" => Self::Volume,
            "year" => Self::Year,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Canonical (lowercase) field name
    pub fn as_str(&self) -> &str {
        match self {
            Self::Abstract => "abstract",
            Self::Address => "address",
            Self::Author => "author",
            Self::BookTitle => "booktitle",
            Self::Comment => "comment",
            Self::Doi => "doi",
            Self::Edition => "edition",
            Self::Editor => "editor",
            Self::File => "file",
            Self::Institution => "institution",
            Self::Isbn => "isbn",
            Self::Issn => "issn",
            Self::Journal => "journal",
            Self::Keywords => "keywords",
            Self::Month => "month",
            Self::Note => "note",
            Self::Number => "number",
            Self::Organization => "organization",
            Self::Pages => "pages",
            Self::Pdf => "pdf",
            Self::Publisher => "publisher",
            Self::Review => "review",
            Self::School => "school",
            Self::Series => "series",
            Self::Title => "title",
            Self::Url => "url",
            Self::Volume => "volume",
            Self::Year => "year",
            Self::Unknown(name) => name,
        }
    }

    /// Whether this is one of the well-known fields
    pub fn is_standard(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// Whether the name can appear on the left of `=` in a `.bib` file
    pub fn is_legal_name(&self) -> bool {
        let name = self.as_str();
        !name.is_empty()
            && !name
                .chars()
                .any(|c| c.is_whitespace() || "=,#{}\"%".contains(c))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Field {
    fn from(name: &str) -> Self {
        Self::from_str(name)
    }
}

impl From<String> for Field {
    fn from(name: String) -> Self {
        Self::from_str(&name)
    }
}

impl From<Field> for String {
    fn from(field: Field) -> Self {
        field.as_str().to_string()
    }
}
