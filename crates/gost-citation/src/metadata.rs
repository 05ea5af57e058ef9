//! Canonical metadata record: the single input shape of the formatter, whatever the source.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A person credited on a work. `given` holds whitespace-separated given-name tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub family: String,
    pub given: String,
}

impl Author {
    pub fn new(family: impl Into<String>, given: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            given: given.into(),
        }
    }

    /// True when neither name part carries any text.
    pub fn is_blank(&self) -> bool {
        self.family.trim().is_empty() && self.given.trim().is_empty()
    }
}

/// Kind of resource; selects the citation rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResourceType {
    Book,
    JournalArticle,
    BookChapter,
    /// Generic electronic resource; also the fallback for unknown type names.
    #[default]
    Electronic,
}

impl ResourceType {
    /// Maps a registry type name onto a variant. Unknown names become [`ResourceType::Electronic`].
    pub fn from_type_name(name: &str) -> Self {
        match name.trim() {
            "book" => Self::Book,
            "journal-article" => Self::JournalArticle,
            "book-chapter" | "chapter" => Self::BookChapter,
            _ => Self::Electronic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Book => "book",
            Self::JournalArticle => "journal-article",
            Self::BookChapter => "book-chapter",
            Self::Electronic => "other",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ResourceType {
    fn from(name: String) -> Self {
        Self::from_type_name(&name)
    }
}

impl From<&str> for ResourceType {
    fn from(name: &str) -> Self {
        Self::from_type_name(name)
    }
}

impl From<ResourceType> for String {
    fn from(kind: ResourceType) -> Self {
        kind.as_str().to_string()
    }
}

/// Normalized bibliographic record consumed by [`crate::render`].
///
/// List-valued text fields (`title`, `subtitle`, `container_title`) mirror the registry payload; only the
/// first element is used. Optional fields set to an empty string are treated as absent when rendering.
/// `pages` keeps the ASCII hyphen for ranges; typographic dashes are applied at render time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CanonicalMetadata {
    pub authors: Vec<Author>,
    pub title: Vec<String>,
    pub subtitle: Vec<String>,
    pub container_title: Vec<String>,
    pub editors: Vec<Author>,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub issued_year: Option<i32>,
    pub publisher_location: Option<String>,
    pub publisher: Option<String>,
    pub volume: Option<String>,
    pub issue: Option<String>,
    pub pages: Option<String>,
    pub isbn: Option<String>,
    pub url: Option<String>,
}

impl CanonicalMetadata {
    /// Main title, or an empty string.
    pub fn main_title(&self) -> &str {
        first_text(&self.title).unwrap_or("")
    }

    /// First non-empty subtitle.
    pub fn main_subtitle(&self) -> Option<&str> {
        first_text(&self.subtitle)
    }

    /// Journal or book name for articles and chapters, or an empty string.
    pub fn container(&self) -> &str {
        first_text(&self.container_title).unwrap_or("")
    }

    /// Year as text; blank when unknown.
    pub fn year_text(&self) -> String {
        self.issued_year.map(|y| y.to_string()).unwrap_or_default()
    }
}

fn first_text(values: &[String]) -> Option<&str> {
    values
        .first()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
}
