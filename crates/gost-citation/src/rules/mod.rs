//! Per-type citation rules and the clause helpers they share.
//!
//! Every rule assembles a list of clauses and joins them with single spaces. Optional clauses are
//! simply not pushed, so an absent field never leaves stray punctuation behind.

mod article;
mod book;
mod chapter;
mod electronic;

pub use article::ArticleRule;
pub use book::BookRule;
pub use chapter::ChapterRule;
pub use electronic::ElectronicRule;

use crate::authors::format_authors;
use crate::clock::{access_date, Clock};
use crate::metadata::CanonicalMetadata;

const EN_DASH: char = '\u{2013}';

/// Replaces every ASCII hyphen with an en dash (`123-145` → `123–145`).
pub fn en_dash_pages(pages: &str) -> String {
    pages.replace('-', &EN_DASH.to_string())
}

/// Trimmed value of an optional field; empty strings count as absent.
fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// `"{authors}."`, or nothing when the record has no authors. A list ending in an initial keeps its single period.
fn authors_clause(meta: &CanonicalMetadata) -> Option<String> {
    let authors = format_authors(&meta.authors);
    if authors.is_empty() {
        None
    } else if authors.ends_with('.') {
        Some(authors)
    } else {
        Some(format!("{}.", authors))
    }
}

/// `"{place} : {publisher}, {year}."`; always emitted, blanks for missing parts.
fn imprint_clause(meta: &CanonicalMetadata) -> String {
    format!(
        "{} : {}, {}.",
        present(&meta.publisher_location).unwrap_or(""),
        present(&meta.publisher).unwrap_or(""),
        meta.year_text()
    )
}

/// `"– С. {pages}."` with typographic dashes, when pages are known.
fn page_range_clause(meta: &CanonicalMetadata) -> Option<String> {
    present(&meta.pages).map(|pages| format!("– С. {}.", en_dash_pages(pages)))
}

/// `" (дата обращения: DD.MM.YYYY)."` appended after a URL.
fn accessed_suffix(clock: &dyn Clock) -> String {
    format!(" (дата обращения: {}).", access_date(clock))
}
