//! Author-list rendering: `Family I.O., Family I.O., Family I.O. [и др.]`.

use crate::metadata::Author;
use std::iter;

/// At most this many names are listed; the rest collapse into [`ET_AL_SUFFIX`].
pub const MAX_LISTED_AUTHORS: usize = 3;

/// Appended to the last listed name when the list was truncated.
pub const ET_AL_SUFFIX: &str = " [и др.]";

/// First letter of each whitespace-separated token, upper-cased, each followed by a period.
///
/// `"ivan petrovich"` → `"I.P."`.
pub fn initials(given: &str) -> String {
    given
        .split_whitespace()
        .filter_map(|token| token.chars().next())
        .flat_map(|c| c.to_uppercase().chain(iter::once('.')))
        .collect()
}

impl Author {
    /// `Family I.O.` (list form).
    pub fn abbreviated(&self) -> String {
        join_nonempty(self.family.trim(), &initials(&self.given))
    }

    /// `I.O. Family` (editor form).
    pub fn initials_first(&self) -> String {
        join_nonempty(&initials(&self.given), self.family.trim())
    }
}

fn join_nonempty(left: &str, right: &str) -> String {
    match (left.is_empty(), right.is_empty()) {
        (false, false) => format!("{} {}", left, right),
        (false, true) => left.to_string(),
        (true, _) => right.to_string(),
    }
}

/// Renders the author list; blank entries are skipped and empty input yields an empty string.
pub fn format_authors(authors: &[Author]) -> String {
    let named: Vec<&Author> = authors.iter().filter(|a| !a.is_blank()).collect();
    let mut rendered: Vec<String> = named
        .iter()
        .take(MAX_LISTED_AUTHORS)
        .map(|a| a.abbreviated())
        .collect();

    if named.len() > MAX_LISTED_AUTHORS {
        if let Some(last) = rendered.last_mut() {
            last.push_str(ET_AL_SUFFIX);
        }
    }

    rendered.join(", ")
}
