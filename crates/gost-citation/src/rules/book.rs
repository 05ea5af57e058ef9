use super::{authors_clause, imprint_clause, present};
use crate::clock::Clock;
use crate::formatter::CitationRule;
use crate::metadata::CanonicalMetadata;

/// Book: `Authors. Title : Subtitle. Place : Publisher, Year. N с. ISBN X.`
///
/// Page counts are printed as given (no dash conversion).
#[derive(Debug, Clone, Copy, Default)]
pub struct BookRule;

impl CitationRule for BookRule {
    fn render(&self, meta: &CanonicalMetadata, _clock: &dyn Clock) -> String {
        let mut parts = Vec::with_capacity(5);
        parts.extend(authors_clause(meta));

        let title = meta.main_title();
        match meta.main_subtitle() {
            Some(subtitle) => parts.push(format!("{} : {}.", title, subtitle)),
            None => parts.push(format!("{}.", title)),
        }

        parts.push(imprint_clause(meta));

        if let Some(pages) = present(&meta.pages) {
            parts.push(format!("{} с.", pages));
        }
        if let Some(isbn) = present(&meta.isbn) {
            parts.push(format!("ISBN {}.", isbn));
        }

        parts.join(" ")
    }
}
