use super::{accessed_suffix, authors_clause, imprint_clause, page_range_clause, present};
use crate::clock::Clock;
use crate::formatter::CitationRule;
use crate::metadata::CanonicalMetadata;

/// Book chapter: `Authors. Chapter // Book / под ред. I.O. Editor. Place : Publisher, Year. – С. P. – DOI: URL (дата обращения: D).`
#[derive(Debug, Clone, Copy, Default)]
pub struct ChapterRule;

impl ChapterRule {
    /// `" / под ред. I.O. Family"` for the first editor, or empty.
    fn editor_clause(meta: &CanonicalMetadata) -> String {
        meta.editors
            .first()
            .map(|editor| editor.initials_first())
            .filter(|name| !name.is_empty())
            .map(|name| format!(" / под ред. {}", name))
            .unwrap_or_default()
    }
}

impl CitationRule for ChapterRule {
    fn render(&self, meta: &CanonicalMetadata, clock: &dyn Clock) -> String {
        let mut parts = Vec::with_capacity(5);
        parts.extend(authors_clause(meta));
        parts.push(format!(
            "{} // {}{}.",
            meta.main_title(),
            meta.container(),
            Self::editor_clause(meta)
        ));
        parts.push(imprint_clause(meta));
        parts.extend(page_range_clause(meta));
        if let Some(url) = present(&meta.url) {
            parts.push(format!("– DOI: {}{}", url, accessed_suffix(clock)));
        }
        parts.join(" ")
    }
}
