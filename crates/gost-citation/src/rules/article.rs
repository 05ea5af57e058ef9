use super::{authors_clause, page_range_clause, present};
use crate::clock::Clock;
use crate::formatter::CitationRule;
use crate::metadata::CanonicalMetadata;

/// Journal article: `Authors. Title // Journal. – Year. – Т. V, № I. – С. P. – DOI: URL`
#[derive(Debug, Clone, Copy, Default)]
pub struct ArticleRule;

impl ArticleRule {
    fn volume_issue_clause(meta: &CanonicalMetadata) -> Option<String> {
        match (present(&meta.volume), present(&meta.issue)) {
            (Some(volume), Some(issue)) => Some(format!("– Т. {}, № {}.", volume, issue)),
            (Some(volume), None) => Some(format!("– Т. {}.", volume)),
            (None, Some(issue)) => Some(format!("– № {}.", issue)),
            (None, None) => None,
        }
    }
}

impl CitationRule for ArticleRule {
    fn render(&self, meta: &CanonicalMetadata, _clock: &dyn Clock) -> String {
        let mut parts = Vec::with_capacity(6);
        parts.extend(authors_clause(meta));
        parts.push(format!("{} // {}.", meta.main_title(), meta.container()));
        parts.push(format!("– {}.", meta.year_text()));
        parts.extend(Self::volume_issue_clause(meta));
        parts.extend(page_range_clause(meta));
        // URL stays last and unpunctuated.
        if let Some(url) = present(&meta.url) {
            parts.push(format!("– DOI: {}", url));
        }
        parts.join(" ")
    }
}
