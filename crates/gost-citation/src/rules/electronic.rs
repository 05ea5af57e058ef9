use super::{accessed_suffix, authors_clause, present};
use crate::clock::Clock;
use crate::formatter::CitationRule;
use crate::metadata::CanonicalMetadata;

/// Electronic resource (fallback): `Authors. Title [Электронный ресурс]. URL: U (дата обращения: D).`
#[derive(Debug, Clone, Copy, Default)]
pub struct ElectronicRule;

impl CitationRule for ElectronicRule {
    fn render(&self, meta: &CanonicalMetadata, clock: &dyn Clock) -> String {
        let mut parts = Vec::with_capacity(3);
        parts.extend(authors_clause(meta));
        parts.push(format!("{} [Электронный ресурс].", meta.main_title()));
        if let Some(url) = present(&meta.url) {
            parts.push(format!("URL: {}{}", url, accessed_suffix(clock)));
        }
        parts.join(" ")
    }
}
