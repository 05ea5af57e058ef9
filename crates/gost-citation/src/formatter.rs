//! Dispatcher: one [`CitationRule`] per [`ResourceType`].

use crate::clock::{Clock, SystemClock};
use crate::metadata::{CanonicalMetadata, ResourceType};
use crate::rules::{ArticleRule, BookRule, ChapterRule, ElectronicRule};
use tracing::debug;

/// Rendering strategy for one resource type. Implementations never fail: missing fields are
/// omitted or rendered blank.
pub trait CitationRule: Send + Sync {
    fn render(&self, meta: &CanonicalMetadata, clock: &dyn Clock) -> String;
}

impl ResourceType {
    /// The rule that renders records of this type.
    pub fn rule(self) -> &'static dyn CitationRule {
        match self {
            ResourceType::Book => &BookRule,
            ResourceType::JournalArticle => &ArticleRule,
            ResourceType::BookChapter => &ChapterRule,
            ResourceType::Electronic => &ElectronicRule,
        }
    }
}

/// Renders `meta` with the rule selected by its resource type.
pub fn render(meta: &CanonicalMetadata, clock: &dyn Clock) -> String {
    debug!(
        resource_type = %meta.resource_type,
        authors = meta.authors.len(),
        "Rendering citation"
    );
    meta.resource_type.rule().render(meta, clock)
}

/// Formatter bound to a clock.
#[derive(Debug, Clone, Default)]
pub struct CitationFormatter<C: Clock = SystemClock> {
    clock: C,
}

impl<C: Clock> CitationFormatter<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn render(&self, meta: &CanonicalMetadata) -> String {
        render(meta, &self.clock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock::new(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
    }

    #[test]
    fn test_unknown_type_routes_to_electronic_rule() {
        let meta = CanonicalMetadata {
            title: vec!["Data".to_string()],
            resource_type: ResourceType::from_type_name("dataset"),
            ..Default::default()
        };
        assert_eq!(render(&meta, &clock()), "Data [Электронный ресурс].");
    }

    #[test]
    fn test_formatter_uses_bound_clock() {
        let formatter = CitationFormatter::new(clock());
        let meta = CanonicalMetadata {
            title: vec!["Page".to_string()],
            url: Some("https://example.org".to_string()),
            ..Default::default()
        };
        assert_eq!(
            formatter.render(&meta),
            "Page [Электронный ресурс]. URL: https://example.org (дата обращения: 15.01.2024)."
        );
    }
}
