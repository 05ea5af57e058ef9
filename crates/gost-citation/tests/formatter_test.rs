//! Integration tests for [`gost_citation::render`].
//!
//! Covers: author-list truncation, omission of an empty author clause, determinism under a fixed clock,
//! en-dash page ranges, the book and article reference examples, fallback of unknown types, and
//! deserializing a canonical record from JSON.

use chrono::NaiveDate;
use gost_citation::{
    format_authors, render, Author, CanonicalMetadata, CitationFormatter, FixedClock, ResourceType,
};

fn fixed_clock() -> FixedClock {
    FixedClock::new(NaiveDate::from_ymd_opt(2024, 10, 5).unwrap())
}

fn authors(n: usize) -> Vec<Author> {
    (0..n)
        .map(|i| Author::new(format!("Family{}", i), format!("given{} middle{}", i, i)))
        .collect()
}

/// **Test: Up to three authors are all listed, comma-separated, with no et-al suffix.**
#[test]
fn test_short_author_lists_are_listed_in_full() {
    for n in 1..=3 {
        let rendered = format_authors(&authors(n));
        assert_eq!(rendered.split(", ").count(), n);
        assert!(!rendered.contains("[и др.]"));
    }
}

/// **Test: More than three authors list exactly three names; the third carries the suffix.**
#[test]
fn test_long_author_lists_are_truncated() {
    for n in 4..=7 {
        let rendered = format_authors(&authors(n));
        let names: Vec<&str> = rendered.split(", ").collect();
        assert_eq!(names.len(), 3);
        assert!(names[2].ends_with(" [и др.]"));
        assert!(!names[0].contains("[и др.]"));
    }
}

/// **Test: Empty author list leaves no stray period or leading space, for every rule.**
#[test]
fn test_empty_authors_clause_is_omitted() {
    for kind in [
        ResourceType::Book,
        ResourceType::JournalArticle,
        ResourceType::BookChapter,
        ResourceType::Electronic,
    ] {
        let meta = CanonicalMetadata {
            title: vec!["Alpha".to_string()],
            resource_type: kind,
            ..Default::default()
        };
        let rendered = render(&meta, &fixed_clock());
        assert!(rendered.starts_with("Alpha"), "{kind}: {rendered}");
    }
}

/// **Test: Same record and same clock yield byte-identical output.**
#[test]
fn test_rendering_is_deterministic_with_fixed_clock() {
    let meta = CanonicalMetadata {
        authors: authors(5),
        title: vec!["Chapter".to_string()],
        container_title: vec!["Book".to_string()],
        editors: authors(1),
        resource_type: ResourceType::BookChapter,
        url: Some("https://doi.org/10.1/c".to_string()),
        ..Default::default()
    };
    let formatter = CitationFormatter::new(fixed_clock());
    assert_eq!(formatter.render(&meta), formatter.render(&meta.clone()));
    assert!(formatter.render(&meta).contains("(дата обращения: 05.10.2024)."));
}

/// **Test: Article page ranges use an en dash.**
#[test]
fn test_article_pages_use_en_dash() {
    let meta = CanonicalMetadata {
        title: vec!["T".to_string()],
        container_title: vec!["J".to_string()],
        resource_type: ResourceType::JournalArticle,
        pages: Some("123-145".to_string()),
        ..Default::default()
    };
    let rendered = render(&meta, &fixed_clock());
    assert!(rendered.contains("С. 123\u{2013}145."));
    assert!(!rendered.contains("123-145"));
}

/// **Test: Book reference example.**
#[test]
fn test_book_example() {
    let meta = CanonicalMetadata {
        authors: vec![Author::new("Ivanov", "Ivan Ivanovich")],
        title: vec!["Title".to_string()],
        resource_type: ResourceType::Book,
        publisher_location: Some("Moscow".to_string()),
        publisher: Some("Nauka".to_string()),
        issued_year: Some(2020),
        pages: Some("200".to_string()),
        ..Default::default()
    };
    assert_eq!(
        render(&meta, &fixed_clock()),
        "Ivanov I.I. Title. Moscow : Nauka, 2020. 200 с."
    );
}

/// **Test: Article without volume/issue, no authors, DOI url.**
#[test]
fn test_article_example_without_volume_or_issue() {
    let meta = CanonicalMetadata {
        title: vec!["A study".to_string()],
        container_title: vec!["Journal X".to_string()],
        resource_type: ResourceType::JournalArticle,
        issued_year: Some(2021),
        url: Some("https://doi.org/10.1/x".to_string()),
        ..Default::default()
    };
    assert_eq!(
        render(&meta, &fixed_clock()),
        "A study // Journal X. – 2021. – DOI: https://doi.org/10.1/x"
    );
}

/// **Test: Unknown type "dataset" renders with the electronic-resource rule.**
#[test]
fn test_unknown_type_falls_back_to_electronic() {
    let meta = CanonicalMetadata {
        authors: vec![Author::new("Lee", "Ann")],
        title: vec!["Measurements".to_string()],
        resource_type: ResourceType::from_type_name("dataset"),
        url: Some("https://doi.org/10.5/d".to_string()),
        ..Default::default()
    };
    assert_eq!(
        render(&meta, &fixed_clock()),
        "Lee A. Measurements [Электронный ресурс]. URL: https://doi.org/10.5/d (дата обращения: 05.10.2024)."
    );
}

/// **Test: Empty-string optional fields behave like missing ones.**
#[test]
fn test_empty_strings_are_treated_as_absent() {
    let meta = CanonicalMetadata {
        title: vec!["T".to_string()],
        container_title: vec!["J".to_string()],
        resource_type: ResourceType::JournalArticle,
        issued_year: Some(2000),
        volume: Some(String::new()),
        issue: Some(String::new()),
        pages: Some(String::new()),
        url: Some(String::new()),
        ..Default::default()
    };
    assert_eq!(render(&meta, &fixed_clock()), "T // J. – 2000.");
}

/// **Test: A canonical record deserializes from kebab-case JSON, including unknown types.**
#[test]
fn test_canonical_record_from_json() {
    let json = r#"{
        "authors": [{"family": "Ivanov", "given": "Ivan"}],
        "title": ["Title"],
        "container-title": ["Journal"],
        "type": "posted-content",
        "issued-year": 2022,
        "url": "https://example.org"
    }"#;
    let meta: CanonicalMetadata = serde_json::from_str(json).unwrap();
    assert_eq!(meta.resource_type, ResourceType::Electronic);
    assert_eq!(meta.container(), "Journal");
    assert_eq!(meta.issued_year, Some(2022));
}
