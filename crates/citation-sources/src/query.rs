//! Classifies inbound text as a DOI, a portal URL, or neither.

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Url;

static DOI_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^10\.\d{4,9}/[^\s?#]+$").unwrap());

/// Prefixes stripped before DOI validation (matched case-insensitively).
const DOI_PREFIXES: &[&str] = &[
    "https://doi.org/",
    "http://doi.org/",
    "https://dx.doi.org/",
    "http://dx.doi.org/",
    "doi.org/",
    "doi:",
];

/// Where a message should be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceQuery {
    /// Normalized DOI (`10.xxxx/...`), looked up in Crossref.
    Doi(String),
    /// Any other http(s) URL, scraped as a portal page.
    PortalUrl(String),
    Unrecognized(String),
}

impl SourceQuery {
    pub fn classify(text: &str) -> Self {
        let text = text.trim();
        if let Some(doi) = normalize_doi(text) {
            return SourceQuery::Doi(doi);
        }
        match Url::parse(text) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {
                SourceQuery::PortalUrl(text.to_string())
            }
            _ => SourceQuery::Unrecognized(text.to_string()),
        }
    }
}

/// Extracts a bare DOI from `10.x/y`, `doi:10.x/y` or a doi.org link; `None` if it is not a DOI.
pub fn normalize_doi(input: &str) -> Option<String> {
    let mut doi = input.trim();
    for prefix in DOI_PREFIXES {
        let matches = doi
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix));
        if matches {
            doi = doi[prefix.len()..].trim_start();
            break;
        }
    }
    let doi = doi.trim_end_matches(['.', ',', ';', ')', ']', '>', '"', '\'']);
    if DOI_RE.is_match(doi) {
        Some(doi.to_string())
    } else {
        None
    }
}
