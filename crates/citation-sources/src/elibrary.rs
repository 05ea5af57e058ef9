//! eLibrary portal adapter. Article pages publish Dublin Core `<meta>` headers; everything is
//! mapped as a journal article.

use crate::dublin_core::MetaTags;
use crate::error::FetchError;
use crate::http::HttpSettings;
use crate::retry::{send_with_retry, RetryPolicy};
use gost_citation::{Author, CanonicalMetadata, ResourceType};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::{Client, StatusCode, Url};
use tracing::{info, instrument, warn};

static PAGES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(\s*[-–—]\s*\d+)?$").unwrap());

#[derive(Debug, Clone)]
pub struct ElibraryClient {
    client: Client,
    retry: RetryPolicy,
}

impl ElibraryClient {
    pub fn new(settings: &HttpSettings) -> Result<Self, FetchError> {
        let client = settings
            .build_client()
            .map_err(|e| FetchError::Request(e.to_string()))?;
        Ok(Self::with_client(client, settings.retry))
    }

    pub fn with_client(client: Client, retry: RetryPolicy) -> Self {
        Self { client, retry }
    }

    /// Fetches the page and maps its Dublin Core headers. Anything but HTTP 200 is an error.
    #[instrument(skip(self))]
    pub async fn fetch_metadata_by_url(&self, url: &str) -> Result<CanonicalMetadata, FetchError> {
        let parsed = Url::parse(url).map_err(|_| FetchError::InvalidUrl(url.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::InvalidUrl(url.to_string()));
        }
        info!(url = %url, "step: portal page fetch");

        let response = send_with_retry(&self.retry, url, || self.client.get(parsed.clone()))
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "Portal request failed");
                FetchError::Request(e.to_string())
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(url = %url, status = status.as_u16(), "Portal returned non-200 status");
            return Err(FetchError::Status(status.as_u16()));
        }

        let html = response
            .text()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;
        let metadata = parse_portal_page(&html, url);
        info!(
            url = %url,
            authors = metadata.authors.len(),
            has_title = !metadata.main_title().is_empty(),
            "step: portal page parsed"
        );
        Ok(metadata)
    }
}

/// Maps a portal page to canonical metadata. Missing headers leave the fields empty.
pub fn parse_portal_page(html: &str, page_url: &str) -> CanonicalMetadata {
    let tags = MetaTags::parse(html);

    let identifier = tags.get("DC.Identifier");
    let url = identifier
        .filter(|id| id.to_ascii_lowercase().contains("doi.org"))
        .unwrap_or(page_url);
    let pages = identifier
        .filter(|id| PAGES_RE.is_match(id))
        .map(|id| id.replace(['–', '—'], "-").replace(' ', ""));

    CanonicalMetadata {
        authors: tags.get("DC.Creator").map(parse_creators).unwrap_or_default(),
        title: tags.get("DC.Title").map(|t| vec![t.to_string()]).unwrap_or_default(),
        container_title: tags
            .get("DC.Source")
            .map(|s| vec![s.to_string()])
            .unwrap_or_default(),
        resource_type: ResourceType::JournalArticle,
        issued_year: tags
            .get("DCTERMS.issued")
            .or_else(|| tags.get("DC.Date"))
            .and_then(parse_year),
        pages,
        url: Some(url.to_string()),
        ..CanonicalMetadata::default()
    }
}

/// `"Иванов, И.И.; Петров, П.П."` → authors. Entries without a comma keep the whole text as
/// family; entries with no name text at all are dropped.
fn parse_creators(raw: &str) -> Vec<Author> {
    raw.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once(',') {
            Some((family, given)) => Author::new(family.trim(), expand_initials(given)),
            None => Author::new(entry, ""),
        })
        .filter(|author| !author.is_blank())
        .collect()
}

/// `"И.И."` → `"И И"` so the formatter re-abbreviates without doubling dots.
fn expand_initials(given: &str) -> String {
    given
        .split(|c: char| c == '.' || c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()) {
        return raw.parse().ok();
    }
    raw.get(..4)
        .filter(|prefix| prefix.chars().all(|c| c.is_ascii_digit()))
        .and_then(|prefix| prefix.parse().ok())
}
