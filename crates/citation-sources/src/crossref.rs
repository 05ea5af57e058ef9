//! Crossref registry adapter: `GET {base}/works/{doi}` mapped onto [`CanonicalMetadata`].

use crate::error::LookupError;
use crate::http::HttpSettings;
use crate::query::normalize_doi;
use crate::retry::{send_with_retry, RetryPolicy};
use gost_citation::{Author, CanonicalMetadata, ResourceType};
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, instrument, warn};

pub const DEFAULT_CROSSREF_URL: &str = "https://api.crossref.org";

#[derive(Debug, Clone)]
pub struct CrossrefClient {
    client: Client,
    base_url: String,
    retry: RetryPolicy,
}

impl CrossrefClient {
    pub fn new(base_url: impl Into<String>, settings: &HttpSettings) -> Result<Self, LookupError> {
        let client = settings
            .build_client()
            .map_err(|e| LookupError::Request(e.to_string()))?;
        Ok(Self::with_client(client, base_url, settings.retry))
    }

    /// Client for the public Crossref API.
    pub fn from_settings(settings: &HttpSettings) -> Result<Self, LookupError> {
        Self::new(DEFAULT_CROSSREF_URL, settings)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>, retry: RetryPolicy) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            retry,
        }
    }

    /// Looks up `doi` (bare or prefixed) and maps the work record.
    #[instrument(skip(self))]
    pub async fn fetch_metadata_by_doi(&self, doi: &str) -> Result<CanonicalMetadata, LookupError> {
        let doi = normalize_doi(doi).ok_or_else(|| LookupError::InvalidDoi(doi.to_string()))?;
        let url = format!("{}/works/{}", self.base_url, doi);
        info!(doi = %doi, url = %url, "step: Crossref lookup");

        let response = send_with_retry(&self.retry, &url, || {
            self.client
                .get(&url)
                .header(reqwest::header::ACCEPT, "application/json")
        })
        .await
        .map_err(|e| {
            warn!(doi = %doi, error = %e, "Crossref request failed");
            LookupError::Request(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(doi = %doi, status = status.as_u16(), "Crossref returned error status");
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Request(e.to_string()))?;
        let metadata = parse_work_response(&body)?;
        info!(
            doi = %doi,
            resource_type = %metadata.resource_type,
            authors = metadata.authors.len(),
            "step: Crossref lookup done"
        );
        Ok(metadata)
    }
}

#[derive(Debug, Deserialize)]
struct WorkEnvelope {
    message: Option<CrossrefWork>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CrossrefWork {
    #[serde(rename = "type")]
    kind: Option<String>,
    title: Option<Vec<String>>,
    subtitle: Option<Vec<String>>,
    #[serde(rename = "container-title")]
    container_title: Option<Vec<String>>,
    author: Option<Vec<CrossrefPerson>>,
    editor: Option<Vec<CrossrefPerson>>,
    issued: Option<CrossrefDate>,
    #[serde(rename = "published-print")]
    published_print: Option<CrossrefDate>,
    #[serde(rename = "published-online")]
    published_online: Option<CrossrefDate>,
    #[serde(rename = "publisher-location")]
    publisher_location: Option<String>,
    publisher: Option<String>,
    volume: Option<String>,
    issue: Option<String>,
    page: Option<String>,
    #[serde(rename = "ISBN")]
    isbn: Option<Vec<String>>,
    #[serde(rename = "URL")]
    url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CrossrefPerson {
    given: Option<String>,
    family: Option<String>,
    /// Organisations carry `name` instead of `family`.
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CrossrefDate {
    #[serde(rename = "date-parts")]
    date_parts: Option<Vec<Vec<Option<i32>>>>,
}

impl CrossrefDate {
    fn year(&self) -> Option<i32> {
        self.date_parts
            .as_ref()?
            .first()?
            .first()
            .copied()
            .flatten()
    }
}

impl CrossrefPerson {
    fn into_author(self) -> Option<Author> {
        let family = self
            .family
            .or(self.name)
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())?;
        Some(Author::new(family, self.given.unwrap_or_default().trim()))
    }
}

fn people(list: Option<Vec<CrossrefPerson>>) -> Vec<Author> {
    list.unwrap_or_default()
        .into_iter()
        .filter_map(CrossrefPerson::into_author)
        .collect()
}

impl CrossrefWork {
    fn into_canonical(self) -> CanonicalMetadata {
        let issued_year = [&self.issued, &self.published_print, &self.published_online]
            .into_iter()
            .flatten()
            .find_map(CrossrefDate::year);

        CanonicalMetadata {
            authors: people(self.author),
            title: self.title.unwrap_or_default(),
            subtitle: self.subtitle.unwrap_or_default(),
            container_title: self.container_title.unwrap_or_default(),
            editors: people(self.editor),
            resource_type: self
                .kind
                .as_deref()
                .map(ResourceType::from_type_name)
                .unwrap_or_default(),
            issued_year,
            publisher_location: self.publisher_location,
            publisher: self.publisher,
            volume: self.volume,
            issue: self.issue,
            pages: self.page,
            isbn: self.isbn.and_then(|list| list.into_iter().next()),
            url: self.url,
        }
    }
}

/// Parses a Crossref `/works/{doi}` body. The record must sit under `message`.
pub fn parse_work_response(body: &str) -> Result<CanonicalMetadata, LookupError> {
    let envelope: WorkEnvelope = serde_json::from_str(body)
        .map_err(|e| LookupError::MalformedResponse(e.to_string()))?;
    let work = envelope
        .message
        .ok_or_else(|| LookupError::MalformedResponse("missing \"message\"".to_string()))?;
    Ok(work.into_canonical())
}
