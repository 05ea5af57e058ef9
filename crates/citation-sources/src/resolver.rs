use crate::crossref::CrossrefClient;
use crate::elibrary::ElibraryClient;
use crate::error::SourceError;
use crate::http::HttpSettings;
use crate::query::SourceQuery;
use async_trait::async_trait;
use gost_citation::CanonicalMetadata;
use tracing::debug;

/// Resolves a classified query into canonical metadata.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    async fn resolve(&self, query: &SourceQuery) -> Result<CanonicalMetadata, SourceError>;
}

/// DOIs go to Crossref, other http(s) links to the portal scraper.
#[derive(Debug, Clone)]
pub struct MetadataResolver {
    crossref: CrossrefClient,
    elibrary: ElibraryClient,
}

impl MetadataResolver {
    pub fn new(crossref_url: &str, settings: &HttpSettings) -> Result<Self, SourceError> {
        Ok(Self {
            crossref: CrossrefClient::new(crossref_url, settings)?,
            elibrary: ElibraryClient::new(settings)?,
        })
    }

    pub fn from_clients(crossref: CrossrefClient, elibrary: ElibraryClient) -> Self {
        Self { crossref, elibrary }
    }
}

#[async_trait]
impl MetadataSource for MetadataResolver {
    async fn resolve(&self, query: &SourceQuery) -> Result<CanonicalMetadata, SourceError> {
        debug!(?query, "Resolving metadata");
        match query {
            SourceQuery::Doi(doi) => Ok(self.crossref.fetch_metadata_by_doi(doi).await?),
            SourceQuery::PortalUrl(url) => Ok(self.elibrary.fetch_metadata_by_url(url).await?),
            SourceQuery::Unrecognized(text) => Err(SourceError::Unrecognized(text.clone())),
        }
    }
}
