//! [`MetadataSource`] returning canned results and recording the queries it saw.

use async_trait::async_trait;
use citation_sources::{MetadataSource, SourceError, SourceQuery};
use gost_citation::CanonicalMetadata;
use std::sync::Mutex;

pub struct StubSource {
    result: Result<CanonicalMetadata, SourceError>,
    queries: Mutex<Vec<SourceQuery>>,
}

impl StubSource {
    pub fn returning(metadata: CanonicalMetadata) -> Self {
        Self {
            result: Ok(metadata),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: SourceError) -> Self {
        Self {
            result: Err(error),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<SourceQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl MetadataSource for StubSource {
    async fn resolve(&self, query: &SourceQuery) -> Result<CanonicalMetadata, SourceError> {
        self.queries.lock().unwrap().push(query.clone());
        if let SourceQuery::Unrecognized(text) = query {
            return Err(SourceError::Unrecognized(text.clone()));
        }
        self.result.clone()
    }
}
