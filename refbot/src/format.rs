//! One-shot formatting for the `format` command.

use crate::config::RefbotConfig;
use crate::handlers::resolve_citation;
use anyhow::{Context, Result};
use citation_sources::MetadataResolver;
use gost_citation::{render, CanonicalMetadata, Clock};
use std::path::Path;

/// Resolves a DOI or portal link over the network and renders it.
pub async fn format_query(config: &RefbotConfig, query: &str, clock: &dyn Clock) -> Result<String> {
    config.validate()?;
    let resolver = MetadataResolver::new(&config.crossref_api_url, &config.http_settings())?;
    resolve_citation(query, &resolver, clock)
        .await
        .map_err(|e| anyhow::anyhow!("{} ({})", e.user_message(), e))
}

/// Renders a canonical record stored as JSON; no network access.
pub fn format_json_file(path: &Path, clock: &dyn Clock) -> Result<String> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let metadata: CanonicalMetadata = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid metadata record in {}", path.display()))?;
    Ok(render(&metadata, clock))
}
