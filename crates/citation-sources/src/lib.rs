//! # citation-sources
//!
//! Turns user input into a [`gost_citation::CanonicalMetadata`] record. Two adapters feed the same
//! canonical shape:
//!
//! - [`CrossrefClient`]: DOI lookup against the Crossref REST API (`GET /works/{doi}`).
//! - [`ElibraryClient`]: scrapes Dublin Core `<meta>` tags from an eLibrary article page.
//!
//! [`SourceQuery::classify`] decides which adapter a message goes to; [`MetadataResolver`] wires both
//! behind the [`MetadataSource`] trait. All HTTP calls share [`HttpSettings`]: a bounded timeout and a
//! [`RetryPolicy`] for transient failures.

pub mod crossref;
pub mod dublin_core;
pub mod elibrary;
pub mod error;
pub mod http;
pub mod query;
pub mod resolver;
pub mod retry;

pub use crossref::{parse_work_response, CrossrefClient, DEFAULT_CROSSREF_URL};
pub use elibrary::{parse_portal_page, ElibraryClient};
pub use error::{FetchError, LookupError, SourceError};
pub use http::{HttpSettings, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use query::{normalize_doi, SourceQuery};
pub use resolver::{MetadataResolver, MetadataSource};
pub use retry::RetryPolicy;
