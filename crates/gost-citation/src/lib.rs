//! # gost-citation
//!
//! Renders bibliographic references in the GOST R 7.0.5 style from a [`CanonicalMetadata`] record.
//! The record is source-independent (see the `citation-sources` crate for the registry and portal adapters);
//! rendering is a pure function of the record and an injected [`Clock`] used for the access-date stamp.
//!
//! ```
//! use chrono::NaiveDate;
//! use gost_citation::{render, Author, CanonicalMetadata, FixedClock, ResourceType};
//!
//! let meta = CanonicalMetadata {
//!     authors: vec![Author::new("Ivanov", "Ivan Ivanovich")],
//!     title: vec!["Title".to_string()],
//!     resource_type: ResourceType::Book,
//!     publisher_location: Some("Moscow".to_string()),
//!     publisher: Some("Nauka".to_string()),
//!     issued_year: Some(2020),
//!     pages: Some("200".to_string()),
//!     ..Default::default()
//! };
//! let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
//! assert_eq!(render(&meta, &clock), "Ivanov I.I. Title. Moscow : Nauka, 2020. 200 с.");
//! ```

pub mod authors;
pub mod clock;
pub mod formatter;
pub mod metadata;
mod rules;

pub use authors::{format_authors, initials, ET_AL_SUFFIX, MAX_LISTED_AUTHORS};
pub use clock::{access_date, Clock, FixedClock, SystemClock, ACCESS_DATE_FORMAT};
pub use formatter::{render, CitationFormatter, CitationRule};
pub use metadata::{Author, CanonicalMetadata, ResourceType};
pub use rules::{en_dash_pages, ArticleRule, BookRule, ChapterRule, ElectronicRule};
