//! Corkboard Search - Classifieds listing extraction and pagination.
//!
//! This crate turns raw classifieds search-result HTML into structured
//! listing records. Listing rows are positional rather than semantic
//! markup, so extraction is strategy-based: each category group gets an
//! [`Extractor`] that knows its row layout, and an [`ExtractorRegistry`]
//! dispatches category codes to strategies with a fallback for unknown
//! codes. [`SearchCrawler`] drives extraction across paginated result
//! pages through a pluggable [`PageFetcher`] transport.
//!
//! # Features
//!
//! - Per-category extraction strategies for for-sale, job and housing rows
//! - Category-code registry with a default fallback strategy
//! - Price parsing out of free-form listing text
//! - Pagination crawling with cycle detection and an optional page limit
//! - Post-extraction price and bedroom bounds for housing searches
//!
//! # Example
//!
//! ```rust,ignore
//! use corkboard_search::{SearchCrawler, SearchFilters, SearchType};
//!
//! let crawler = SearchCrawler::new(fetcher).with_max_pages(5);
//! let filters = SearchFilters {
//!     max_price: Some(1500.0),
//!     ..SearchFilters::default()
//! };
//!
//! let records = crawler.search(
//!     "https://portland.craigslist.org/",
//!     "hhh",
//!     "alberta arts",
//!     SearchType::AllText,
//!     Some(&filters),
//! )?;
//!
//! for record in &records {
//!     println!("{}  {}", record.date, record.description);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod crawler;
pub mod error;
pub mod extractor;
#[allow(missing_docs)]
pub mod filter;
pub mod price;
pub mod registry;
pub mod url_builder;

// Re-export commonly used types
pub use crawler::{PageFetcher, SearchCrawler};
pub use error::{Result, SearchError};
pub use extractor::{Extractor, ListingNode, ListingRecord};
pub use filter::SearchFilters;
pub use price::parse_price;
pub use registry::ExtractorRegistry;
pub use url_builder::{build_search_url, SearchType};
