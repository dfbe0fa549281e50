//! Error types for the search engine.

use thiserror::Error;

/// Errors that can occur while configuring or running a search.
#[derive(Error, Debug)]
pub enum SearchError {
    /// A category code was registered twice
    #[error("category {category} is already registered")]
    DuplicateCategory {
        /// The category code that was already bound
        category: String,
    },

    /// No extractor is bound for a category and no default exists
    #[error("no extractor registered for {category} and no default is bound")]
    NoDefaultExtractor {
        /// The category code that was requested
        category: String,
    },

    /// The search-type argument is not a recognized code
    #[error("invalid search type {value:?} (expected \"A\" or \"T\")")]
    InvalidSearchType {
        /// The rejected value
        value: String,
    },

    /// A page fetch failed; the crawl is aborted
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        /// The URL that could not be fetched
        url: String,
        /// Underlying transport error
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
