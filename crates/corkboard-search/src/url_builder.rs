//! Search URL construction.

use crate::error::{Result, SearchError};
use std::str::FromStr;

/// Whether a query matches full post text or titles only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchType {
    /// Match anywhere in the post body (`srchType=A`)
    #[default]
    AllText,
    /// Match post titles only (`srchType=T`)
    TitlesOnly,
}

impl SearchType {
    /// Query-string code for this search type.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            SearchType::AllText => "A",
            SearchType::TitlesOnly => "T",
        }
    }
}

impl FromStr for SearchType {
    type Err = SearchError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "A" => Ok(SearchType::AllText),
            "T" => Ok(SearchType::TitlesOnly),
            other => Err(SearchError::InvalidSearchType {
                value: other.to_string(),
            }),
        }
    }
}

/// Build the URL for the first page of a search.
///
/// The query is percent-encoded. `location` is the site base URL and may
/// be given with or without a trailing slash.
#[must_use]
pub fn build_search_url(
    location: &str,
    category: &str,
    query: &str,
    search_type: SearchType,
) -> String {
    let base = location.trim_end_matches('/');
    let encoded = urlencoding::encode(query);
    let code = search_type.code();
    format!("{base}/search/{category}?query={encoded}&srchType={code}")
}
