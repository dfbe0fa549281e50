//! Pagination crawling over search result pages.

use crate::error::Result;
use crate::extractor::{Extractor, ListingNode, ListingRecord};
use crate::filter::SearchFilters;
use crate::registry::ExtractorRegistry;
use crate::url_builder::{build_search_url, SearchType};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use tracing::{debug, info, warn};

static CONTAINER_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("blockquote").expect("Container selector is hardcoded and valid"));

static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a").expect("Anchor selector is hardcoded and valid"));

/// Synchronous page transport used by the crawler.
pub trait PageFetcher {
    /// Fetch `url` and return the response body.
    ///
    /// # Errors
    ///
    /// Implementations report transport and HTTP failures as
    /// [`SearchError::Fetch`](crate::SearchError::Fetch).
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Walks paginated search results and aggregates extracted records.
///
/// Result pages keep their listings in the second `<blockquote>` of the
/// page, one `<p>` row per listing, with a "next ... postings" footer link
/// when more pages follow. The crawler follows that link until it
/// disappears, a followed URL repeats, or the configured page limit is
/// reached.
pub struct SearchCrawler<F> {
    registry: ExtractorRegistry,
    fetcher: F,
    max_pages: Option<usize>,
}

impl<F: PageFetcher> SearchCrawler<F> {
    /// Create a crawler with the built-in extractor registry.
    pub fn new(fetcher: F) -> Self {
        Self {
            registry: ExtractorRegistry::builtin(),
            fetcher,
            max_pages: None,
        }
    }

    /// Replace the extractor registry.
    #[must_use]
    pub fn with_registry(mut self, registry: ExtractorRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Stop after this many pages, counting the page handed to [`crawl`].
    ///
    /// [`crawl`]: SearchCrawler::crawl
    #[must_use]
    pub fn with_max_pages(mut self, max: usize) -> Self {
        self.max_pages = Some(max);
        self
    }

    /// Run a query end-to-end.
    ///
    /// Builds the search URL for `location`, fetches the first result page
    /// and hands it to [`crawl`](SearchCrawler::crawl).
    ///
    /// # Errors
    ///
    /// Fails when a page cannot be fetched or the category cannot be
    /// resolved to an extraction strategy.
    pub fn search(
        &self,
        location: &str,
        category: &str,
        query: &str,
        search_type: SearchType,
        filters: Option<&SearchFilters>,
    ) -> Result<Vec<ListingRecord>> {
        let url = build_search_url(location, category, query, search_type);
        info!(%url, category, "starting search");
        let html = self.fetcher.fetch(&url)?;
        self.crawl(category, location, &html, filters)
    }

    /// Extract every listing reachable from an already-fetched result page.
    ///
    /// `location` is the site base URL, used to resolve relative next-page
    /// links. Records are returned in page order, then row order. Filters
    /// apply to housing categories only.
    ///
    /// # Errors
    ///
    /// Fails when the category cannot be resolved to an extraction
    /// strategy, or when fetching a follow-on page fails; records from
    /// pages before the failure are discarded.
    pub fn crawl(
        &self,
        category: &str,
        location: &str,
        html: &str,
        filters: Option<&SearchFilters>,
    ) -> Result<Vec<ListingRecord>> {
        let extractor = self.registry.get(category)?;
        let mut records = Vec::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut pages = 0usize;
        let mut page = html.to_string();

        loop {
            pages += 1;
            let document = Html::parse_document(&page);
            let Some(container) = document.select(&CONTAINER_SELECTOR).nth(1) else {
                warn!(category, page = pages, "listing container not found, stopping");
                break;
            };

            let before = records.len();
            collect_listings(extractor, &container, filters, &mut records);
            debug!(page = pages, listings = records.len() - before, "extracted page");

            let Some(href) = find_next_link(&container) else {
                break;
            };

            if let Some(max) = self.max_pages {
                if pages >= max {
                    debug!(max, "page limit reached, stopping");
                    break;
                }
            }

            let next_url = resolve_href(location, &href);
            if !visited.insert(next_url.clone()) {
                warn!(url = %next_url, "next-page link cycles back, stopping");
                break;
            }

            page = self.fetcher.fetch(&next_url)?;
        }

        info!(category, pages, records = records.len(), "crawl finished");
        Ok(records)
    }
}

fn collect_listings(
    extractor: Extractor,
    container: &ElementRef<'_>,
    filters: Option<&SearchFilters>,
    records: &mut Vec<ListingRecord>,
) {
    for child in container.children() {
        let element = match ElementRef::wrap(child) {
            Some(element) if element.value().name() == "p" => element,
            _ => continue,
        };

        let listing = ListingNode::new(element);
        let Some(record) = extractor.extract(&listing) else {
            continue;
        };

        if let Some(filters) = filters {
            if extractor == Extractor::Housing && !filters.matches(&record) {
                debug!(link = %record.link, "listing outside filter bounds, dropped");
                continue;
            }
        }

        records.push(record);
    }
}

/// Find the "next NNN postings" footer link, if the page has one.
fn find_next_link(container: &ElementRef<'_>) -> Option<String> {
    for anchor in container.select(&ANCHOR_SELECTOR) {
        let label = anchor.text().collect::<String>();
        let label = label.trim().to_lowercase();
        if label.starts_with("next") && label.ends_with("postings") {
            if let Some(href) = anchor.value().attr("href") {
                return Some(href.to_string());
            }
        }
    }
    None
}

fn resolve_href(location: &str, href: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{location}{href}")
    }
}
