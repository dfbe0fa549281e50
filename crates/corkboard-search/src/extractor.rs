//! Per-category listing extraction strategies.
//!
//! Listing rows are loosely structured: each category lays its fields out
//! at fixed child positions inside a `<p>` row, padded with whitespace and
//! `-` separator text nodes. [`ListingNode`] strips the padding so the
//! strategies can index fields positionally; missing auxiliary markup
//! degrades to empty or absent fields rather than failing the row.

use crate::price::parse_price;
use once_cell::sync::Lazy;
use ego_tree::NodeRef;
use scraper::{ElementRef, Node, Selector};
use serde::{Deserialize, Serialize};

static SMALL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("small").expect("Small selector is hardcoded and valid"));

/// One extracted posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    /// Posting date as displayed, trimmed of separator punctuation
    pub date: String,
    /// Absolute URL to the full posting
    pub link: String,
    /// Posting title/summary text
    pub description: String,
    /// Neighborhood/area text
    pub location: String,
    /// Whether a thumbnail indicator is present
    pub has_image: bool,
    /// Category label; empty when the markup is malformed
    pub category: String,
    /// Monetary value, when a parseable one was found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Bedroom count, for housing listings that declare one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    /// Raw area token (e.g. `2594ft²`), for housing listings that declare one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub square_feet: Option<String>,
}

/// One listing row with template noise stripped from its child list.
///
/// Child nodes are dropped when they are text nodes that trim to nothing
/// or to a lone `-`; everything else keeps its position, which is what the
/// extraction strategies index into.
pub struct ListingNode<'a> {
    element: ElementRef<'a>,
    children: Vec<NodeRef<'a, Node>>,
}

impl<'a> ListingNode<'a> {
    /// Wrap a listing element, cleaning its child list.
    #[must_use]
    pub fn new(element: ElementRef<'a>) -> Self {
        let children = element
            .children()
            .filter(|node| match node.value() {
                Node::Text(text) => {
                    let trimmed = text.trim();
                    !trimmed.is_empty() && trimmed != "-"
                }
                _ => true,
            })
            .collect();

        Self { element, children }
    }

    fn child_text(&self, index: usize) -> Option<String> {
        self.children.get(index).map(|node| match node.value() {
            Node::Text(text) => text.to_string(),
            _ => ElementRef::wrap(*node).map_or_else(String::new, |el| el.text().collect()),
        })
    }

    fn child_href(&self, index: usize) -> Option<&'a str> {
        self.children
            .get(index)
            .and_then(|node| node.value().as_element())
            .and_then(|element| element.attr("href"))
    }

    fn small_text(&self) -> Option<String> {
        self.element
            .select(&SMALL_SELECTOR)
            .next()
            .map(|small| small.text().collect())
    }
}

/// Extraction strategy for one listing category group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extractor {
    /// For-sale items (`sss`, also the default strategy)
    ForSale,
    /// Job postings (`jjj`, `ggg`, `bbb`)
    Job,
    /// Housing units for sale or rent (`hhh`)
    Housing,
}

impl Extractor {
    /// Extract one listing row into a record.
    ///
    /// Returns `None` when the row is unusable, such as the pagination
    /// footer, which has no link at the expected position. Other missing
    /// fields degrade to empty or absent values.
    #[must_use]
    pub fn extract(self, listing: &ListingNode<'_>) -> Option<ListingRecord> {
        match self {
            Extractor::ForSale => extract_for_sale(listing),
            Extractor::Job => extract_job(listing),
            Extractor::Housing => extract_housing(listing),
        }
    }
}

fn extract_for_sale(listing: &ListingNode<'_>) -> Option<ListingRecord> {
    let link = listing.child_href(2)?;

    Some(ListingRecord {
        date: clean_date(listing.child_text(1)),
        link: link.to_string(),
        description: trimmed(listing.child_text(2)),
        location: trimmed(listing.child_text(5)),
        has_image: text_present(listing.child_text(6)),
        category: listing.child_text(7).unwrap_or_default(),
        price: listing.child_text(4).as_deref().and_then(parse_price),
        bedrooms: None,
        square_feet: None,
    })
}

fn extract_job(listing: &ListingNode<'_>) -> Option<ListingRecord> {
    let link = listing.child_href(1)?;

    // The small tag, when present, names the sub-category more precisely
    // than the positional cell.
    let category = listing
        .small_text()
        .or_else(|| listing.child_text(4))
        .unwrap_or_default();

    Some(ListingRecord {
        date: clean_date(listing.child_text(0)),
        link: link.to_string(),
        description: listing.child_text(1).unwrap_or_default(),
        location: listing.child_text(2).unwrap_or_default(),
        has_image: text_present(listing.child_text(3)),
        category,
        price: None,
        bedrooms: None,
        square_feet: None,
    })
}

fn extract_housing(listing: &ListingNode<'_>) -> Option<ListingRecord> {
    let link = listing.child_href(1)?;
    let description = trimmed(listing.child_text(1));
    let price = parse_price(&description);

    // Housing titles carry their details after a slash, as in
    // "$1425 / 3br - 1492ft² - Sherwood home". Tokens that are neither a
    // bedroom count nor an area are free text and not retained.
    let mut bedrooms = None;
    let mut square_feet = None;
    if let Some((_, details)) = description.split_once('/') {
        for token in details.split('-') {
            let token = token.trim();
            if token.contains("ft") {
                square_feet = Some(token.to_string());
            } else if token.contains("br") {
                let lowered = token.to_lowercase();
                let count = lowered
                    .split_once("br")
                    .map_or("", |(before, _)| before)
                    .trim()
                    .parse()
                    .unwrap_or(0);
                bedrooms = Some(count);
            }
        }
    }

    Some(ListingRecord {
        date: clean_date(listing.child_text(0)),
        link: link.to_string(),
        description,
        location: trimmed(listing.child_text(2)),
        has_image: text_present(listing.child_text(3)),
        category: listing.small_text().unwrap_or_default(),
        price,
        bedrooms,
        square_feet,
    })
}

fn trimmed(text: Option<String>) -> String {
    match text {
        Some(value) => value.trim().to_string(),
        None => String::new(),
    }
}

fn clean_date(text: Option<String>) -> String {
    match text {
        Some(value) => value.trim().trim_end_matches(['-', ' ']).to_string(),
        None => String::new(),
    }
}

fn text_present(text: Option<String>) -> bool {
    text.is_some_and(|value| !value.is_empty())
}
