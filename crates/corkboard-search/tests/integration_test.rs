use corkboard_search::{
    PageFetcher, Result, SearchCrawler, SearchError, SearchFilters, SearchType,
};
use std::collections::HashMap;

const ROW_LAPTOP_TRADE: &str = r#"<p> <span class="star"></span> Jun 7 -  <a href="http://portland.craigslist.org/clk/sys/3058025999.html">i want to trade my laptop for a utility trailer</a> <span class="itemsep">-</span> <span class="itempp"></span> - <font size="-1"> (Kelso)</font> <span class="itempx"></span> <span class="itemcg"><small><a href="/sss/">computers - by owner</a></small></span> </p>"#;

const ROW_MOTHERBOARD: &str = r#"<p> <span class="star"></span> Jun 7 -  <a href="http://portland.craigslist.org/mlt/sys/3058061021.html">D525MWV Intel Atom 1.8Ghz MotherBoard</a> <span class="itemsep">-</span> <span class="itempp"> $50 </span> - <font size="-1"> (Ne Portland)</font> <span class="itempx"> pic</span> <span class="itemcg"><small><a href="/sss/">computers - by owner</a></small></span> </p>"#;

const ROW_LATITUDE: &str = r#"<p> <span class="star"></span> Jun 6 -  <a href="http://portland.craigslist.org/mlt/sys/3056223810.html">Dell Latitude D620 Laptop</a> <span class="itemsep">-</span> <span class="itempp"> $100.00 </span> - <font size="-1"> (Se Portland)</font> <span class="itempx"> pic</span> <span class="itemcg"><small><a href="/sss/">computers - by owner</a></small></span> </p>"#;

const ROW_ALBERTA_APT: &str = r#"<p> Jun  7 -  <a href="http://portland.craigslist.org/mlt/apa/3064412526.html">$800 / 1br - Great apartment near Alberta Arts</a> <font size="-1">(1736 NE Killingsworth St.)</font> <span class="itempx"></span> <small>apts/housing for rent</small> </p>"#;

const ROW_SHERWOOD_HOME: &str = r#"<p> Jun  7 -  <a href="http://portland.craigslist.org/wsc/apa/3063998127.html">$1425 / 3br - 1492ft² - Beautiful Sherwood Home</a> <font size="-1">(Sherwood)</font> <span class="itempx"> pic</span> <small>apts/housing for rent</small> </p>"#;

const ROW_VACATION_STAY: &str = r#"<p> Jun  7 -  <a href="http://portland.craigslist.org/mlt/vac/3064470120.html">$80 Stay at 'inner northeast charmer' by the night</a> <font size="-1">(King)</font> <span class="itempx"> pic</span> <small>vacation rentals</small> </p>"#;

/// Assemble a result page: a nav blockquote, then the listing blockquote
/// with one `<p>` per row and an optional pagination footer.
fn result_page(rows: &[&str], next_href: Option<&str>) -> String {
    let mut body = String::from(
        "<html><body>\n<blockquote><a href=\"/\">portland</a> classifieds</blockquote>\n<blockquote>\n",
    );
    for row in rows {
        body.push_str(row);
        body.push('\n');
    }
    if let Some(href) = next_href {
        body.push_str(&format!(
            "<p align=\"center\"><a href=\"{href}\"><b>next 100 postings</b></a></p>\n"
        ));
    }
    body.push_str("</blockquote>\n</body></html>\n");
    body
}

struct MockFetcher {
    pages: HashMap<String, String>,
}

impl MockFetcher {
    fn new(pages: &[(&str, String)]) -> Self {
        Self {
            pages: pages
                .iter()
                .map(|(url, body)| ((*url).to_string(), body.clone()))
                .collect(),
        }
    }

    fn empty() -> Self {
        Self::new(&[])
    }
}

impl PageFetcher for MockFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| SearchError::Fetch {
                url: url.to_string(),
                source: "page not mocked".into(),
            })
    }
}

#[test]
fn test_two_page_crawl_preserves_order() {
    let page2_url = "http://portland.craigslist.org/search/sss?query=laptop&srchType=A&s=100";
    let page1 = result_page(&[ROW_LAPTOP_TRADE, ROW_MOTHERBOARD], Some(page2_url));
    let page2 = result_page(&[ROW_LATITUDE], None);

    let fetcher = MockFetcher::new(&[(page2_url, page2)]);
    let crawler = SearchCrawler::new(fetcher);

    let records = crawler
        .crawl("sss", "http://portland.craigslist.org/", &page1, None)
        .expect("crawl succeeds");

    assert_eq!(records.len(), 3);
    assert_eq!(
        records[0].description,
        "i want to trade my laptop for a utility trailer"
    );
    assert_eq!(records[1].description, "D525MWV Intel Atom 1.8Ghz MotherBoard");
    assert_eq!(records[1].price, Some(50.0));
    assert_eq!(records[2].description, "Dell Latitude D620 Laptop");
    assert_eq!(records[2].price, Some(100.0));
}

#[test]
fn test_relative_next_link_is_resolved_against_location() {
    let page1 = result_page(&[ROW_MOTHERBOARD], Some("index100.html"));
    let page2 = result_page(&[ROW_LATITUDE], None);

    let fetcher = MockFetcher::new(&[("http://portland.craigslist.org/index100.html", page2)]);
    let crawler = SearchCrawler::new(fetcher);

    let records = crawler
        .crawl("sss", "http://portland.craigslist.org/", &page1, None)
        .expect("crawl succeeds");

    assert_eq!(records.len(), 2);
}

#[test]
fn test_housing_filters_apply_across_pages() {
    let page2_url = "http://portland.craigslist.org/search/hhh?query=portland&srchType=A&s=100";
    let page1 = result_page(&[ROW_ALBERTA_APT, ROW_SHERWOOD_HOME], Some(page2_url));
    let page2 = result_page(&[ROW_VACATION_STAY], None);

    let fetcher = MockFetcher::new(&[(page2_url, page2)]);
    let crawler = SearchCrawler::new(fetcher);

    let filters = SearchFilters {
        max_price: Some(1000.0),
        ..SearchFilters::default()
    };
    let records = crawler
        .crawl(
            "hhh",
            "http://portland.craigslist.org/",
            &page1,
            Some(&filters),
        )
        .expect("crawl succeeds");

    // The $1425 home is dropped; the $800 and $80 listings survive.
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].price, Some(800.0));
    assert_eq!(records[0].bedrooms, Some(1));
    assert_eq!(records[1].price, Some(80.0));
}

#[test]
fn test_fetch_failure_discards_partial_results() {
    let page1 = result_page(
        &[ROW_MOTHERBOARD],
        Some("http://portland.craigslist.org/unreachable.html"),
    );

    let crawler = SearchCrawler::new(MockFetcher::empty());
    let result = crawler.crawl("sss", "http://portland.craigslist.org/", &page1, None);

    assert!(matches!(
        result,
        Err(SearchError::Fetch { url, .. })
            if url == "http://portland.craigslist.org/unreachable.html"
    ));
}

#[test]
fn test_next_link_cycle_stops_the_crawl() {
    let page2_url = "http://portland.craigslist.org/search/sss?query=laptop&srchType=A&s=100";
    let page1 = result_page(&[ROW_LAPTOP_TRADE, ROW_MOTHERBOARD], Some(page2_url));
    // Page two points back at itself.
    let page2 = result_page(&[ROW_LATITUDE], Some(page2_url));

    let fetcher = MockFetcher::new(&[(page2_url, page2)]);
    let crawler = SearchCrawler::new(fetcher);

    let records = crawler
        .crawl("sss", "http://portland.craigslist.org/", &page1, None)
        .expect("crawl succeeds");

    // Each page is extracted exactly once.
    assert_eq!(records.len(), 3);
}

#[test]
fn test_max_pages_stops_before_following_the_link() {
    let page1 = result_page(
        &[ROW_LAPTOP_TRADE, ROW_MOTHERBOARD],
        Some("http://portland.craigslist.org/unreachable.html"),
    );

    // The follow-on page is not mocked, so reaching for it would fail.
    let crawler = SearchCrawler::new(MockFetcher::empty()).with_max_pages(1);
    let records = crawler
        .crawl("sss", "http://portland.craigslist.org/", &page1, None)
        .expect("crawl stops at the limit");

    assert_eq!(records.len(), 2);
}

#[test]
fn test_page_without_listing_container_yields_nothing() {
    let html = "<html><body><blockquote>nav only</blockquote></body></html>";

    let crawler = SearchCrawler::new(MockFetcher::empty());
    let records = crawler
        .crawl("sss", "http://portland.craigslist.org/", html, None)
        .expect("crawl succeeds");

    assert!(records.is_empty());
}

#[test]
fn test_search_fetches_the_built_url() {
    let first_page_url = "http://portland.craigslist.org/search/sss?query=laptop&srchType=A";
    let page1 = result_page(&[ROW_LAPTOP_TRADE, ROW_MOTHERBOARD], None);

    let fetcher = MockFetcher::new(&[(first_page_url, page1)]);
    let crawler = SearchCrawler::new(fetcher);

    let records = crawler
        .search(
            "http://portland.craigslist.org/",
            "sss",
            "laptop",
            SearchType::AllText,
            None,
        )
        .expect("search succeeds");

    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0].link,
        "http://portland.craigslist.org/clk/sys/3058025999.html"
    );
}
