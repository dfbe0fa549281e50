//! Price parsing from free-form listing text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Compiled price pattern (initialized once at startup).
///
/// Three alternatives, tried leftmost-first: a decimal amount anchored at
/// the end of the text, an integer amount anchored at the end, and a
/// `$`-prefixed integer anywhere in the text. The last alternative is what
/// picks `$800` out of a housing title like `$800 / 1br - …`.
static PRICE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$?\d*\.\d{1,2}$|\$?\d+$|\$\d+\.?")
        .expect("Price regex is hardcoded and valid")
});

/// Try to extract a monetary value from `text`.
///
/// Returns `None` when no price-shaped token is present, so free or
/// non-priced listings stay unpriced instead of reporting zero.
#[must_use]
pub fn parse_price(text: &str) -> Option<f64> {
    let token = PRICE_PATTERN.find(text)?.as_str();
    token.trim_start_matches('$').parse().ok()
}
