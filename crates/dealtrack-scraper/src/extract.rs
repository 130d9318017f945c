//! CSS extraction of the price and image fields from a Flipkart product page.
//!
//! The selectors target Flipkart's obfuscated class names and will stop
//! matching when the page structure changes. That failure mode is silent:
//! the fetch still completes, just with empty fields.

use std::sync::LazyLock;

use scraper::{Html, Selector};

/// Price element: `<div class="Nx9bqj CxhGGd">₹33,999</div>`.
static PRICE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.Nx9bqj").expect("valid selector"));

/// Product image nested in its container:
/// `<div class="_4WELSP _6lpKCl"><img src="..."></div>`.
static IMAGE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div._4WELSP._6lpKCl img").expect("valid selector"));

/// Fields pulled out of one fetched page. Both start empty and are set at
/// most once; the result lives only for the duration of a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    pub price_text: String,
    pub image_url: String,
}

impl ExtractionResult {
    /// Records the displayed price. First match wins: product pages carry a
    /// second, structurally identical price element further down, and only
    /// the first is the live price.
    pub fn record_price(&mut self, text: &str) {
        if self.price_text.is_empty() {
            self.price_text = text.trim().to_owned();
        }
    }

    /// Records the product image URL. First match wins.
    pub fn record_image(&mut self, url: &str) {
        if self.image_url.is_empty() {
            self.image_url = url.to_owned();
        }
    }
}

/// Applies both selectors over `html`, feeding matches in document order
/// into the first-match-wins recorders.
///
/// The price and image fields are independent; neither selector matching
/// is an error, the fields just stay empty.
#[must_use]
pub fn extract_product(html: &str) -> ExtractionResult {
    let doc = Html::parse_document(html);
    let mut result = ExtractionResult::default();

    for element in doc.select(&PRICE_SELECTOR) {
        let text: String = element.text().collect();
        result.record_price(&text);
    }

    for element in doc.select(&IMAGE_SELECTOR) {
        if let Some(src) = element.value().attr("src") {
            result.record_image(src);
        }
    }

    result
}
