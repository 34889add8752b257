//! HTML extraction for Amazon product pages.

use crate::amazon::models::{Field, ProductRecord};
use crate::amazon::selectors;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace, warn};

/// Extracts product fields and reviews from product page HTML.
///
/// Extraction never fails: a selector that matches nothing yields
/// [`Field::Missing`] (or no reviews) instead of an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser;

impl Parser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses a product page into a [`ProductRecord`].
    pub fn extract(&self, html: &str) -> ProductRecord {
        let document = Html::parse_document(html);

        let record = ProductRecord {
            title: first_text(&document, &selectors::TITLE),
            rating: first_text(&document, &selectors::RATING),
            price: first_text(&document, &selectors::PRICE),
            reviews: document.select(&selectors::REVIEW).map(element_text).collect(),
        };

        debug!(
            "Extracted {} reviews (missing fields: {:?})",
            record.reviews.len(),
            record.missing_fields()
        );

        if record.looks_stale() {
            warn!("No product fields or reviews found. The page layout may have changed.");
        }

        record
    }
}

/// Text of the first element matching `selector`.
fn first_text(document: &Html, selector: &Selector) -> Field {
    let text = document.select(selector).next().map(element_text);
    trace!("{:?} -> {:?}", selector, text);
    Field::from_option(text)
}

/// Concatenated text content of an element, with whitespace runs collapsed.
fn element_text(element: ElementRef) -> String {
    let text = element.text().collect::<String>();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
