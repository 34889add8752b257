//! CSS selectors for Amazon product pages.
//!
//! Every selector the extractor depends on lives here. Amazon changes its
//! markup from time to time; when the extractor starts reporting every field
//! as missing, capture a fresh page, update these, and add a test fixture.

use scraper::Selector;
use std::sync::LazyLock;

/// Product title.
pub static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span#productTitle").unwrap());

/// Star rating text ("4.5 out of 5 stars").
pub static RATING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.a-icon-alt").unwrap());

/// Whole (integer) part of the displayed price.
pub static PRICE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.a-price-whole").unwrap());

/// Body of each customer review.
pub static REVIEW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.review-text-content").unwrap());
