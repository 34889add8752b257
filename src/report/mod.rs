//! Analysis results assembled for presentation.

pub mod histogram;

pub use histogram::Histogram;

use crate::amazon::models::ProductRecord;
use serde::{Deserialize, Serialize};

/// One row of the review table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRow {
    pub review: String,
    pub sentiment: f64,
}

/// Reviews paired with their scores, in extraction order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewSentimentTable {
    pub rows: Vec<ReviewRow>,
}

impl ReviewSentimentTable {
    /// Pairs each review with the score at the same index.
    pub fn new(reviews: &[String], sentiments: &[f64]) -> Self {
        debug_assert_eq!(reviews.len(), sentiments.len());

        let rows = reviews
            .iter()
            .zip(sentiments)
            .map(|(review, sentiment)| ReviewRow { review: review.clone(), sentiment: *sentiment })
            .collect();

        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Aggregate view of the review scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    /// Mean polarity (0.0 with no reviews)
    pub mean: f64,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentSummary {
    pub fn new(sentiments: &[f64]) -> Self {
        if sentiments.is_empty() {
            return Self::default();
        }

        Self {
            mean: sentiments.iter().sum::<f64>() / sentiments.len() as f64,
            positive: sentiments.iter().filter(|s| **s > 0.0).count(),
            negative: sentiments.iter().filter(|s| **s < 0.0).count(),
            neutral: sentiments.iter().filter(|s| **s == 0.0).count(),
        }
    }
}

/// Everything one successful run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Source URL
    pub url: String,
    pub product: ProductRecord,
    /// One score per review, same order
    pub sentiments: Vec<f64>,
    pub table: ReviewSentimentTable,
    pub histogram: Histogram,
    pub summary: SentimentSummary,
    /// True when no field or review was found at all
    pub stale_selectors: bool,
}

impl Report {
    /// Builds the report from an extracted record and its review scores.
    pub fn new(
        url: impl Into<String>,
        product: ProductRecord,
        sentiments: Vec<f64>,
        bins: usize,
    ) -> Self {
        let table = ReviewSentimentTable::new(&product.reviews, &sentiments);
        let histogram = Histogram::new(&sentiments, bins);
        let summary = SentimentSummary::new(&sentiments);
        let stale_selectors = product.looks_stale();

        Self { url: url.into(), product, sentiments, table, histogram, summary, stale_selectors }
    }
}
