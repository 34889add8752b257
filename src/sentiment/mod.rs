//! Review sentiment scoring.

pub mod analyzer;
pub mod lexicon;

pub use analyzer::SentimentAnalyzer;
pub use lexicon::{ReviewLexicon, SentimentLexicon};
