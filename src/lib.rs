//! amz-sentiment - Amazon product review sentiment analysis
//!
//! Fetches one product page, extracts its title, rating, price and reviews,
//! scores every review's polarity and presents the results in a small web UI
//! or on the command line.

pub mod amazon;
pub mod commands;
pub mod config;
pub mod format;
pub mod report;
pub mod sentiment;
pub mod web;

pub use amazon::models::{Field, ProductRecord};
pub use commands::{Analysis, AnalyzeCommand};
pub use config::Config;
pub use report::Report;
pub use sentiment::SentimentAnalyzer;
