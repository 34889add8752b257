//! Amazon-specific modules for fetching and parsing product pages.

pub mod client;
pub mod models;
pub mod parser;
pub mod selectors;

pub use client::{AmazonClient, FetchError, PageFetch};
pub use models::{Field, ProductRecord};
pub use parser::Parser;
