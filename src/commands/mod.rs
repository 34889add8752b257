//! CLI command implementations.

pub mod analyze;

pub use analyze::{Analysis, AnalyzeCommand, FETCH_FAILED_MESSAGE};
