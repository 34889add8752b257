//! Product page analysis: fetch, extract, score.

use crate::amazon::{AmazonClient, FetchError, PageFetch, Parser};
use crate::config::Config;
use crate::format::Formatter;
use crate::report::Report;
use crate::sentiment::SentimentAnalyzer;
use anyhow::{Context, Result};
use tracing::{info, warn};

/// Message shown to the user whenever the page could not be fetched.
pub const FETCH_FAILED_MESSAGE: &str =
    "Failed to retrieve product details. Check the URL and try again.";

/// Outcome of one analysis run.
#[derive(Debug)]
pub enum Analysis {
    /// The page could not be fetched; nothing was extracted or scored.
    Failed(FetchError),
    /// The page was fetched and analyzed.
    Completed(Report),
}

impl Analysis {
    /// Returns the report of a completed run.
    pub fn report(&self) -> Option<&Report> {
        match self {
            Analysis::Completed(report) => Some(report),
            Analysis::Failed(_) => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Analysis::Failed(_))
    }
}

/// Runs the fetch, extract, score pipeline for one URL.
pub struct AnalyzeCommand {
    config: Config,
    parser: Parser,
    analyzer: SentimentAnalyzer,
}

impl AnalyzeCommand {
    /// Creates a new analyze command.
    pub fn new(config: Config) -> Self {
        Self { config, parser: Parser::new(), analyzer: SentimentAnalyzer::new() }
    }

    /// Analyzes `url` and returns formatted output.
    pub async fn execute(&self, url: &str) -> Result<String> {
        let client = AmazonClient::new(&self.config).context("Failed to create HTTP client")?;

        match self.run_with_client(&client, url).await {
            Analysis::Completed(report) => {
                let formatter = Formatter::new(self.config.format);
                Ok(formatter.format_report(&report))
            }
            Analysis::Failed(_) => anyhow::bail!(FETCH_FAILED_MESSAGE),
        }
    }

    /// Analyzes `url` with a provided client (for testing and the web UI).
    pub async fn run_with_client(&self, client: &(impl PageFetch + ?Sized), url: &str) -> Analysis {
        info!("Analyzing: {}", url);

        let html = match client.fetch(url).await {
            Ok(html) => html,
            Err(e) => return Analysis::Failed(e),
        };

        let product = self.parser.extract(&html);
        if product.looks_stale() {
            warn!("Nothing extracted from {}; selectors may be out of date", url);
        }

        let sentiments = self.analyzer.score(&product.reviews);
        info!("Scored {} reviews", sentiments.len());

        Analysis::Completed(Report::new(url, product, sentiments, self.config.histogram_bins))
    }
}
