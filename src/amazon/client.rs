//! HTTP client for fetching product pages using wreq.

use crate::config::Config;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};
use wreq::Client;
use wreq_util::Emulation;

/// Browser identity sent with every request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Why a page could not be fetched.
///
/// Callers that only care about success or failure can ignore the variant;
/// it exists for logging.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with anything other than 200.
    #[error("Request failed with status: {0}")]
    Status(u16),

    /// The request never produced a response (bad URL, DNS, TLS, timeout...).
    #[error("Request failed: {0}")]
    Transport(String),
}

/// Trait for page fetching - enables mocking for tests.
#[async_trait]
pub trait PageFetch: Send + Sync {
    /// Fetches `url` and returns the response body.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// HTTP client that presents itself as a desktop browser.
pub struct AmazonClient {
    client: Client,
    user_agent: String,
    impersonate: bool,
}

impl AmazonClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .redirect(wreq::redirect::Policy::default());

        // Library default unless explicitly configured
        if let Some(secs) = config.timeout_secs {
            debug!("Request timeout: {}s", secs);
            builder = builder.timeout(Duration::from_secs(secs));
        }

        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url).context("Failed to configure proxy")?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { client, user_agent: config.user_agent.clone(), impersonate: config.impersonate })
    }

    /// Performs the GET request and checks the status.
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {}", url);

        let mut request = self.client.get(url);
        if self.impersonate {
            request = request.emulation(Emulation::Chrome131);
        }

        let response = request
            .header("User-Agent", self.user_agent.as_str())
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status.as_u16() != 200 {
            return Err(FetchError::Status(status.as_u16()));
        }

        response.text().await.map_err(|e| FetchError::Transport(e.to_string()))
    }
}

#[async_trait]
impl PageFetch for AmazonClient {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        info!("Fetching product page: {}", url);

        let result = self.get(url).await;
        if let Err(e) = &result {
            warn!("Fetch failed for {}: {}", url, e);
        }
        result
    }
}
