//! Feed download and delivery.
//!
//! [`FeedFetcher`] performs one GET per fetch, reads the whole body as text and
//! hands it to the sanitizer and parser. [`spawn_fetch`] runs a fetch on a
//! worker task and reports the outcome to a [`RatesListener`] exactly once.

use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::errors::FetchError;
use crate::models::RateRecord;
use crate::parser::parse_feed;

/// Default HTTP request timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A source of rate records.
///
/// Every call is a full re-fetch and re-parse; implementations keep no state
/// between calls. Callers are responsible for not running two fetches at once.
#[async_trait]
pub trait RateFeed: Send + Sync {
    /// The feed location, used for logging.
    fn url(&self) -> &str;

    /// Fetch and parse the feed.
    ///
    /// Returns the complete record list, or an error with no records at all.
    async fn fetch_rates(&self) -> Result<Vec<RateRecord>, FetchError>;
}

/// Receives the outcome of a background fetch.
///
/// Exactly one of the two methods is called, exactly once, per fetch. Calls
/// arrive on the worker task; marshaling onto a UI thread is the
/// implementor's job.
pub trait RatesListener: Send + Sync {
    fn on_rates_parsed(&self, rates: Vec<RateRecord>);

    /// `message` is the user-facing text; the raw cause has already been logged.
    fn on_error(&self, message: &str);
}

/// HTTP fetcher for one feed URL.
pub struct FeedFetcher {
    client: Client,
    url: String,
}

impl FeedFetcher {
    /// Create a fetcher using the default request timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_timeout(url, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self::with_client(client, url)
    }

    /// Create a fetcher with a custom reqwest Client
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Download, sanitize and parse the feed.
    pub async fn fetch(&self) -> Result<Vec<RateRecord>, FetchError> {
        log::debug!("Fetching rate feed from: {}", self.url);

        let body = self.download().await.inspect_err(|e| {
            log::error!("Network error while downloading rates: {}", e);
        })?;

        let records = parse_feed(&body).map_err(|e| {
            log::error!("Problem parsing the RSS feed from {}: {}", self.url, e);
            FetchError::from(e)
        })?;

        log::debug!("Parsed {} rates from {}", records.len(), self.url);
        Ok(records)
    }

    async fn download(&self) -> Result<String, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::network(&self.url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status(&self.url, status));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::network(&self.url, e))
    }
}

#[async_trait]
impl RateFeed for FeedFetcher {
    fn url(&self) -> &str {
        &self.url
    }

    async fn fetch_rates(&self) -> Result<Vec<RateRecord>, FetchError> {
        self.fetch().await
    }
}

/// Fetch `url` once with a default client.
pub async fn fetch(url: &str) -> Result<Vec<RateRecord>, FetchError> {
    FeedFetcher::new(url).fetch().await
}

/// Run one fetch on a worker task and report to `listener`.
///
/// The returned handle resolves after the listener has been called. Dropping
/// the handle does not cancel the fetch.
pub fn spawn_fetch(feed: Arc<dyn RateFeed>, listener: Arc<dyn RatesListener>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match feed.fetch_rates().await {
            Ok(rates) => listener.on_rates_parsed(rates),
            Err(e) => listener.on_error(e.user_message()),
        }
    })
}
