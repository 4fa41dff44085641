//! HTTP utilities for Basketball Reference page fetches

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE},
    Client, StatusCode,
};
use tracing::{debug, warn};

use crate::{error::RtsError, Result};


/// Browser-like identification; the site rejects obvious bot agents.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Per-request deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of raw page markup.
///
/// Implementations map HTTP 404 to [`RtsError::NotFound`], HTTP 429 to
/// [`RtsError::RateLimited`] and any other non-success status to
/// [`RtsError::UpstreamStatus`].
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, url: &str) -> Result<String>;
}

/// Headers sent with every page request.
pub fn browser_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml"),
    );
    h.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    h
}

/// Turn a response status into the crate's transport classification.
pub fn check_status(url: &str, status: StatusCode) -> Result<()> {
    match status {
        s if s.is_success() => Ok(()),
        StatusCode::NOT_FOUND => Err(RtsError::NotFound {
            url: url.to_string(),
        }),
        StatusCode::TOO_MANY_REQUESTS => Err(RtsError::RateLimited {
            url: url.to_string(),
        }),
        s => Err(RtsError::UpstreamStatus {
            url: url.to_string(),
            status: s.as_u16(),
        }),
    }
}

/// `reqwest`-backed fetcher with a fixed timeout and browser headers.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .default_headers(browser_headers())
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        debug!(url, "GET");
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if let Err(e) = check_status(url, status) {
            warn!(url, status = status.as_u16(), "Upstream request failed");
            return Err(e);
        }

        let body = response.text().await?;
        debug!(url, bytes = body.len(), "Fetched page");
        Ok(body)
    }
}
