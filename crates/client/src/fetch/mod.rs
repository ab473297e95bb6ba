//! HTTP fetch collaborator.
//!
//! ### Behavior
//! - One GET per call, no retries.
//! - Max redirects: 5
//! - Max body bytes: 5MB (configurable)
//! - Non-2xx statuses come back as a normal [`FetchResponse`]; callers decide what
//!   a status means for them.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, StatusCode, Url, header};
use std::time::{Duration, Instant};

use wxscrape_core::{AppConfig, Error};

/// Configuration for the fetch client.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// User agent string (default: "wxscrape/0.1")
    pub user_agent: String,

    /// Maximum response body size in bytes (default: 5MB)
    pub max_bytes: usize,

    /// Request timeout (default: 20s)
    pub timeout: Duration,

    /// Maximum number of redirects to follow (default: 5)
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "wxscrape/0.1".to_string(),
            max_bytes: 5 * 1024 * 1024,
            timeout: Duration::from_millis(20000),
            max_redirects: 5,
        }
    }
}

impl From<&AppConfig> for FetchConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            max_bytes: config.max_bytes,
            timeout: config.timeout(),
            ..Self::default()
        }
    }
}

/// Response from a fetch operation.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// The URL requested
    pub url: Url,
    /// The final URL after redirects
    pub final_url: Url,
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub bytes: Bytes,
    /// Time taken to fetch in milliseconds
    pub fetch_ms: u64,
}

impl FetchResponse {
    /// `Err(HttpError)` unless the status is 2xx.
    pub fn require_success(&self) -> Result<(), Error> {
        if self.status.is_success() {
            Ok(())
        } else {
            Err(Error::HttpError(format!("status {} from {}", self.status.as_u16(), self.final_url)))
        }
    }
}

/// Something that can GET a page.
///
/// [`FetchClient`] is the network implementation; tests substitute canned pages.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<FetchResponse, Error>;
}

/// HTTP fetch client backed by reqwest.
pub struct FetchClient {
    http: Client,
    config: FetchConfig,
}

impl FetchClient {
    /// Create a new fetch client with the given configuration.
    pub fn new(config: FetchConfig) -> Result<Self, Error> {
        let http = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(|e| Error::HttpError(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    fn too_large(&self, len: u64) -> Error {
        Error::FetchTooLarge(format!("{} bytes exceeds {}", len, self.config.max_bytes))
    }
}

fn request_error(url: &Url, e: &reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::FetchTimeout(format!("{url}: {e}"))
    } else {
        Error::HttpError(format!("network error: {e}"))
    }
}

#[async_trait]
impl Fetcher for FetchClient {
    async fn fetch(&self, url: &Url) -> Result<FetchResponse, Error> {
        let start = Instant::now();

        let response = self
            .http
            .get(url.clone())
            .header(header::ACCEPT, "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8")
            .send()
            .await
            .map_err(|e| request_error(url, &e))?;

        if let Some(len) = response.content_length()
            && len > self.config.max_bytes as u64
        {
            return Err(self.too_large(len));
        }

        let status = response.status();
        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let bytes = response.bytes().await.map_err(|e| request_error(url, &e))?;
        if bytes.len() > self.config.max_bytes {
            return Err(self.too_large(bytes.len() as u64));
        }

        let fetch_ms = start.elapsed().as_millis() as u64;
        tracing::debug!("fetched {} -> {} ({}) in {}ms ({} bytes)", url, final_url, status, fetch_ms, bytes.len());

        Ok(FetchResponse { url: url.clone(), final_url, status, content_type, bytes, fetch_ms })
    }
}
