//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building the HTTP client with the configured timeout and user agent
//! - Classifying responses as HTML or non-HTML
//! - Turning network errors, timeouts and non-2xx statuses into fetch failures

use crate::config::CrawlerConfig;
use crate::CrawlError;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::future::Future;
use std::time::Duration;

/// Media type prefix that marks a response as HTML
pub const HTML_CONTENT_TYPE: &str = "text/html";

/// Result of a successful fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    /// The page is HTML and its body was read
    Html {
        /// HTTP status code
        status_code: u16,
        /// Content-Type header value
        content_type: String,
        /// Page body content
        body: String,
    },

    /// Page is not HTML; the body was never read
    NotHtml {
        /// The actual Content-Type received (empty when the header is missing)
        content_type: String,
    },
}

impl FetchResult {
    /// Classifies a response from its Content-Type, reading the body only for HTML
    pub fn from_parts(status_code: u16, content_type: &str, body: impl FnOnce() -> String) -> Self {
        if is_html(content_type) {
            FetchResult::Html {
                status_code,
                content_type: content_type.to_string(),
                body: body(),
            }
        } else {
            FetchResult::NotHtml {
                content_type: content_type.to_string(),
            }
        }
    }
}

/// Returns true if a Content-Type value denotes HTML
pub fn is_html(content_type: &str) -> bool {
    content_type.starts_with(HTML_CONTENT_TYPE)
}

/// Anything that can retrieve a page for the crawler
///
/// Any `Err` is a fetch failure: the crawler logs it and abandons that URL.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<FetchResult, CrawlError>> + Send;
}

/// Builds an HTTP client with proper configuration
///
/// The timeout covers the whole request, body included.
///
/// # Example
///
/// ```no_run
/// use term_ripple::config::CrawlerConfig;
/// use term_ripple::crawler::build_http_client;
///
/// let config = CrawlerConfig {
///     domain: "example.com".to_string(),
///     base_url: None,
///     max_depth: 2,
///     timeout: 10_000,
///     user_agent: None,
/// };
///
/// let client = build_http_client(&config).unwrap();
/// ```
pub fn build_http_client(config: &CrawlerConfig) -> Result<Client, reqwest::Error> {
    let user_agent = config
        .user_agent
        .clone()
        .unwrap_or_else(default_user_agent);

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_millis(config.timeout))
        .gzip(true)
        .brotli(true)
        .build()
}

/// `term-ripple/<version>`
pub fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Fetches pages over HTTP with `reqwest`
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds the client from crawler configuration
    pub fn from_config(config: &CrawlerConfig) -> Result<Self, CrawlError> {
        Ok(Self::new(build_http_client(config)?))
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResult, CrawlError> {
        fetch_url(&self.client, url).await
    }
}

/// Fetches a URL and classifies the response
///
/// # Request Flow
///
/// | Condition | Result |
/// |-----------|--------|
/// | Network error / timeout | `Err(CrawlError::Http)` |
/// | Non-2xx status | `Err(CrawlError::HttpStatus)` |
/// | Content-Type not `text/html*` | `Ok(NotHtml)`, body not read |
/// | HTML body unreadable | `Err(CrawlError::Http)` |
/// | HTML | `Ok(Html)` |
///
/// No retries are made; a failure is final for that URL.
pub async fn fetch_url(client: &Client, url: &str) -> Result<FetchResult, CrawlError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| CrawlError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(CrawlError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if !is_html(&content_type) {
        return Ok(FetchResult::NotHtml { content_type });
    }

    let body = response.text().await.map_err(|source| CrawlError::Http {
        url: url.to_string(),
        source,
    })?;

    Ok(FetchResult::Html {
        status_code: status.as_u16(),
        content_type,
        body,
    })
}
