use serde::Deserialize;

/// Default maximum link depth from the starting page
pub const DEFAULT_MAX_DEPTH: u32 = 10;

/// Default per-request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Default number of characters kept on each side of a match
pub const DEFAULT_CONTEXT_CHARS: usize = 10;

/// Main configuration structure for Term-Ripple
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub search: SearchConfig,
}

impl Config {
    /// Returns the URL relative links are resolved against
    ///
    /// This is the explicit `base-url` when configured, otherwise
    /// `http://{domain}`.
    pub fn base_url(&self) -> String {
        match &self.crawler.base_url {
            Some(base) => base.clone(),
            None => format!("http://{}", self.crawler.domain),
        }
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Hostname the crawl is confined to
    pub domain: String,

    /// Override for the base URL (defaults to `http://{domain}`)
    #[serde(rename = "base-url", default)]
    pub base_url: Option<String>,

    /// Maximum depth to crawl from the starting page
    #[serde(rename = "max-depth", default = "default_max_depth")]
    pub max_depth: u32,

    /// Per-request timeout (milliseconds)
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// User agent sent with every request
    #[serde(rename = "user-agent", default)]
    pub user_agent: Option<String>,
}

/// What to look for on each page
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// The term to search for (case-insensitive)
    pub term: String,

    /// Characters of context kept before and after each match
    #[serde(rename = "context-chars", default = "default_context_chars")]
    pub context_chars: usize,
}

fn default_max_depth() -> u32 {
    DEFAULT_MAX_DEPTH
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_context_chars() -> usize {
    DEFAULT_CONTEXT_CHARS
}
