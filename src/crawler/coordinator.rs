//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the recursive crawl that coordinates:
//! - Depth limiting and URL claiming in the shared results store
//! - Fetching pages and gating on Content-Type
//! - Extracting text, recording term matches and discovering links
//! - Fanning out to child crawls and joining on them

use crate::config::Config;
use crate::crawler::fetcher::{FetchResult, HttpFetcher, PageFetcher};
use crate::crawler::parser::parse_html;
use crate::output::CrawlReport;
use crate::search::TermMatcher;
use crate::state::{CrawlState, PageState};
use crate::url::Scope;
use crate::CrawlError;
use futures::future::{join_all, FutureExt, LocalBoxFuture};

/// Main crawler structure
///
/// One `Crawler` drives one run: its results store starts empty and only
/// grows. Every recursive branch shares `&self`, and all branches run
/// interleaved on the task that awaits [`Crawler::run`].
pub struct Crawler<F> {
    config: Config,
    start_url: String,
    scope: Scope,
    matcher: TermMatcher,
    fetcher: F,
    state: CrawlState,
}

impl<F: PageFetcher> Crawler<F> {
    /// Creates a crawler for the given configuration and page source
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Ready to run
    /// * `Err(CrawlError)` - The base URL could not be parsed
    pub fn new(config: Config, fetcher: F) -> Result<Self, CrawlError> {
        let scope = Scope::new(&config.base_url(), &config.crawler.domain)?;
        // Serialized form (`http://host/`), so a `/` link back home shares the
        // start entry. A link spelled as bare `http://host` stays a separate
        // key, since absolute hrefs are claimed exactly as written.
        let start_url = scope.base_url().to_string();
        let matcher = TermMatcher::new(&config.search.term, config.search.context_chars);

        Ok(Self {
            config,
            start_url,
            scope,
            matcher,
            fetcher,
            state: CrawlState::new(),
        })
    }

    /// Crawls from the base URL at depth 0 and waits for every branch
    pub async fn run(&self) {
        tracing::info!(
            "Crawling {} for '{}' (max depth {})",
            self.start_url,
            self.config.search.term,
            self.config.crawler.max_depth
        );

        self.crawl(self.start_url.clone(), 0).await;

        tracing::info!("Crawl finished: {} pages claimed", self.state.len());
    }

    /// Crawls `url` and, recursively, every in-scope link it leads to
    ///
    /// Completes immediately when `depth` exceeds the configured maximum or
    /// the URL has already been claimed. Otherwise the URL is claimed before
    /// any I/O, fetched, searched, and its eligible links are crawled
    /// concurrently at `depth + 1`. The returned future resolves once all of
    /// those child crawls have finished.
    ///
    /// Fetch failures end this branch only; they are logged and never
    /// reach the caller.
    pub fn crawl(&self, url: String, depth: u32) -> LocalBoxFuture<'_, ()> {
        async move {
            if depth > self.config.crawler.max_depth {
                tracing::trace!("Depth {} exceeds limit, skipping {}", depth, url);
                return;
            }

            let url = match self.scope.to_absolute(&url) {
                Ok(absolute) => absolute,
                Err(e) => {
                    tracing::debug!("Skipping unresolvable URL {}: {}", url, e);
                    return;
                }
            };

            // No await between the check and the reservation
            if !self.state.claim(&url, depth) {
                tracing::trace!("Already claimed: {}", url);
                return;
            }

            let body = match self.fetcher.fetch(&url).await {
                Ok(FetchResult::Html {
                    status_code, body, ..
                }) => {
                    tracing::trace!("HTTP {} for {}", status_code, url);
                    body
                }
                Ok(FetchResult::NotHtml { content_type }) => {
                    tracing::debug!("Not HTML ({}), skipping {}", content_type, url);
                    self.state.set_state(&url, PageState::ContentMismatch);
                    return;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "could not fetch {}", url);
                    self.state.set_state(&url, PageState::Failed);
                    return;
                }
            };

            tracing::info!("{} {}", depth, url);

            let parsed = parse_html(&body);
            self.state
                .add_matches(&url, self.matcher.find_matches(&parsed.text));
            self.state.set_state(&url, PageState::Processed);

            let children: Vec<_> = parsed
                .links
                .into_iter()
                .filter(|href| self.scope.is_eligible(Some(href.as_str())))
                .map(|href| self.crawl(href, depth + 1))
                .collect();

            tracing::debug!("{} eligible links on {}", children.len(), url);
            join_all(children).await;
        }
        .boxed_local()
    }

    /// The shared results store
    pub fn state(&self) -> &CrawlState {
        &self.state
    }

}

/// Runs a complete crawl over HTTP and builds its report
///
/// # Example
///
/// ```no_run
/// use term_ripple::config::load_config;
/// use term_ripple::crawler::run_crawl;
/// use term_ripple::output::print_report;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("config.toml"))?;
/// let report = run_crawl(config).await?;
/// print_report(&report);
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: Config) -> Result<CrawlReport, CrawlError> {
    let fetcher = HttpFetcher::from_config(&config.crawler)?;
    let crawler = Crawler::new(config, fetcher)?;
    crawler.run().await;
    Ok(CrawlReport::from_state(crawler.state()))
}
