//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with a per-request timeout
//! - HTML parsing for visible text and link extraction
//! - Recursive, depth-bounded crawl orchestration

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::{run_crawl, Crawler};
pub use fetcher::{
    build_http_client, default_user_agent, fetch_url, is_html, FetchResult, HttpFetcher,
    PageFetcher, HTML_CONTENT_TYPE,
};
pub use parser::{extract_links, extract_text, parse_html, ParsedPage};
