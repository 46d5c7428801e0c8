//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `CrawlState`: The results store shared by every branch of one crawl
//! - `PageRecord`: What is known about one claimed URL
//! - `PageState`: Where a claimed page is in its lifecycle

mod crawl_state;
mod page_state;

// Re-export main types
pub use crawl_state::{CrawlState, PageRecord};
pub use page_state::PageState;
