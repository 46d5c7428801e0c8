//! Results store shared by every branch of one crawl
//!
//! Claiming a URL and recording its outcome both go through one mutex, so
//! a URL is claimed at most once however many pages link to it.

use crate::state::PageState;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Everything recorded about one claimed URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    /// Absolute URL, the key of the results store
    pub url: String,

    /// Depth at which the URL was claimed
    pub depth: u32,

    /// Where the page is in its lifecycle
    pub state: PageState,

    /// Match snippets in occurrence order
    pub matches: Vec<String>,
}

#[derive(Debug, Default)]
struct Inner {
    index: HashMap<String, usize>,
    pages: Vec<PageRecord>,
}

impl Inner {
    fn page_mut(&mut self, url: &str) -> Option<&mut PageRecord> {
        let slot = *self.index.get(url)?;
        self.pages.get_mut(slot)
    }
}

/// Results store for one crawl run, keyed by absolute URL
///
/// Entries are only ever added. A URL gets its (empty) entry the moment it
/// is claimed, before any I/O for it starts, and keeps it for the rest of the
/// run. Entries remember claim order for reporting.
#[derive(Debug, Default)]
pub struct CrawlState {
    inner: Mutex<Inner>,
}

impl CrawlState {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Every mutation leaves the map consistent, so a poisoned lock is still usable
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Atomically checks whether `url` is unclaimed and, if so, reserves it
    ///
    /// Returns `true` for the single caller that wins the claim. Every later
    /// call for the same URL returns `false`, whatever depth it comes from.
    pub fn claim(&self, url: &str, depth: u32) -> bool {
        let mut inner = self.lock();
        if inner.index.contains_key(url) {
            return false;
        }

        let slot = inner.pages.len();
        inner.pages.push(PageRecord {
            url: url.to_string(),
            depth,
            state: PageState::Claimed,
            matches: Vec::new(),
        });
        inner.index.insert(url.to_string(), slot);
        true
    }

    /// Returns true if `url` has been claimed
    pub fn contains(&self, url: &str) -> bool {
        self.lock().index.contains_key(url)
    }

    /// Appends match snippets to a claimed URL's entry
    ///
    /// Unclaimed URLs are ignored.
    pub fn add_matches(&self, url: &str, matches: Vec<String>) {
        if let Some(page) = self.lock().page_mut(url) {
            page.matches.extend(matches);
        }
    }

    /// Moves a claimed URL to a new state
    pub fn set_state(&self, url: &str, state: PageState) {
        if let Some(page) = self.lock().page_mut(url) {
            page.state = state;
        }
    }

    /// Returns a copy of the entry for `url`
    pub fn get(&self, url: &str) -> Option<PageRecord> {
        let inner = self.lock();
        let slot = *inner.index.get(url)?;
        inner.pages.get(slot).cloned()
    }

    /// Returns the match snippets recorded for `url`
    pub fn matches(&self, url: &str) -> Option<Vec<String>> {
        self.get(url).map(|page| page.matches)
    }

    /// Number of distinct URLs claimed
    pub fn len(&self) -> usize {
        self.lock().pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Claimed URLs in claim order
    pub fn urls(&self) -> Vec<String> {
        self.lock().pages.iter().map(|p| p.url.clone()).collect()
    }

    /// Copies every entry out, in claim order
    pub fn snapshot(&self) -> Vec<PageRecord> {
        self.lock().pages.clone()
    }
}
