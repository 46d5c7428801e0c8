//! Final report generation from the results store

use crate::state::{CrawlState, PageState};
use std::collections::HashMap;
use std::fmt::Write;

/// Matches recorded for one URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMatches {
    pub url: String,
    pub matches: Vec<String>,
}

/// Summary of a finished crawl
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// Number of distinct URLs claimed
    pub pages_crawled: u64,

    /// Count of pages by state
    pub pages_by_state: HashMap<PageState, u64>,

    /// Total number of snippets across all pages
    pub total_matches: u64,

    /// Pages with at least one match, in claim order
    pub pages_with_matches: Vec<PageMatches>,
}

impl CrawlReport {
    /// Builds a report from the results store
    ///
    /// Only meaningful once the crawl has completed.
    pub fn from_state(state: &CrawlState) -> Self {
        let pages = state.snapshot();

        let mut pages_by_state = HashMap::new();
        let mut total_matches = 0;
        let mut pages_with_matches = Vec::new();

        for page in pages.iter() {
            *pages_by_state.entry(page.state).or_insert(0) += 1;
            total_matches += page.matches.len() as u64;

            if !page.matches.is_empty() {
                pages_with_matches.push(PageMatches {
                    url: page.url.clone(),
                    matches: page.matches.clone(),
                });
            }
        }

        Self {
            pages_crawled: pages.len() as u64,
            pages_by_state,
            total_matches,
            pages_with_matches,
        }
    }
}

/// Renders the report as console text
///
/// The first lines are `pages crawled = N` and one
/// `url: <url>, matches: <a, b, ...>` line per page with matches, followed by
/// a per-state breakdown.
pub fn format_report(report: &CrawlReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\n\npages crawled = {}", report.pages_crawled);

    for page in &report.pages_with_matches {
        let _ = writeln!(
            out,
            "url: {}, matches: {}",
            page.url,
            page.matches.join(", ")
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Pages by State:");
    for state in PageState::all_states() {
        if let Some(count) = report.pages_by_state.get(&state) {
            let _ = writeln!(out, "  {}: {}", state, count);
        }
    }
    let _ = writeln!(
        out,
        "Total matches: {} across {} pages",
        report.total_matches,
        report.pages_with_matches.len()
    );

    out
}

/// Prints the report to stdout
pub fn print_report(report: &CrawlReport) {
    print!("{}", format_report(report));
}
