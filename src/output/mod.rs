//! Output module for reporting crawl results
//!
//! Results stay in memory; this module turns the finished results store into
//! the console report.

mod report;

pub use report::{format_report, print_report, CrawlReport, PageMatches};
