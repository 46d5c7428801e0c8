//! Term matching over extracted page text

mod matcher;

pub use matcher::{find_matches, TermMatcher};
