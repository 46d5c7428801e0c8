//! URL scoping for Term-Ripple
//!
//! Decides which discovered links stay inside the crawl's single hostname and
//! turns relative links into absolute URLs.

mod scope;

pub use scope::{is_eligible, to_absolute, Scope};
