/// Page state definitions for tracking crawl progress
///
/// Every claimed URL is in exactly one of these states.
use std::fmt;

/// Represents the current state of a page in the crawl process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageState {
    // ===== Active States =====
    /// URL has been claimed and its fetch is pending or in flight
    Claimed,

    // ===== Terminal Success States =====
    /// Page was fetched as HTML and searched
    Processed,

    /// Page Content-Type is not HTML; nothing extracted
    ContentMismatch,

    // ===== Terminal Error States =====
    /// Fetch failed (network error, timeout, non-2xx, unreadable body)
    Failed,
}

impl PageState {
    /// Short lowercase label used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Claimed => "claimed",
            Self::Processed => "processed",
            Self::ContentMismatch => "content_mismatch",
            Self::Failed => "failed",
        }
    }

    /// Returns all possible page states
    pub fn all_states() -> [Self; 4] {
        [
            Self::Claimed,
            Self::Processed,
            Self::ContentMismatch,
            Self::Failed,
        ]
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(PageState::ContentMismatch.to_string(), "content_mismatch");
        assert_eq!(PageState::all_states().len(), 4);
    }
}
