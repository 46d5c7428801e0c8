//! Term matching over extracted page text
//!
//! Produces the `<before><match><after>` snippets recorded for each page.

/// Case-insensitive term search producing context snippets
///
/// Offsets and lengths are counted in characters, so multi-byte text is
/// never split inside a character.
#[derive(Debug, Clone)]
pub struct TermMatcher {
    term: Vec<char>,
    context_chars: usize,
}

impl TermMatcher {
    pub fn new(term: &str, context_chars: usize) -> Self {
        Self {
            term: term.chars().collect(),
            context_chars,
        }
    }

    /// Returns one snippet per occurrence of the term, in text order
    ///
    /// Each search resumes right after the end of the previous match, so a
    /// term that overlaps itself (`"aa"` in `"aaa"`) is counted once per
    /// non-overlapping occurrence. A snippet spans `context_chars` characters
    /// on each side of the match, clipped to the text.
    pub fn find_matches(&self, text: &str) -> Vec<String> {
        let mut snippets = Vec::new();
        if self.term.is_empty() {
            return snippets;
        }

        let chars: Vec<char> = text.chars().collect();
        let mut cursor = 0;

        while let Some(index) = self.find_next(&chars, cursor) {
            let start = index.saturating_sub(self.context_chars);
            let end = (index + self.term.len() + self.context_chars).min(chars.len());
            snippets.push(chars[start..end].iter().collect());
            cursor = index + self.term.len();
        }

        snippets
    }

    /// Finds the next occurrence of the term at or after `from`
    fn find_next(&self, chars: &[char], from: usize) -> Option<usize> {
        if chars.len() < self.term.len() {
            return None;
        }

        (from..=chars.len() - self.term.len()).find(|&start| {
            chars[start..start + self.term.len()]
                .iter()
                .zip(&self.term)
                .all(|(a, b)| chars_eq_ignore_case(*a, *b))
        })
    }
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Convenience wrapper around [`TermMatcher::find_matches`]
///
/// # Examples
///
/// ```
/// use term_ripple::search::find_matches;
///
/// assert_eq!(find_matches("X", "aXbXc", 1), vec!["aXb", "bXc"]);
/// ```
pub fn find_matches(term: &str, text: &str, context_chars: usize) -> Vec<String> {
    TermMatcher::new(term, context_chars).find_matches(text)
}
