// Wildcard lexicon compilation and whole-word match counting.
//
// An entry like "ador*" stands for "any word starting with ador". All
// entries of a lexicon fold into one alternation wrapped in word
// boundaries, compiled once, and reused for every text scored. Counting
// is then a single pass of the regex engine, with no tokenization or
// normalization of our own.

use anyhow::{Context, Result};
use regex::Regex;
use tracing::info;

/// The wildcard sentinel recognized in lexicon entries.
pub const WILDCARD: char = '*';

/// What the wildcard expands to: zero or more non-whitespace characters.
const WILDCARD_PATTERN: &str = r"[^\s]*";

/// A lexicon compiled into a single whole-word matching rule.
///
/// Immutable after construction: applying it to the same text always
/// yields the same matches, and one matcher can be shared freely across
/// threads and score calls.
#[derive(Debug, Clone)]
pub struct LexiconMatcher {
    regex: Regex,
    entry_count: usize,
}

impl LexiconMatcher {
    /// Compile lexicon entries into a whole-word matcher.
    ///
    /// Every `*` in an entry is replaced by a sub-pattern matching zero or
    /// more non-whitespace characters; the transformed entries are joined
    /// into one alternation bounded by `\b` on both sides, so an entry
    /// never matches inside a longer word.
    ///
    /// Entries are inserted verbatim apart from the wildcard: regex
    /// metacharacters in an entry keep their regex meaning. That input is
    /// accepted but unchecked; a fragment the engine rejects surfaces
    /// here as a compile error.
    ///
    /// Fails on an empty lexicon (and on an empty-string entry): either
    /// would produce an empty alternative that matches at every word
    /// boundary, which is never what a word list means.
    pub fn compile(entries: &[String]) -> Result<Self> {
        if entries.is_empty() {
            anyhow::bail!("Lexicon is empty: cannot build a matching pattern from no entries");
        }
        if let Some(idx) = entries.iter().position(|e| e.is_empty()) {
            anyhow::bail!(
                "Lexicon entry {} is an empty string: it would match at every word boundary",
                idx + 1
            );
        }

        let alternatives: Vec<String> = entries
            .iter()
            .map(|entry| entry.replace(WILDCARD, WILDCARD_PATTERN))
            .collect();
        let pattern = format!(r"\b(?:{})\b", alternatives.join("|"));

        let regex = Regex::new(&pattern).with_context(|| {
            format!(
                "Failed to compile lexicon pattern built from {} entries",
                entries.len()
            )
        })?;

        info!(
            entries = entries.len(),
            pattern_chars = pattern.chars().count(),
            "Compiled lexicon pattern"
        );

        Ok(Self {
            regex,
            entry_count: entries.len(),
        })
    }

    /// Count non-overlapping matches of the lexicon in a text.
    ///
    /// Scans left to right; overlapping candidates resolve by the engine's
    /// leftmost policy. Case-sensitive, consistent with how the entries
    /// were loaded. Pure: no state is touched, so repeated calls with the
    /// same text always return the same count.
    pub fn count(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }

    /// The full pattern string this matcher runs.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// How many lexicon entries went into the alternation.
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(entries: &[&str]) -> LexiconMatcher {
        let owned: Vec<String> = entries.iter().map(|e| e.to_string()).collect();
        LexiconMatcher::compile(&owned).unwrap()
    }

    #[test]
    fn test_empty_lexicon_fails() {
        let result = LexiconMatcher::compile(&[]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("empty"));
    }

    #[test]
    fn test_empty_entry_fails() {
        let entries = vec!["good".to_string(), String::new()];
        let result = LexiconMatcher::compile(&entries);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("entry 2"));
    }

    #[test]
    fn test_whole_word_only() {
        let matcher = compile(&["cat"]);
        assert_eq!(matcher.count("the cat sat"), 1);
        assert_eq!(matcher.count("the category sat"), 0);
        assert_eq!(matcher.count("bobcat"), 0);
    }

    #[test]
    fn test_wildcard_matches_word_prefix() {
        let matcher = compile(&["lov*"]);
        assert_eq!(matcher.count("love loving lovely"), 3);
        // Prefix must start at a word boundary
        assert_eq!(matcher.count("glove"), 0);
    }

    #[test]
    fn test_case_sensitive() {
        let matcher = compile(&["joy"]);
        assert_eq!(matcher.count("joy to all"), 1);
        assert_eq!(matcher.count("Joy to all"), 0);
    }

    #[test]
    fn test_wildcard_substitution_visible_in_pattern() {
        let matcher = compile(&["ador*", "happy"]);
        assert!(matcher.pattern().contains(r"ador[^\s]*"));
        assert!(matcher.pattern().starts_with(r"\b"));
        assert_eq!(matcher.entry_count(), 2);
    }

    #[test]
    fn test_multiple_wildcards_accepted() {
        // Not validated; each occurrence substitutes independently.
        let matcher = compile(&["un*happi*"]);
        assert_eq!(matcher.count("unhappiness"), 1);
        assert_eq!(matcher.count("happiness"), 0);
    }
}
