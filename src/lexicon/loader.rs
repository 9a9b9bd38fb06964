// Lexicon loading — word lists from disk or memory.
//
// A lexicon file is whitespace-delimited: words separated by spaces,
// tabs, or newlines, in any mix. Entries may carry `*` wildcards that
// the matcher later expands. Words are kept exactly as written; nothing
// is lowercased, deduplicated, or trimmed beyond the whitespace split
// itself.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::lexicon::matcher::LexiconMatcher;

/// An ordered list of lexicon entries, as read from a word list.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: Vec<String>,
}

impl Lexicon {
    /// Load a lexicon from a whitespace-delimited word list file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon file: {}", path.display()))?;

        let entries: Vec<String> = raw.split_whitespace().map(str::to_string).collect();

        info!(
            path = %path.display(),
            entries = entries.len(),
            "Loaded lexicon"
        );

        Ok(Self { entries })
    }

    /// Build a lexicon from entries already in memory.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Compile the entries into a reusable matcher.
    ///
    /// Fails if the lexicon is empty: an empty word list cannot express
    /// a matching rule, and silently matching nothing would hide a bad
    /// path or a truncated file.
    pub fn compile(&self) -> Result<LexiconMatcher> {
        LexiconMatcher::compile(&self.entries)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
