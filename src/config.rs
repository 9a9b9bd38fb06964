use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Where the positive lexicon lives unless overridden.
pub const DEFAULT_POSITIVE_LEXICON: &str = "./assets/lexicons/posemo.txt";
/// Where the negative lexicon lives unless overridden.
pub const DEFAULT_NEGATIVE_LEXICON: &str = "./assets/lexicons/negemo.txt";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Both
/// lexicon paths have defaults pointing at the bundled word lists, so a
/// fresh checkout works without any configuration.
pub struct Config {
    /// Word list counted as positive matches (VALENCE_POSITIVE_LEXICON).
    pub positive_lexicon: PathBuf,
    /// Word list counted as negative matches (VALENCE_NEGATIVE_LEXICON).
    pub negative_lexicon: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Missing variables fall back to the bundled lexicons; nothing here
    /// fails. Path problems surface in `require_lexicons`, where the
    /// message can say which file is missing and how to fix it.
    pub fn load() -> Result<Self> {
        Ok(Self {
            positive_lexicon: env::var("VALENCE_POSITIVE_LEXICON")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_POSITIVE_LEXICON)),
            negative_lexicon: env::var("VALENCE_NEGATIVE_LEXICON")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_NEGATIVE_LEXICON)),
        })
    }

    /// Check that both lexicon files exist on disk.
    /// Call this before any operation that compiles the lexicons.
    pub fn require_lexicons(&self) -> Result<()> {
        for (label, path, var) in [
            (
                "positive",
                &self.positive_lexicon,
                "VALENCE_POSITIVE_LEXICON",
            ),
            (
                "negative",
                &self.negative_lexicon,
                "VALENCE_NEGATIVE_LEXICON",
            ),
        ] {
            if !path.exists() {
                anyhow::bail!(
                    "The {} lexicon was not found at {}\n\
                     Set {} in your .env file to point at a word list.\n\
                     See .env.example for the available variables.",
                    label,
                    path.display(),
                    var
                );
            }
        }
        Ok(())
    }
}
