// System status display — shows lexicon paths, entry counts, wildcard usage.

use anyhow::Result;

use crate::config::Config;
use crate::lexicon::loader::Lexicon;
use crate::lexicon::matcher::WILDCARD;

/// Display system status to the terminal.
pub fn show(config: &Config) -> Result<()> {
    for (label, path, var) in [
        (
            "Positive lexicon",
            &config.positive_lexicon,
            "VALENCE_POSITIVE_LEXICON",
        ),
        (
            "Negative lexicon",
            &config.negative_lexicon,
            "VALENCE_NEGATIVE_LEXICON",
        ),
    ] {
        if !path.exists() {
            println!("{}: {} (missing)", label, path.display());
            println!("  Set {} to point at a word list", var);
            continue;
        }

        let lexicon = Lexicon::from_file(path)?;
        let wildcards = lexicon
            .entries()
            .iter()
            .filter(|entry| entry.contains(WILDCARD))
            .count();

        println!(
            "{}: {} ({} entries, {} with wildcards)",
            label,
            path.display(),
            lexicon.len(),
            wildcards
        );
        if lexicon.is_empty() {
            println!("  The file has no words. Scoring will fail until it does.");
        }
    }

    Ok(())
}
