// Colored terminal output for sentiment results.
//
// This module handles all terminal-specific formatting: colors, tables,
// pattern dumps. The main.rs display functions delegate here.

use colored::Colorize;

use crate::lexicon::matcher::LexiconMatcher;
use crate::scoring::sentiment::{Polarity, ScoredLine, SentimentResult};

/// Display the score for a single text.
pub fn display_result(text: &str, result: &SentimentResult) {
    println!("\n{}", "=== Sentiment ===".bold());
    println!();
    println!("  \"{}\"", super::truncate_chars(text, 120).dimmed());
    println!();
    println!(
        "  Positive matches: {}",
        result.positive_count.to_string().green()
    );
    println!(
        "  Negative matches: {}",
        result.negative_count.to_string().red()
    );
    println!(
        "  Sentiment: {}  ({})",
        result.sentiment.to_string().bold(),
        colorize_polarity(result.polarity())
    );
    println!();
}

/// Display a scored batch as a table, one row per input line.
pub fn display_batch(lines: &[ScoredLine]) {
    if lines.is_empty() {
        println!("No lines to score. The input file had no non-empty lines.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Sentiment Report ({} lines) ===", lines.len()).bold()
    );
    println!();

    // Header
    println!(
        "  {:>4}  {:<50} {:>4}  {:>4}  {:>5}  {}",
        "Line".dimmed(),
        "Text".dimmed(),
        "Pos".dimmed(),
        "Neg".dimmed(),
        "Score".dimmed(),
        "Polarity".dimmed(),
    );
    println!("  {}", "-".repeat(84).dimmed());

    for scored in lines {
        let preview = super::truncate_chars(&scored.text, 47);
        // Polarity goes last: colored strings carry invisible escape
        // codes that break width alignment for any column after them.
        println!(
            "  {:>4}  {:<50} {:>4}  {:>4}  {:>5}  {}",
            scored.line,
            preview,
            scored.result.positive_count,
            scored.result.negative_count,
            scored.result.sentiment,
            colorize_polarity(scored.result.polarity()),
        );
    }

    println!();

    // Summary
    let positive = lines
        .iter()
        .filter(|s| s.result.polarity() == Polarity::Positive)
        .count();
    let negative = lines
        .iter()
        .filter(|s| s.result.polarity() == Polarity::Negative)
        .count();
    let neutral = lines
        .iter()
        .filter(|s| s.result.polarity() == Polarity::Neutral)
        .count();
    let total: i64 = lines.iter().map(|s| s.result.sentiment).sum();

    if positive > 0 {
        println!("  {} {} positive lines", "+".green(), positive);
    }
    if negative > 0 {
        println!("  {} {} negative lines", "!".red(), negative);
    }
    if neutral > 0 {
        println!("  {} {} neutral lines", "~".dimmed(), neutral);
    }
    println!("  Net sentiment: {}", total.to_string().bold());
    println!();
}

/// Display a compiled lexicon pattern, wrapped to a fixed column.
pub fn display_pattern(label: &str, matcher: &LexiconMatcher, wrap: usize) {
    println!(
        "\n{}",
        format!(
            "=== {} pattern ({} entries) ===",
            label,
            matcher.entry_count()
        )
        .bold()
    );
    println!();
    for line in super::wrap_text(matcher.pattern(), wrap).lines() {
        println!("  {}", line.dimmed());
    }
    println!();
}

/// Colorize a polarity label.
fn colorize_polarity(polarity: Polarity) -> colored::ColoredString {
    match polarity {
        Polarity::Positive => polarity.as_str().green(),
        Polarity::Negative => polarity.as_str().red(),
        Polarity::Neutral => polarity.as_str().dimmed(),
    }
}
