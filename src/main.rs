use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use valence::config::Config;
use valence::lexicon::loader::Lexicon;
use valence::lexicon::matcher::LexiconMatcher;
use valence::scoring::sentiment::{ScoredLine, SentimentScorer};

/// Valence: lexicon-based sentiment scoring.
///
/// Counts whole-word matches from a positive and a negative word list
/// and reports the difference as a signed sentiment score.
#[derive(Parser)]
#[command(name = "valence", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single text
    Score {
        /// The text to score
        text: String,

        /// Print the result as JSON instead of the colored summary
        #[arg(long)]
        json: bool,
    },

    /// Score every non-empty line of a file
    Batch {
        /// The file to score, one text per line
        file: PathBuf,

        /// Print the results as a JSON array instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the compiled lexicon patterns
    Pattern {
        /// Which lexicon to show: positive, negative, or both
        #[arg(long, default_value = "both")]
        category: String,

        /// Wrap the pattern at this column (default: 70)
        #[arg(long, default_value = "70")]
        wrap: usize,
    },

    /// Show system status (lexicon paths, entry counts)
    Status,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("valence=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Score { text, json } => {
            let config = Config::load()?;
            let scorer = build_scorer(&config)?;

            let result = scorer.score(&text);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                valence::output::terminal::display_result(&text, &result);
            }
        }

        Commands::Batch { file, json } => {
            let config = Config::load()?;
            let scorer = build_scorer(&config)?;

            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read input file: {}", file.display()))?;

            // Line numbers refer to the file, so blank lines are skipped
            // after enumeration, not before.
            let scored: Vec<ScoredLine> = raw
                .lines()
                .enumerate()
                .filter(|(_, line)| !line.trim().is_empty())
                .map(|(idx, line)| ScoredLine {
                    line: idx + 1,
                    text: line.to_string(),
                    result: scorer.score(line),
                })
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&scored)?);
            } else {
                valence::output::terminal::display_batch(&scored);
            }
        }

        Commands::Pattern { category, wrap } => {
            let config = Config::load()?;
            config.require_lexicons()?;

            match category.as_str() {
                "positive" => {
                    let matcher = compile_lexicon("positive", &config.positive_lexicon)?;
                    valence::output::terminal::display_pattern("Positive", &matcher, wrap);
                }
                "negative" => {
                    let matcher = compile_lexicon("negative", &config.negative_lexicon)?;
                    valence::output::terminal::display_pattern("Negative", &matcher, wrap);
                }
                "both" => {
                    let positive = compile_lexicon("positive", &config.positive_lexicon)?;
                    let negative = compile_lexicon("negative", &config.negative_lexicon)?;
                    valence::output::terminal::display_pattern("Positive", &positive, wrap);
                    valence::output::terminal::display_pattern("Negative", &negative, wrap);
                }
                other => {
                    anyhow::bail!("Unknown category: {other}. Use positive, negative, or both.");
                }
            }
        }

        Commands::Status => {
            let config = Config::load()?;
            valence::status::show(&config)?;
        }
    }

    Ok(())
}

/// Load and compile both lexicons into a ready-to-use scorer.
fn build_scorer(config: &Config) -> Result<SentimentScorer> {
    config.require_lexicons()?;

    let positive = compile_lexicon("positive", &config.positive_lexicon)?;
    let negative = compile_lexicon("negative", &config.negative_lexicon)?;

    Ok(SentimentScorer::new(positive, negative))
}

/// Load one lexicon file and compile it, naming the lexicon on failure.
fn compile_lexicon(label: &str, path: &Path) -> Result<LexiconMatcher> {
    Lexicon::from_file(path)?.compile().with_context(|| {
        format!(
            "Failed to compile the {} lexicon from {}",
            label,
            path.display()
        )
    })
}
