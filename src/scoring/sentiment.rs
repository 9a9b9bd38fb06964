// Sentiment score formula.
//
// Two lexicons, one positive and one negative, are each counted
// independently against the text. Sentiment is the difference:
// positive matches minus negative matches. Zero means balanced, which
// covers both "no emotional words at all" and "equal pull both ways".
//
// The two counts are kept alongside the difference because the
// difference alone is lossy: 5-vs-4 and 1-vs-0 both score +1 but say
// very different things about a text.

use serde::{Deserialize, Serialize};

use crate::lexicon::matcher::LexiconMatcher;

/// The outcome of scoring one text against a positive and a negative lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Non-overlapping matches from the positive lexicon.
    pub positive_count: usize,
    /// Non-overlapping matches from the negative lexicon.
    pub negative_count: usize,
    /// `positive_count - negative_count`. Signed, so negative-leaning
    /// texts go below zero.
    pub sentiment: i64,
}

impl SentimentResult {
    /// Which way the score leans.
    pub fn polarity(&self) -> Polarity {
        Polarity::from_sentiment(self.sentiment)
    }
}

/// The sign of a sentiment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    pub fn from_sentiment(sentiment: i64) -> Self {
        match sentiment {
            s if s > 0 => Polarity::Positive,
            s if s < 0 => Polarity::Negative,
            _ => Polarity::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Polarity::Positive => "Positive",
            Polarity::Negative => "Negative",
            Polarity::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A pair of compiled lexicons ready to score any number of texts.
///
/// Both matchers are immutable, so a scorer built once can be applied
/// across a whole batch and every text sees exactly the same patterns.
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    positive: LexiconMatcher,
    negative: LexiconMatcher,
}

impl SentimentScorer {
    pub fn new(positive: LexiconMatcher, negative: LexiconMatcher) -> Self {
        Self { positive, negative }
    }

    /// Score a single text.
    ///
    /// The positive and negative counts are computed independently; a word
    /// listed in both lexicons contributes to both counts and cancels out
    /// of the difference.
    pub fn score(&self, text: &str) -> SentimentResult {
        let positive_count = self.positive.count(text);
        let negative_count = self.negative.count(text);

        SentimentResult {
            positive_count,
            negative_count,
            sentiment: positive_count as i64 - negative_count as i64,
        }
    }

    /// The compiled positive-lexicon matcher.
    pub fn positive(&self) -> &LexiconMatcher {
        &self.positive
    }

    /// The compiled negative-lexicon matcher.
    pub fn negative(&self) -> &LexiconMatcher {
        &self.negative
    }
}

/// One scored line of a batch run.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredLine {
    /// 1-based line number in the input file.
    pub line: usize,
    pub text: String,
    #[serde(flatten)]
    pub result: SentimentResult,
}
