// Unit tests for sentiment scoring and output helpers.
//
// Tests the score arithmetic, polarity boundaries, the JSON shapes the
// CLI emits, and truncate_chars UTF-8 safety.

use valence::lexicon::loader::Lexicon;
use valence::output::{truncate_chars, wrap_text};
use valence::scoring::sentiment::{Polarity, ScoredLine, SentimentResult, SentimentScorer};

fn scorer(positive: &[&str], negative: &[&str]) -> SentimentScorer {
    let positive = Lexicon::from_entries(positive.iter().copied())
        .compile()
        .unwrap();
    let negative = Lexicon::from_entries(negative.iter().copied())
        .compile()
        .unwrap();
    SentimentScorer::new(positive, negative)
}

// ============================================================
// Score arithmetic
// ============================================================

#[test]
fn sentiment_is_the_count_difference() {
    let s = scorer(&["good", "great"], &["bad", "awful"]);
    let cases = [
        ("good great good", 3, 0, 3),
        ("bad awful", 0, 2, -2),
        ("good bad", 1, 1, 0),
        ("nothing emotional here", 0, 0, 0),
    ];
    for (text, pos, neg, sentiment) in cases {
        let result = s.score(text);
        assert_eq!(result.positive_count, pos, "positive count for {text:?}");
        assert_eq!(result.negative_count, neg, "negative count for {text:?}");
        assert_eq!(result.sentiment, sentiment, "sentiment for {text:?}");
    }
}

#[test]
fn counts_never_go_negative() {
    let s = scorer(&["good"], &["bad"]);
    let result = s.score("bad bad bad bad");
    assert_eq!(result.positive_count, 0);
    assert_eq!(result.negative_count, 4);
    assert_eq!(result.sentiment, -4);
}

#[test]
fn word_in_both_lexicons_cancels_out() {
    // "bittersweet" listed on both sides contributes to both counts.
    let s = scorer(&["sweet", "bittersweet"], &["bitter", "bittersweet"]);
    let result = s.score("a bittersweet ending");
    assert_eq!(result.positive_count, 1);
    assert_eq!(result.negative_count, 1);
    assert_eq!(result.sentiment, 0);
}

#[test]
fn scoring_is_repeatable() {
    let s = scorer(&["wonderf*"], &["terribl*"]);
    let text = "a wonderful thing and a terrible thing";
    assert_eq!(s.score(text), s.score(text));
}

// ============================================================
// Polarity boundaries
// ============================================================

#[test]
fn polarity_positive_above_zero() {
    assert_eq!(Polarity::from_sentiment(1), Polarity::Positive);
    assert_eq!(Polarity::from_sentiment(100), Polarity::Positive);
}

#[test]
fn polarity_negative_below_zero() {
    assert_eq!(Polarity::from_sentiment(-1), Polarity::Negative);
    assert_eq!(Polarity::from_sentiment(-100), Polarity::Negative);
}

#[test]
fn polarity_neutral_at_zero() {
    assert_eq!(Polarity::from_sentiment(0), Polarity::Neutral);
}

#[test]
fn polarity_display_matches_as_str() {
    for polarity in [Polarity::Positive, Polarity::Negative, Polarity::Neutral] {
        assert_eq!(polarity.to_string(), polarity.as_str());
    }
}

#[test]
fn result_polarity_follows_the_sign() {
    let s = scorer(&["up"], &["down"]);
    assert_eq!(s.score("up up").polarity(), Polarity::Positive);
    assert_eq!(s.score("down").polarity(), Polarity::Negative);
    assert_eq!(s.score("sideways").polarity(), Polarity::Neutral);
}

// ============================================================
// JSON shapes
// ============================================================

#[test]
fn result_serializes_with_stable_field_names() {
    let result = SentimentResult {
        positive_count: 2,
        negative_count: 5,
        sentiment: -3,
    };
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["positive_count"], 2);
    assert_eq!(json["negative_count"], 5);
    assert_eq!(json["sentiment"], -3);
}

#[test]
fn result_round_trips_through_json() {
    let result = SentimentResult {
        positive_count: 1,
        negative_count: 0,
        sentiment: 1,
    };
    let json = serde_json::to_string(&result).unwrap();
    let back: SentimentResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}

#[test]
fn scored_line_flattens_the_result() {
    let scored = ScoredLine {
        line: 7,
        text: "so good".to_string(),
        result: SentimentResult {
            positive_count: 1,
            negative_count: 0,
            sentiment: 1,
        },
    };
    let json = serde_json::to_value(&scored).unwrap();
    // Counts sit at the top level next to line and text, not nested.
    assert_eq!(json["line"], 7);
    assert_eq!(json["text"], "so good");
    assert_eq!(json["sentiment"], 1);
    assert!(json.get("result").is_none());
}

// ============================================================
// truncate_chars — UTF-8 safe truncation
// ============================================================

#[test]
fn truncate_within_limit() {
    assert_eq!(truncate_chars("hello", 10), "hello");
}

#[test]
fn truncate_one_over_limit() {
    assert_eq!(truncate_chars("hello!", 5), "hello...");
}

#[test]
fn truncate_emoji_safe() {
    let text = "Hello 🌍!";
    assert_eq!(text.chars().count(), 8);
    assert_eq!(truncate_chars(text, 7), "Hello 🌍...");
}

#[test]
fn truncate_accented_chars() {
    assert_eq!(truncate_chars("café résumé", 4), "café...");
}

// ============================================================
// wrap_text — fixed-column wrapping for pattern display
// ============================================================

#[test]
fn wrap_lines_never_exceed_the_width() {
    let pattern = r"\b(?:good|great|gr[^\s]*and|fine|splendid)\b";
    let wrapped = wrap_text(pattern, 10);
    for line in wrapped.lines() {
        assert!(line.chars().count() <= 10, "line too long: {line:?}");
    }
}

#[test]
fn wrap_preserves_every_character_in_order() {
    let pattern = r"\b(?:ador[^\s]*|love)\b";
    let wrapped = wrap_text(pattern, 7);
    assert_eq!(wrapped.replace('\n', ""), pattern);
}
