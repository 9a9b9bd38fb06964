// Sentiment scoring — paired lexicon counts folded into a signed score.

pub mod sentiment;
