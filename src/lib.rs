// Valence: lexicon-based sentiment scoring.
//
// This is the library root. Each module corresponds to one stage of the
// scoring pipeline: load word lists, compile them into whole-word
// matchers, score texts, display results.

pub mod config;
pub mod lexicon;
pub mod output;
pub mod scoring;
pub mod status;
