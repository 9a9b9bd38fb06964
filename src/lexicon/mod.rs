// Lexicon handling — loading word lists and compiling them into matchers.

pub mod loader;
pub mod matcher;
