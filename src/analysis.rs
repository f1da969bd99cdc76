//! Heuristic text analysis over poem lines.
//!
//! Both analyses are orthographic approximations, not dictionary or phonetic
//! lookups: syllable counts are expected to be off by about one per line,
//! and rhyme judgement is a loose suffix match. The rule engine compensates
//! with tolerance bands rather than demanding exact counts.

/// Syllable estimation for words and lines.
pub mod syllable;
pub use syllable::{line_syllables, word_syllables};

/// End-word extraction and rhyme comparison.
pub mod rhyme;
pub use rhyme::{end_word, sounds_alike};
