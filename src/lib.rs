//! Structural Linting for Classical Poetic Forms
//!
//! Poems are plain text; each form (sonnet, haiku, limerick, ...) carries its
//! own structural rules over line counts, syllable patterns, and end-word
//! rhyme schemes.

pub mod domain;
pub use domain::{Config, Form, Tolerances, Validator, Verdict, Violation};

/// Heuristic text analysis: syllable estimation and rhyme comparison.
pub mod analysis;

/// Poem file parsing and collection discovery.
pub mod storage;
pub use storage::PoemDocument;

/// Validates a poem against a form using the default tolerances.
///
/// Returns [`Verdict::Valid`] or the first violated rule. The `topic` is only
/// consulted for acrostics, where the first letters of the lines must spell
/// it out.
#[must_use]
pub fn validate(text: &str, form: Form, topic: Option<&str>) -> Verdict {
    Validator::default().validate(text, form, topic)
}
