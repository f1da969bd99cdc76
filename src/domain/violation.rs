use std::fmt;

use super::Form;

/// The outcome of validating a poem against a form.
///
/// Validation never fails with an error: every outcome, including malformed
/// input, is represented here as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The poem satisfies every rule of its form.
    Valid,
    /// The first rule the poem violates, in the form's fixed check order.
    Invalid(Violation),
}

impl Verdict {
    /// Whether the poem passed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The violation, if any.
    #[must_use]
    pub const fn violation(&self) -> Option<&Violation> {
        match self {
            Self::Valid => None,
            Self::Invalid(violation) => Some(violation),
        }
    }

    /// The user-facing message for the violation, if any.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.violation().map(ToString::to_string)
    }
}

impl From<Option<Violation>> for Verdict {
    fn from(violation: Option<Violation>) -> Self {
        violation.map_or(Self::Valid, Self::Invalid)
    }
}

/// A line position within a haiku.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaikuLine {
    /// The opening five-syllable line.
    First,
    /// The middle seven-syllable line.
    Second,
    /// The closing five-syllable line.
    Third,
}

impl fmt::Display for HaikuLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::First => "First",
            Self::Second => "Second",
            Self::Third => "Third",
        })
    }
}

/// A single violated structural rule.
///
/// The `Display` output is the message shown to the poet, so every variant
/// renders to plain prose rather than an error code.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum Violation {
    /// The text contained no non-blank lines.
    #[error("Poem cannot be empty")]
    Empty,

    /// The form requires an exact number of lines.
    #[error("A {form} must have exactly {expected} lines. Current: {actual} lines")]
    LineCount {
        /// The form whose line count was violated.
        form: Form,
        /// The required number of lines.
        expected: usize,
        /// The number of lines found.
        actual: usize,
    },

    /// Neither accepted sonnet rhyme scheme matched the end words.
    #[error(
        "A sonnet must follow either Shakespearean (ABAB CDCD EFEF GG) or Petrarchan (ABBA \
         ABBA...) rhyme scheme"
    )]
    SonnetScheme,

    /// A haiku line fell outside the tolerance band around its target.
    #[error("{line} line should have ~{target} syllables. Current: {actual} syllables")]
    HaikuSyllables {
        /// Which of the three lines missed its target.
        line: HaikuLine,
        /// The target syllable count for that line.
        target: usize,
        /// The estimated syllable count.
        actual: usize,
    },

    /// The limerick's end words do not follow AABBA.
    #[error("A limerick should follow AABBA rhyme scheme")]
    LimerickScheme,

    /// The first letters of the lines do not spell the topic.
    #[error("An acrostic poem's first letters must spell \"{expected}\". Current: \"{actual}\"")]
    AcrosticSpelling {
        /// The topic the poem was written about, as submitted.
        expected: String,
        /// The letters actually derived from the lines, upper-cased.
        actual: String,
    },

    /// The ballad has fewer lines than two quatrains.
    #[error("A ballad must have at least 8 lines (2 stanzas). Current: {actual} lines")]
    BalladTooShort {
        /// The number of lines found.
        actual: usize,
    },

    /// The ballad's line count does not divide into quatrains.
    #[error("A ballad's lines should be in groups of 4. Current: {actual} lines")]
    BalladStanzas {
        /// The number of lines found.
        actual: usize,
    },
}
