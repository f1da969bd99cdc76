use std::{fmt, ops::Deref};

use non_empty_string::NonEmptyString;

/// A single trimmed, non-blank line of a poem.
///
/// Lines are validated on construction: the wrapped string is never empty
/// and carries no leading or trailing whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line(NonEmptyString);

impl Line {
    /// Creates a line from raw text, trimming surrounding whitespace.
    ///
    /// Returns `None` if the text is empty after trimming.
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        NonEmptyString::new(trimmed.to_string()).ok().map(Self)
    }

    /// Returns the line as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The first character of the line.
    ///
    /// Lines are non-empty, so this always exists.
    ///
    /// # Panics
    ///
    /// Never panics; emptiness is unrepresentable for this type.
    #[must_use]
    pub fn first_char(&self) -> char {
        self.0
            .as_str()
            .chars()
            .next()
            .expect("a Line is never empty")
    }
}

impl AsRef<str> for Line {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Deref for Line {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A poem segmented into ordered, non-blank lines.
///
/// Blank lines (including stanza breaks) are dropped; the remaining lines
/// keep their top-to-bottom order from the raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Poem {
    lines: Vec<Line>,
}

impl Poem {
    /// Segments raw text into lines.
    ///
    /// Never fails: text with no content yields an empty poem, which the
    /// rule engine reports as a violation in its own right.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let lines = text.lines().filter_map(Line::new).collect();
        Self { lines }
    }

    /// The segmented lines, in original order.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of non-blank lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Whether the poem has no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Consumes the poem, returning its lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<Line> {
        self.lines
    }
}

impl From<&str> for Poem {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}
