use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A classical poetic form.
///
/// The set is closed: every form the validator knows about is a variant, so
/// rule dispatch is exhaustive and an unrecognised form can only occur at a
/// parse boundary (CLI argument or document frontmatter), never inside the
/// rule engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Form {
    /// Fourteen lines, Shakespearean or Petrarchan rhyme scheme.
    Sonnet,
    /// Three lines of five, seven, and five syllables.
    Haiku,
    /// Five lines, AABBA rhyme scheme.
    Limerick,
    /// Nineteen lines with repeating refrains.
    Villanelle,
    /// A lyrical poem of praise; no enforced structure.
    Ode,
    /// Narrative quatrains; at least two stanzas of four lines.
    Ballad,
    /// An extended narrative poem; no enforced structure.
    Epic,
    /// First letters of the lines spell out the topic.
    Acrostic,
    /// No enforced structure.
    FreeVerse,
}

impl Form {
    /// Every known form, in catalog order.
    pub const ALL: [Self; 9] = [
        Self::Sonnet,
        Self::Haiku,
        Self::Limerick,
        Self::Villanelle,
        Self::Ode,
        Self::Ballad,
        Self::Epic,
        Self::Acrostic,
        Self::FreeVerse,
    ];

    /// The lowercase identifier used in CLI arguments, frontmatter, and
    /// violation messages.
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Sonnet => "sonnet",
            Self::Haiku => "haiku",
            Self::Limerick => "limerick",
            Self::Villanelle => "villanelle",
            Self::Ode => "ode",
            Self::Ballad => "ballad",
            Self::Epic => "epic",
            Self::Acrostic => "acrostic",
            Self::FreeVerse => "free-verse",
        }
    }

    /// Catalog metadata for this form.
    #[must_use]
    pub const fn info(self) -> &'static FormInfo {
        match self {
            Self::Sonnet => &SONNET,
            Self::Haiku => &HAIKU,
            Self::Limerick => &LIMERICK,
            Self::Villanelle => &VILLANELLE,
            Self::Ode => &ODE,
            Self::Ballad => &BALLAD,
            Self::Epic => &EPIC,
            Self::Acrostic => &ACROSTIC,
            Self::FreeVerse => &FREE_VERSE,
        }
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Error returned when a string is not a known form identifier.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error(
    "Unknown poem form '{0}'. Known forms: sonnet, haiku, limerick, villanelle, ode, ballad, \
     epic, acrostic, free-verse"
)]
pub struct UnknownFormError(String);

impl FromStr for Form {
    type Err = UnknownFormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|form| form.identifier() == s)
            .ok_or_else(|| UnknownFormError(s.to_string()))
    }
}

impl TryFrom<&str> for Form {
    type Error = UnknownFormError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_str(value)
    }
}

/// Descriptive metadata for a poetic form.
///
/// Display copy for the form catalog; the rule engine does not consult it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormInfo {
    /// Human-readable name, e.g. "Sonnet".
    pub name: &'static str,
    /// One-line summary of the expected line shape.
    pub lines: &'static str,
    /// Description of the structural rules.
    pub structure: &'static str,
    /// A short blurb about the form.
    pub description: &'static str,
    /// A canonical example or excerpt.
    pub example: &'static str,
}

const SONNET: FormInfo = FormInfo {
    name: "Sonnet",
    lines: "14 lines",
    structure: "Shakespearean: ABAB CDCD EFEF GG or Petrarchan: ABBA ABBA CDE CDE",
    description: "A classic poetic form usually exploring themes of love, beauty, or \
                  reflection. The sonnet has endured for centuries as one of poetry's most \
                  elegant structures.",
    example: "\"Shall I compare thee to a summer's day?\nThou art more lovely and more \
              temperate...\"",
};

const HAIKU: FormInfo = FormInfo {
    name: "Haiku",
    lines: "3 lines (5-7-5 syllables)",
    structure: "First line: 5 syllables, Second line: 7 syllables, Third line: 5 syllables",
    description: "A Japanese form capturing a single moment in time, often centered on nature, \
                  seasons, or a fleeting observation with profound simplicity.",
    example: "\"An old silent pond...\nA frog jumps into the pond—\nSplash! Silence again.\"",
};

const LIMERICK: FormInfo = FormInfo {
    name: "Limerick",
    lines: "5 lines",
    structure: "AABBA rhyme scheme with a distinctive bouncing meter",
    description: "A humorous and often nonsensical verse form known for its bouncy rhythm and \
                  witty wordplay. Perfect for lighthearted entertainment.",
    example: "\"There once was a man from Nantucket...\nWho kept all his cash in a bucket...\"",
};

const VILLANELLE: FormInfo = FormInfo {
    name: "Villanelle",
    lines: "19 lines",
    structure: "Two rhymes with repeating lines (A1bA2 abA1 abA2 abA1 abA2 abA1A2)",
    description: "A complex form featuring repeating lines that create a haunting, musical \
                  quality. The repetition builds emotional intensity throughout the poem.",
    example: "\"Do not go gentle into that good night,\nOld age should burn and rave at close \
              of day...\"",
};

const ODE: FormInfo = FormInfo {
    name: "Ode",
    lines: "Variable length",
    structure: "Formal structure with stanzas, often using elevated diction and imagery",
    description: "A lyrical poem of praise and celebration, often addressing its subject with \
                  elevated language and deep admiration. Odes honor people, places, things, or \
                  ideas.",
    example: "\"Ode to a Nightingale\" or \"Ode on a Grecian Urn\"",
};

const BALLAD: FormInfo = FormInfo {
    name: "Ballad",
    lines: "Variable length (usually quatrains)",
    structure: "Usually quatrains with ABCB or ABAB rhyme scheme and strong rhythm",
    description: "A narrative poem telling a story, often dramatic or romantic, passed down \
                  through oral tradition. Ballads combine storytelling with musical rhythm.",
    example: "\"The Rime of the Ancient Mariner\" - a tale of a sailor's curse",
};

const EPIC: FormInfo = FormInfo {
    name: "Epic",
    lines: "Extensive length",
    structure: "Extended narrative with elevated style, often featuring a hero's journey",
    description: "A grand, sweeping narrative poem chronicling the adventures of a hero on an \
                  extraordinary journey. Epics explore themes of courage, fate, and the human \
                  condition.",
    example: "\"The Odyssey\" by Homer - Odysseus's ten-year journey home",
};

const ACROSTIC: FormInfo = FormInfo {
    name: "Acrostic",
    lines: "One line per letter of the topic",
    structure: "The first letters of the lines, read top to bottom, spell out the topic",
    description: "A playful form where the poem hides its subject in plain sight: reading the \
                  first letter of each line reveals the topic word.",
    example: "\"Curled up in sunlight\nAlways landing on her feet\nTail flicking softly\"",
};

const FREE_VERSE: FormInfo = FormInfo {
    name: "Free Verse",
    lines: "Variable length",
    structure: "No fixed meter, rhyme scheme, or line count",
    description: "Poetry unbound from formal constraints, relying on imagery, cadence, and \
                  line breaks rather than prescribed structure.",
    example: "\"Song of Myself\" by Walt Whitman",
};
