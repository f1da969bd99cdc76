use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Form;

/// Tuning knobs for the heuristic text analysis.
///
/// The defaults reproduce the historical validator behaviour; loosening or
/// tightening them changes which poems are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tolerances {
    /// Slack applied when comparing estimated syllable counts to a form's
    /// target. The estimator is routinely off by one syllable per line, so
    /// the default band is ±1.
    pub syllable_slack: usize,

    /// Number of trailing characters compared when judging whether two end
    /// words rhyme. Capped by the shorter word's length.
    pub rhyme_window: usize,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            syllable_slack: default_syllable_slack(),
            rhyme_window: default_rhyme_window(),
        }
    }
}

/// Configuration for a poem collection.
///
/// Stored as a versioned TOML document, typically `.verse.toml` at the
/// collection root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The form assumed for poems that do not declare one themselves.
    default_form: Option<Form>,

    /// Heuristic tuning knobs.
    tolerances: Tolerances,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_form: None,
            tolerances: Tolerances::default(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or
    /// if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// The form assumed when a poem does not declare one.
    #[must_use]
    pub const fn default_form(&self) -> Option<Form> {
        self.default_form
    }

    /// Sets the default form.
    pub const fn set_default_form(&mut self, form: Option<Form>) {
        self.default_form = form;
    }

    /// The configured heuristic tolerances.
    #[must_use]
    pub const fn tolerances(&self) -> Tolerances {
        self.tolerances
    }
}

const fn default_syllable_slack() -> usize {
    1
}

const fn default_rhyme_window() -> usize {
    3
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the
/// domain type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default_form: Option<Form>,

        /// Slack band around per-line syllable targets.
        #[serde(default = "default_syllable_slack")]
        syllable_slack: usize,

        /// Trailing characters compared for rhyme judgement.
        #[serde(default = "default_rhyme_window")]
        rhyme_window: usize,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                default_form,
                syllable_slack,
                rhyme_window,
            } => Self {
                default_form,
                tolerances: Tolerances {
                    syllable_slack,
                    rhyme_window,
                },
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            default_form: config.default_form,
            syllable_slack: config.tolerances.syllable_slack,
            rhyme_window: config.tolerances.rhyme_window,
        }
    }
}
