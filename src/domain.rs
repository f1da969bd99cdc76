//! Domain models for poem structure validation.
//!
//! This module contains the core domain types: poetic forms, segmented
//! poems, validation verdicts, and the rule engine itself.

/// Poetic form identifiers and the form catalog.
pub mod form;
pub use form::Form;

/// Line segmentation of raw poem text.
pub mod poem;
pub use poem::{Line, Poem};

/// Validation outcomes.
pub mod violation;
pub use violation::{Verdict, Violation};

/// The per-form rule engine.
pub mod rules;
pub use rules::Validator;

mod config;
pub use config::{Config, Tolerances};
