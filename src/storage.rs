//! Reading poems from disk.
//!
//! Poem files are plain text, optionally preceded by a YAML frontmatter
//! block that names the poem's form and topic so a file can be validated
//! without external context.

/// Poem files with optional YAML frontmatter.
pub mod document;
pub use document::{LoadError, PoemDocument};

/// Discovery of poem files beneath a directory.
pub mod collection;
pub use collection::collect_poem_paths;
