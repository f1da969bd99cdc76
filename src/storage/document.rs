use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use serde::Deserialize;

use crate::domain::Form;

/// A poem file: optional YAML frontmatter followed by the poem body.
///
/// Frontmatter is delimited by `---` fences starting on the first line:
///
/// ```text
/// ---
/// title: The Pond
/// form: haiku
/// ---
/// An old silent pond
/// ...
/// ```
///
/// Files without a leading fence are treated as bare poem bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoemDocument {
    frontmatter: FrontMatter,
    body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
struct FrontMatter {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    form: Option<Form>,
    #[serde(default)]
    topic: Option<String>,
}

impl PoemDocument {
    /// Reads a poem document from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its frontmatter is
    /// malformed.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path)?;
        Self::read(&mut BufReader::new(file))
    }

    /// Reads a poem document from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure, an unterminated frontmatter block,
    /// or frontmatter that is not valid YAML for the expected fields.
    pub fn read<R: BufRead>(reader: &mut R) -> Result<Self, LoadError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::parse(&content)
    }

    /// Parses a poem document from raw text.
    ///
    /// # Errors
    ///
    /// Returns an error on an unterminated frontmatter block or frontmatter
    /// that is not valid YAML for the expected fields.
    pub fn parse(content: &str) -> Result<Self, LoadError> {
        let mut lines = content.lines();

        // No leading fence: the whole file is the poem.
        if lines.next().is_none_or(|first| first.trim() != "---") {
            return Ok(Self {
                frontmatter: FrontMatter::default(),
                body: content.to_string(),
            });
        }

        let mut frontmatter_lines = Vec::new();
        let mut terminated = false;
        for line in lines.by_ref() {
            if line.trim() == "---" {
                terminated = true;
                break;
            }
            frontmatter_lines.push(line);
        }
        if !terminated {
            return Err(LoadError::UnterminatedFrontmatter);
        }

        let frontmatter: FrontMatter = serde_yaml::from_str(&frontmatter_lines.join("\n"))?;
        let body = lines.collect::<Vec<_>>().join("\n");

        Ok(Self { frontmatter, body })
    }

    /// The poem text itself.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The title declared in frontmatter, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.frontmatter.title.as_deref()
    }

    /// The form declared in frontmatter, if any.
    #[must_use]
    pub const fn form(&self) -> Option<Form> {
        self.frontmatter.form
    }

    /// The topic declared in frontmatter, if any.
    #[must_use]
    pub fn topic(&self) -> Option<&str> {
        self.frontmatter.topic.as_deref()
    }
}

/// Errors that can occur while reading a poem document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The frontmatter block was opened but never closed.
    #[error("Frontmatter block is missing its closing '---'")]
    UnterminatedFrontmatter,

    /// The frontmatter was not valid YAML for the expected fields.
    #[error("Malformed frontmatter: {0}")]
    Frontmatter(#[from] serde_yaml::Error),
}
