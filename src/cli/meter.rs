use std::{io, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use scansion::{
    PoemDocument,
    analysis::{end_word, line_syllables},
    domain::Poem,
};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Show per-line syllable counts and end words")]
pub struct Meter {
    /// Poem file to analyse (reads stdin when omitted)
    path: Option<PathBuf>,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Meter {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self) -> anyhow::Result<()> {
        let document = match &self.path {
            Some(path) => PoemDocument::load(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
            None => {
                let content = io::read_to_string(io::stdin()).context("Failed to read stdin")?;
                PoemDocument::parse(&content)?
            }
        };

        let poem = Poem::parse(document.body());
        if poem.is_empty() {
            anyhow::bail!("Poem cannot be empty");
        }

        match self.output {
            OutputFormat::Table => Self::output_table(&poem),
            OutputFormat::Json => Self::output_json(&poem)?,
        }

        Ok(())
    }

    fn output_table(poem: &Poem) {
        println!("{}", format!("{:<6}{:<11}{}", "Line", "Syllables", "End word").dim());

        let mut total = 0;
        for (index, line) in poem.lines().iter().enumerate() {
            let syllables = line_syllables(line.as_str());
            total += syllables;
            println!("{:<6}{syllables:<11}{}", index + 1, end_word(line.as_str()));
        }

        println!();
        println!(
            "{}",
            format!("{total} syllable(s) across {} line(s)", poem.line_count()).dim()
        );
    }

    fn output_json(poem: &Poem) -> anyhow::Result<()> {
        use serde_json::json;

        let lines: Vec<_> = poem
            .lines()
            .iter()
            .enumerate()
            .map(|(index, line)| {
                json!({
                    "line": index + 1,
                    "text": line.as_str(),
                    "syllables": line_syllables(line.as_str()),
                    "end_word": end_word(line.as_str()),
                })
            })
            .collect();

        let total: usize = poem
            .lines()
            .iter()
            .map(|line| line_syllables(line.as_str()))
            .sum();

        let output = json!({
            "lines": lines,
            "total_syllables": total,
        });

        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }
}
