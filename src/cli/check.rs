use std::{
    io,
    path::{Path, PathBuf},
    process,
};

use anyhow::Context;
use clap::Parser;
use indicatif::ProgressBar;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use scansion::{Config, Form, PoemDocument, Validator, Verdict, storage::collect_poem_paths};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Check poems against the structural rules of their form")]
pub struct Check {
    /// Poem files or directories to check (reads stdin when omitted)
    paths: Vec<PathBuf>,

    /// The form to check against (overrides frontmatter and config)
    #[arg(long, short, value_parser = super::parse_form)]
    form: Option<Form>,

    /// The topic an acrostic must spell out (overrides frontmatter)
    #[arg(long)]
    topic: Option<String>,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,

    /// Suppress per-poem lines, print only the summary
    #[arg(long, short)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
    Summary,
}

/// One checked poem.
#[derive(Debug)]
struct Report {
    path: String,
    title: Option<String>,
    form: Form,
    verdict: Verdict,
}

impl Check {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let validator = Validator::new(config.tolerances());

        let reports = if self.paths.is_empty() {
            vec![self.check_stdin(validator, config)?]
        } else {
            self.check_files(validator, config)?
        };

        let violations = reports
            .iter()
            .filter(|report| !report.verdict.is_valid())
            .count();

        match self.output {
            OutputFormat::Table => self.output_table(&reports, violations),
            OutputFormat::Json => Self::output_json(&reports, violations)?,
            OutputFormat::Summary => println!("violations={violations}"),
        }

        // Scripting convention: violations are not an error, but they are
        // visible in the exit code.
        if violations > 0 {
            process::exit(2);
        }

        Ok(())
    }

    fn check_stdin(&self, validator: Validator, config: &Config) -> anyhow::Result<Report> {
        let content = io::read_to_string(io::stdin()).context("Failed to read stdin")?;
        let document = PoemDocument::parse(&content)?;
        self.check_document(validator, config, &document, "<stdin>")
    }

    fn check_files(&self, validator: Validator, config: &Config) -> anyhow::Result<Vec<Report>> {
        let mut files = Vec::new();
        for path in &self.paths {
            if path.is_dir() {
                files.extend(collect_poem_paths(path));
            } else {
                files.push(path.clone());
            }
        }
        if files.is_empty() {
            anyhow::bail!("No poem files found");
        }

        let progress = (files.len() > 1 && !self.quiet).then(|| ProgressBar::new(files.len() as u64));

        let (reports, failures): (Vec<_>, Vec<_>) = files
            .par_iter()
            .map(|path| {
                let report = self.check_file(validator, config, path);
                if let Some(progress) = &progress {
                    progress.inc(1);
                }
                report
            })
            .partition(Result::is_ok);

        if let Some(progress) = progress {
            progress.finish_and_clear();
        }

        let failures: Vec<_> = failures.into_iter().map(Result::unwrap_err).collect();
        if !failures.is_empty() {
            for failure in &failures {
                eprintln!("{}", format!("{failure:#}").failure());
            }
            anyhow::bail!("Failed to check {} file(s)", failures.len());
        }

        Ok(reports.into_iter().map(Result::unwrap).collect())
    }

    fn check_file(
        &self,
        validator: Validator,
        config: &Config,
        path: &Path,
    ) -> anyhow::Result<Report> {
        let document = PoemDocument::load(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        self.check_document(validator, config, &document, &path.display().to_string())
    }

    fn check_document(
        &self,
        validator: Validator,
        config: &Config,
        document: &PoemDocument,
        path: &str,
    ) -> anyhow::Result<Report> {
        let form = self
            .form
            .or(document.form())
            .or(config.default_form())
            .with_context(|| {
                format!(
                    "No form for {path}: pass --form, declare one in frontmatter, or set \
                     default_form in the config"
                )
            })?;

        let topic = self.topic.as_deref().or(document.topic());
        let verdict = validator.validate(document.body(), form, topic);

        Ok(Report {
            path: path.to_string(),
            title: document.title().map(str::to_string),
            form,
            verdict,
        })
    }

    fn output_table(&self, reports: &[Report], violations: usize) {
        if !self.quiet {
            for report in reports {
                match report.verdict.violation() {
                    None => {
                        println!("{} {} [{}]", "✓".success(), report.path, report.form);
                    }
                    Some(violation) => {
                        println!("{} {} [{}]", "✗".failure(), report.path, report.form);
                        println!("  {}", violation.to_string().warning());
                    }
                }
            }
            println!();
        }

        if violations == 0 {
            println!(
                "{}",
                format!("All {} poem(s) match their form", reports.len()).success()
            );
        } else {
            println!(
                "{}",
                format!("{violations} of {} poem(s) violate their form", reports.len()).warning()
            );
            if !self.quiet {
                println!(
                    "{}",
                    "Run 'verse meter <FILE>' to see per-line syllables and end words".dim()
                );
            }
        }
    }

    fn output_json(reports: &[Report], violations: usize) -> anyhow::Result<()> {
        use serde_json::json;

        let poems: Vec<_> = reports
            .iter()
            .map(|report| {
                json!({
                    "path": report.path,
                    "title": report.title,
                    "form": report.form,
                    "status": if report.verdict.is_valid() { "valid" } else { "invalid" },
                    "message": report.verdict.message(),
                })
            })
            .collect();

        let output = json!({
            "poems": poems,
            "summary": {
                "total": reports.len(),
                "violations": violations,
            }
        });

        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }
}
