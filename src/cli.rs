use std::path::{Path, PathBuf};

mod check;
mod forms;
mod meter;
mod terminal;

use check::Check;
use clap::ArgAction;
use forms::Forms;
use meter::Meter;
use scansion::{Config, Form};

/// Parse a form identifier from a string, normalizing to lowercase.
///
/// This is a CLI boundary function that accepts mixed-case input
/// and normalizes it before parsing.
fn parse_form(s: &str) -> Result<Form, String> {
    let lowercase = s.to_lowercase();
    lowercase.parse().map_err(|e| format!("{e}"))
}

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a collection config file (defaults to ./.verse.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = load_config(self.config.as_deref())?;

        self.command
            .unwrap_or_else(|| Command::Forms(Forms::default()))
            .run(&config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

/// Resolve the collection config: an explicit path must load, the implicit
/// `.verse.toml` falls back to defaults when absent or malformed.
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        return Config::load(path).map_err(|e| anyhow::anyhow!(e));
    }

    let implicit = Path::new(".verse.toml");
    if implicit.exists() {
        Ok(Config::load(implicit).unwrap_or_else(|e| {
            tracing::warn!("Ignoring .verse.toml: {e}");
            Config::default()
        }))
    } else {
        Ok(Config::default())
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Check poems against the structural rules of their form
    Check(Check),

    /// Show per-line syllable counts and end words
    ///
    /// Useful for seeing why a haiku or sonnet fails its check.
    Meter(Meter),

    /// List the known poetic forms and their rules (default)
    Forms(Forms),
}

impl Command {
    fn run(self, config: &Config) -> anyhow::Result<()> {
        match self {
            Self::Check(command) => command.run(config)?,
            Self::Meter(command) => command.run()?,
            Self::Forms(command) => command.run()?,
        }
        Ok(())
    }
}
