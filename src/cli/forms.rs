use clap::Parser;
use scansion::Form;
use tracing::instrument;

use super::terminal::{Colorize, is_narrow};

#[derive(Debug, Parser, Default)]
#[command(about = "List the known poetic forms and their rules")]
pub struct Forms {
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

impl Forms {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self) -> anyhow::Result<()> {
        match self.output {
            OutputFormat::Table => Self::output_table(),
            OutputFormat::Json => Self::output_json()?,
        }
        Ok(())
    }

    fn output_table() {
        // The structure column is the widest; drop it on narrow terminals.
        let wide = !is_narrow();

        for form in Form::ALL {
            let info = form.info();
            if wide {
                println!(
                    "{:<12}{:<28}{}",
                    form.identifier(),
                    info.lines,
                    info.structure.dim()
                );
            } else {
                println!("{:<12}{}", form.identifier(), info.lines);
            }
        }

        println!();
        println!(
            "{}",
            "Run 'verse check --form <FORM> <FILE>' to check a poem".dim()
        );
    }

    fn output_json() -> anyhow::Result<()> {
        use serde_json::json;

        let forms: Vec<_> = Form::ALL
            .into_iter()
            .map(|form| {
                let info = form.info();
                json!({
                    "id": form.identifier(),
                    "name": info.name,
                    "lines": info.lines,
                    "structure": info.structure,
                    "description": info.description,
                    "example": info.example,
                })
            })
            .collect();

        println!("{}", serde_json::to_string_pretty(&json!({ "forms": forms }))?);
        Ok(())
    }
}
