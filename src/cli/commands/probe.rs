//! `pft probe` command - Try one assignment and report the outcome

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::commands::utils::{load_config, load_frame};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::frame::ParameterName;

#[derive(clap::Args, Debug)]
pub struct ProbeArgs {
    /// Parameter name (e.g. OuterWidth, interval); unknown names are ignored
    pub name: String,

    /// Value to try
    #[arg(allow_hyphen_values = true)]
    pub value: f64,

    /// Frame document to probe against (default: configured defaults)
    pub file: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ProbeOutcome {
    parameter: String,
    value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    valid: bool,
}

pub fn run(args: ProbeArgs, global: &GlobalOpts) -> Result<()> {
    let config = load_config(global)?;
    let loaded = load_frame(&config, args.file.as_deref(), &[])?;
    for failure in &loaded.failures {
        eprintln!("{} {}", style("✗").red(), failure);
    }
    let mut frame = loaded.frame;

    let message = frame.validate_parameter(&args.name, args.value);
    let outcome = ProbeOutcome {
        parameter: args.name,
        value: args.value,
        message,
        valid: frame.is_valid(),
    };

    match global.output {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&outcome).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&outcome).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Tsv => {
            println!(
                "{}\t{}\t{}\t{}",
                outcome.parameter,
                outcome.value,
                outcome.message.as_deref().unwrap_or("ok"),
                outcome.valid
            );
        }
        OutputFormat::Auto => {
            match &outcome.message {
                Some(message) => println!("{} {}", style("✗").red(), message),
                None if outcome.parameter.parse::<ParameterName>().is_err() => println!(
                    "{} ok ({} is not a frame parameter; nothing changed)",
                    style("?").yellow(),
                    outcome.parameter
                ),
                None => println!("{} ok", style("✓").green()),
            }
            println!(
                "Frame is {}",
                if outcome.valid {
                    style("valid").green()
                } else {
                    style("invalid").red()
                }
            );
        }
    }

    Ok(())
}
