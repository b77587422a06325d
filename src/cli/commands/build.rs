//! `pft build` command - Write the build sheet of a valid frame

use console::style;
use miette::{IntoDiagnostic, Result};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::cli::commands::utils::{load_config, load_frame};
use crate::cli::helpers::{parse_assignment, Assignment};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::builder::{FrameBuilder, SheetBuilder, SheetFormat};

#[derive(clap::Args, Debug)]
pub struct BuildArgs {
    /// Frame document (default: configured defaults only)
    #[arg()]
    pub file: Option<PathBuf>,

    /// Assign a parameter after loading (NAME=VALUE, repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub sets: Vec<Assignment>,

    /// Write the sheet here instead of stdout
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub out: Option<PathBuf>,
}

pub fn run(args: BuildArgs, global: &GlobalOpts) -> Result<()> {
    let config = load_config(global)?;
    let loaded = load_frame(&config, args.file.as_deref(), &args.sets)?;

    for failure in &loaded.failures {
        eprintln!("{} {}", style("✗").red(), failure);
    }

    let format = match global.output {
        OutputFormat::Json => SheetFormat::Json,
        _ => SheetFormat::Yaml,
    };

    // render into memory so a rejected frame never touches the output file
    let mut builder = SheetBuilder::new(Vec::new(), format).with_title(loaded.title);
    builder.build(&loaded.frame)?;
    let rendered = builder.into_inner();

    match args.out {
        Some(path) => {
            fs::write(&path, &rendered).into_diagnostic()?;
            eprintln!(
                "{} Wrote build sheet to {}",
                style("✓").green(),
                style(path.display()).cyan()
            );
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&rendered).into_diagnostic()?;
            stdout.flush().into_diagnostic()?;
        }
    }

    Ok(())
}
