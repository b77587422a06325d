//! `pft show` command - Show a frame's parameters and validity

use miette::Result;
use std::path::PathBuf;

use crate::cli::commands::utils::{load_config, load_frame};
use crate::cli::helpers::{parse_assignment, Assignment};
use crate::cli::output::{print_report, FrameReport};
use crate::cli::GlobalOpts;

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Frame document (default: configured defaults only)
    #[arg()]
    pub file: Option<PathBuf>,

    /// Assign a parameter after loading (NAME=VALUE, repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub sets: Vec<Assignment>,
}

pub fn run(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let config = load_config(global)?;
    let loaded = load_frame(&config, args.file.as_deref(), &args.sets)?;

    let report = FrameReport::new(&loaded.frame, loaded.title, &loaded.failures);
    print_report(&report, global.output)
}
