//! `pft new` command - Create a frame document

use console::style;
use miette::{IntoDiagnostic, Result};
use std::fs;
use std::path::PathBuf;

use crate::cli::commands::utils::load_config;
use crate::cli::GlobalOpts;
use crate::entities::frame::FRAME_FILE_SUFFIX;
use crate::schema::template::{TemplateContext, TemplateGenerator};

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Where to write the document (default: frame.frame.yaml)
    #[arg()]
    pub path: Option<PathBuf>,

    /// Frame title
    #[arg(long, short = 't')]
    pub title: Option<String>,

    /// Add a backing substrate
    #[arg(long)]
    pub substrate: bool,

    /// Add a desk stand
    #[arg(long)]
    pub stand: bool,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    let config = load_config(global)?;

    let path = args
        .path
        .unwrap_or_else(|| PathBuf::from(format!("frame{}", FRAME_FILE_SUFFIX)));

    if path.exists() && !args.force {
        return Err(miette::miette!(
            help = "pass --force to overwrite it",
            "{} already exists",
            path.display()
        ));
    }

    let generator = TemplateGenerator::new().map_err(|e| miette::miette!("{}", e))?;
    let ctx = TemplateContext::new(&config)
        .with_substrate(args.substrate)
        .with_stand(args.stand);
    let ctx = match args.title {
        Some(title) => ctx.with_title(title),
        None => ctx,
    };

    let yaml_content = generator
        .generate_frame(&ctx)
        .map_err(|e| miette::miette!("{}", e))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).into_diagnostic()?;
        }
    }
    fs::write(&path, &yaml_content).into_diagnostic()?;

    println!(
        "{} Created frame {}",
        style("✓").green(),
        style(path.display()).cyan()
    );
    Ok(())
}
