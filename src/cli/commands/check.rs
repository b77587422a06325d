//! `pft check` command - Check frame documents

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::PathBuf;
use tracing::warn;

use crate::cli::commands::utils::{load_config, load_frame};
use crate::cli::helpers::{expand_paths, parse_assignment, Assignment};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::error::ParameterError;
use crate::core::frame::DerivedParameter;

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Frame documents or directories (default: configured defaults only)
    #[arg()]
    pub paths: Vec<PathBuf>,

    /// Assign a parameter in every frame after loading (NAME=VALUE, repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub sets: Vec<Assignment>,

    /// Continue after the first invalid frame
    #[arg(long)]
    pub keep_going: bool,

    /// Show summary only, don't show individual problems
    #[arg(long)]
    pub summary: bool,
}

/// Outcome for one checked frame
#[derive(Debug, Serialize)]
struct CheckResult {
    path: String,
    valid: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    problems: Vec<String>,
}

/// Check statistics
#[derive(Default)]
struct CheckStats {
    frames_checked: usize,
    frames_passed: usize,
    frames_failed: usize,
    total_problems: usize,
}

pub fn run(args: CheckArgs, global: &GlobalOpts) -> Result<()> {
    let config = load_config(global)?;
    let human = global.output == OutputFormat::Auto;

    // `None` stands for the configured defaults
    let targets: Vec<Option<PathBuf>> = if args.paths.is_empty() {
        vec![None]
    } else {
        expand_paths(&args.paths).into_iter().map(Some).collect()
    };

    if human {
        println!(
            "{} Checking {} frame(s)...\n",
            style("→").blue(),
            targets.len()
        );
    }

    let mut stats = CheckStats::default();
    let mut results = Vec::new();

    for target in &targets {
        let label = target
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(defaults)".to_string());
        stats.frames_checked += 1;

        let result = match load_frame(&config, target.as_deref(), &args.sets) {
            Ok(loaded) => {
                let mut problems: Vec<String> =
                    loaded.failures.iter().map(|f| f.to_string()).collect();
                // a derived violation can exist without any failed assignment
                for derived in DerivedParameter::ALL {
                    let reported = loaded.failures.iter().any(|f| {
                        matches!(f.error, ParameterError::DependencyViolation { derived: d, .. } if d == derived)
                    });
                    if let (Err(e), false) = (loaded.frame.derived(derived), reported) {
                        problems.push(e.to_string());
                    }
                }
                CheckResult {
                    path: label,
                    valid: loaded.frame.is_valid(),
                    problems,
                }
            }
            Err(report) => {
                warn!(path = %label, error = %report, "unreadable frame document");
                CheckResult {
                    path: label,
                    valid: false,
                    problems: vec![report.to_string()],
                }
            }
        };

        if result.valid {
            stats.frames_passed += 1;
            if human && !args.summary {
                println!("{} {}", style("✓").green(), result.path);
            }
        } else {
            stats.frames_failed += 1;
            stats.total_problems += result.problems.len();
            if human && !args.summary {
                println!(
                    "{} {} - {} problem(s)",
                    style("✗").red(),
                    result.path,
                    result.problems.len()
                );
                for problem in &result.problems {
                    println!("    {}", problem);
                }
            }
        }

        let stop = !result.valid && !args.keep_going;
        results.push(result);
        if stop {
            break;
        }
    }

    match global.output {
        OutputFormat::Auto => print_summary(&stats),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&results).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&results).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Tsv => {
            for result in &results {
                println!(
                    "{}\t{}\t{}",
                    result.path,
                    if result.valid { "valid" } else { "invalid" },
                    result.problems.join("; ")
                );
            }
        }
    }

    if stats.frames_failed > 0 {
        if stats.frames_failed == 1 {
            Err(miette::miette!("Check failed: 1 frame is invalid"))
        } else {
            Err(miette::miette!(
                "Check failed: {} frames are invalid",
                stats.frames_failed
            ))
        }
    } else {
        if human {
            println!("{} All frames are valid!", style("✓").green().bold());
        }
        Ok(())
    }
}

fn print_summary(stats: &CheckStats) {
    println!();
    println!("{}", style("─".repeat(60)).dim());
    println!("{}", style("Check Summary").bold());
    println!("{}", style("─".repeat(60)).dim());
    println!("  Frames checked: {}", style(stats.frames_checked).cyan());
    println!("  Frames passed:  {}", style(stats.frames_passed).green());
    println!("  Frames failed:  {}", style(stats.frames_failed).red());
    println!("  Total problems: {}", style(stats.total_problems).red());
    println!();
}
