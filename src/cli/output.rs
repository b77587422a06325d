//! Output formatting for frame reports

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::cli::helpers::{format_number, truncate_str};
use crate::cli::OutputFormat;
use crate::core::frame::{ConsistencyRule, DerivedParameter, FieldStatus, FrameParameters, ParameterName};
use crate::entities::frame::AssignmentFailure;

/// Width of the message column in tables
const MESSAGE_WIDTH: usize = 60;

/// One primary parameter in a report
#[derive(Debug, Clone, Serialize)]
pub struct ParameterRow {
    pub name: ParameterName,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub status: FieldStatus,
}

/// One derived quantity in a report
#[derive(Debug, Clone, Serialize)]
pub struct DerivedRow {
    pub name: DerivedParameter,
    /// Raw `outer - 2 * interval`, present even when the law fails
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Everything `pft show` knows about a frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub rule: ConsistencyRule,
    pub valid: bool,
    pub parameters: Vec<ParameterRow>,
    pub derived: Vec<DerivedRow>,
    pub has_substrate: bool,
    pub has_stand: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<String>,
}

impl FrameReport {
    pub fn new(frame: &FrameParameters, title: Option<String>, failures: &[AssignmentFailure]) -> Self {
        let parameters = ParameterName::ALL
            .into_iter()
            .map(|name| {
                let bounds = frame.bounds(name);
                ParameterRow {
                    name,
                    value: bounds.value(),
                    min: bounds.min(),
                    max: bounds.max(),
                    status: frame.status(name),
                }
            })
            .collect();

        let derived = DerivedParameter::ALL
            .into_iter()
            .map(|name| {
                let raw = frame.get(name.outer()) - 2.0 * frame.interval();
                DerivedRow {
                    name,
                    value: raw,
                    error: frame.derived(name).err().map(|e| e.to_string()),
                }
            })
            .collect();

        Self {
            title,
            rule: frame.rule(),
            valid: frame.is_valid(),
            parameters,
            derived,
            has_substrate: frame.has_substrate(),
            has_stand: frame.has_stand(),
            failures: failures.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Print a report in the requested format
pub fn print_report(report: &FrameReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(report).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Tsv => print!("{}", report_tsv(report)),
        OutputFormat::Auto => print_report_table(report),
    }
    Ok(())
}

/// Tab-separated rows: `name value min max status`
pub fn report_tsv(report: &FrameReport) -> String {
    let mut out = String::from("name\tvalue\tmin\tmax\tstatus\n");
    for row in &report.parameters {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\n",
            row.name,
            format_number(row.value),
            format_number(row.min),
            format_number(row.max),
            row.status
        ));
    }
    for row in &report.derived {
        let status = if row.error.is_some() { "invalid" } else { "ok" };
        out.push_str(&format!(
            "{}\t{}\t\t\t{}\n",
            row.name,
            format_number(row.value),
            status
        ));
    }
    out.push_str(&format!("valid\t{}\t\t\t\n", report.valid));
    out
}

fn print_report_table(report: &FrameReport) {
    if let Some(title) = &report.title {
        println!("{}", style(title).bold());
    }

    let mut builder = Builder::default();
    builder.push_record(["Parameter", "Value", "Min", "Max", "Status"]);
    for row in &report.parameters {
        builder.push_record([
            row.name.label().to_string(),
            format_number(row.value),
            format_number(row.min),
            format_number(row.max),
            row.status.to_string(),
        ]);
    }
    println!("{}", builder.build().with(Style::rounded()));

    let mut builder = Builder::default();
    builder.push_record(["Derived", "Value", "Check"]);
    for row in &report.derived {
        let check = match &row.error {
            Some(e) => truncate_str(e, MESSAGE_WIDTH),
            None => "ok".to_string(),
        };
        builder.push_record([row.name.label().to_string(), format_number(row.value), check]);
    }
    println!("{}", builder.build().with(Style::rounded()));

    println!(
        "Rule: {}   Substrate: {}   Stand: {}",
        style(report.rule).cyan(),
        yes_no(report.has_substrate),
        yes_no(report.has_stand)
    );

    for failure in &report.failures {
        println!("  {} {}", style("•").red(), failure);
    }

    if report.valid {
        println!("{} Frame is valid", style("✓").green().bold());
    } else {
        println!("{} Frame is invalid", style("✗").red().bold());
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
