//! Reusable report runner shared by the CLI binary.

use std::error::Error;
use std::path::PathBuf;

use clap::{error::ErrorKind, Parser};

use crate::config::PipelineConfig;
use crate::pipeline::PipelineContext;
use crate::report::RiskReport;

#[derive(Debug, Parser)]
#[command(
    name = "risk_report",
    disable_help_subcommand = true,
    about = "Rank neighborhoods by mean severe-accident probability",
    long_about = "Load the severity model, feature schema, and processed accident dataset, \
                  then print the top-ranked neighborhoods as a bar series, table, and map layer.",
    after_help = "Missing model or schema artifacts abort the run; a missing dataset or \
                  mismatched schema degrades to an empty ranking with warnings."
)]
struct RiskReportCli {
    #[arg(
        long,
        value_name = "DIR",
        default_value = ".",
        help = "Directory holding severity_model.json, feature_columns.json, and processed_accidents.csv"
    )]
    artifact_dir: PathBuf,
    #[arg(long, value_name = "N", help = "Override the number of retained neighborhoods")]
    top_n: Option<usize>,
    #[arg(long, help = "Emit the full report as JSON instead of text")]
    json: bool,
}

/// Parse args, run the pipeline, and print the report.
///
/// `args_iter` excludes the program name (pass `std::env::args().skip(1)`).
pub fn run_risk_report<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let Some(cli) = parse_cli::<RiskReportCli, _>(
        std::iter::once("risk_report".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let mut config = PipelineConfig::for_dir(&cli.artifact_dir);
    if let Some(top_n) = cli.top_n {
        config.ranking.top_n = top_n;
    }

    let context = PipelineContext::load(config)?;
    let report = context.run()?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    print_report(&report);
    Ok(())
}

fn print_report(report: &RiskReport) {
    for warning in &report.warnings {
        println!("warning: {warning}");
    }
    if report.is_empty() {
        println!("No neighborhoods ranked.");
        return;
    }

    println!("Top {} accident-prone neighborhoods", report.entries.len());
    let width = report
        .bars
        .iter()
        .map(|bar| bar.label.len())
        .max()
        .unwrap_or(0);
    for bar in &report.bars {
        let marker = if bar.highlighted { "*" } else { " " };
        println!("{marker} {:<width$}  {:6.2}%", bar.label, bar.probability);
    }

    println!();
    println!("Map layer:");
    for point in &report.map {
        println!(
            "  {:<width$}  ({:.5}, {:.5})  radius {:.0}m  rgba({}, {}, {}, {})",
            point.label,
            point.latitude,
            point.longitude,
            point.radius,
            point.color[0],
            point.color[1],
            point.color[2],
            point.color[3],
        );
    }
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: Iterator<Item = String>,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            Ok(None)
        }
        Err(err) => Err(Box::new(err)),
    }
}
