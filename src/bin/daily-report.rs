//! Daily report CLI tool
//!
//! Run from inside a report folder named after its date (e.g. `9-9-2030`).
//! Writes `<date>_report.tex`, compiles it twice and opens the PDF.

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;
use std::process;

use daily_report::config::ReportConfig;
use daily_report::date::{report_date_from_override, ReportDate};
use daily_report::external::{compile, view, DEFAULT_COMPILER, DEFAULT_VIEWER};
use daily_report::pdf::count_pages;
use daily_report::report::{build_report, pdf_path, write_report};

/// Daily Report - Build the photo report for a dated folder
#[derive(Parser)]
#[command(name = "daily-report")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Build, compile and open the report for the current folder
    cd 9-9-2030 && daily-report

    # Only write the .tex file
    daily-report --no-compile

    # Build a folder that is not named after its date
    daily-report --root ./latest --date 2030-09-09")]
struct Cli {
    /// Report folder (defaults to the current directory)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Report date (e.g. "today", "2030-09-09", "9-9-2030"); defaults to the folder name
    #[arg(long)]
    date: Option<String>,

    /// Document compiler
    #[arg(long, default_value = DEFAULT_COMPILER)]
    compiler: String,

    /// Document viewer
    #[arg(long, default_value = DEFAULT_VIEWER)]
    viewer: String,

    /// Write the markup file without compiling it
    #[arg(long)]
    no_compile: bool,

    /// Do not open the rendered report
    #[arg(long)]
    no_view: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            error!("{:#}", e);
            process::exit(1);
        }
    }
}

/// Returns whether every category was laid out completely
fn run(cli: Cli) -> Result<bool> {
    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir().context("Cannot determine the current directory")?,
    };
    let root = root
        .canonicalize()
        .with_context(|| format!("Report folder not found: {}", root.display()))?;

    let date = match cli.date.as_deref() {
        Some(expr) => report_date_from_override(expr)?,
        None => {
            let name = root
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .with_context(|| format!("Report folder has no name: {}", root.display()))?;
            ReportDate::parse(&name)?
        }
    };

    let config = ReportConfig::default();
    let report = build_report(&root, &date, &config)
        .with_context(|| format!("Failed to build report for {}", root.display()))?;
    let tex = write_report(&root, &date, &report).context("Failed to write report")?;

    for failure in &report.failures {
        warn!("Incomplete section: {}", failure);
    }

    if !cli.no_compile {
        compile(&cli.compiler, &tex);

        let pdf = pdf_path(&root, &date);
        match count_pages(&pdf) {
            Ok(pages) => info!("Rendered {} ({} pages)", pdf.display(), pages),
            Err(e) => warn!("Cannot read rendered report: {}", e),
        }

        if !cli.no_view {
            view(&cli.viewer, &pdf);
        }
    }

    Ok(report.is_complete())
}
