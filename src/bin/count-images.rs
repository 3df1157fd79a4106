//! Image counting CLI tool
//!
//! Prints the number of images in each category of a report folder.

use anyhow::{Context, Result};
use clap::Parser;
use log::error;
use std::path::PathBuf;
use std::process;

use daily_report::config::ReportConfig;
use daily_report::counter::{count_images, CountPolicy};

/// Count images per report category
#[derive(Parser)]
#[command(name = "count-images")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Report folder (defaults to the current directory)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Only look at the top level of each category and only at .jpg/.jpeg
    #[arg(long)]
    flat: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir().context("Cannot determine the current directory")?,
    };

    let policy = if cli.flat {
        CountPolicy::Flat
    } else {
        CountPolicy::Recursive
    };

    let counts = count_images(&root, &ReportConfig::default(), policy)
        .with_context(|| format!("Failed to count images in {}", root.display()))?;

    print!("{}", counts);
    Ok(())
}
