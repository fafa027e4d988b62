//! CLI Adapter.

mod render;

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::app::api::{self, ReorganizeOptions};
use crate::app::commands::output::write_json;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "reorg")]
#[command(version)]
#[command(
    about = "Reorganize a flat research repository into paper/, data/, code/ and figures/",
    long_about = "Moves known paper and data files into subdirectories with history-preserving \
                  git moves, writes documentation templates, and records everything in one commit. \
                  Safe to re-run: missing files are skipped and templates are rewritten."
)]
struct Cli {
    /// Run against this repository root instead of the current directory
    #[arg(short = 'C', long = "dir", value_name = "PATH")]
    dir: Option<PathBuf>,
    /// Use this layout file instead of the built-in one
    #[arg(short, long, value_name = "FILE")]
    layout: Option<PathBuf>,
    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Suppress follow-up guidance
    #[arg(short, long)]
    quiet: bool,
    /// Validate the layout and exit without touching the repository
    #[arg(long, conflicts_with = "dir")]
    check_layout: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result = if cli.check_layout { run_check_layout(&cli) } else { run_reorganize(&cli) };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if !cli.check_layout && !e.is_precondition() {
            eprintln!("Completed steps were kept; fix the cause and re-run.");
        }
        std::process::exit(1);
    }
}

fn run_reorganize(cli: &Cli) -> Result<(), AppError> {
    let options = ReorganizeOptions { root: cli.dir.clone(), layout: cli.layout.clone() };

    match cli.format {
        OutputFormat::Text => {
            let quiet = cli.quiet;
            api::reorganize_observed(options, |event| {
                let mut stdout = std::io::stdout().lock();
                render::write_event(&mut stdout, event, quiet)?;
                stdout.flush()?;
                Ok(())
            })?;
            Ok(())
        }
        OutputFormat::Json => {
            let report = api::reorganize_with(options)?;
            write_json(&report, &mut std::io::stdout().lock())
        }
    }
}

fn run_check_layout(cli: &Cli) -> Result<(), AppError> {
    let layout = api::check_layout(cli.layout.as_deref())?;
    println!(
        "✅ Layout OK: {} directories, {} relocations, {} templates",
        layout.directories().len(),
        layout.relocations().len(),
        layout.templates().len()
    );
    Ok(())
}
