//! lexalign - Darwin Core cross-reference reports for AT Protocol lexicons
//!
//! Loads a directory of lexicon JSON documents and the TDWG
//! `term_versions.csv` export, classifies every lexicon field against the
//! Darwin Core term catalog, and prints alignment and coverage reports.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

mod cli;

const DEFAULT_LOG_FILTER: &str = "lexalign=info";

#[derive(Parser, Debug)]
#[command(name = "lexalign", about = "Darwin Core alignment for AT Protocol lexicons")]
struct Cli {
    /// Enable verbose logging (debug to stderr)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Full cross-reference report: mapped fields, extensions, missing terms
    Report(cli::report::ReportArgs),

    /// Coverage summary per lexicon and across all lexicons
    Coverage(cli::coverage::CoverageArgs),

    /// Flattened field table for one lexicon
    Fields(cli::fields::FieldsArgs),
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("lexalign=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Report(args) => cli::report::run(args),
        Commands::Coverage(args) => cli::coverage::run(args),
        Commands::Fields(args) => cli::fields::run(args),
    }
}
