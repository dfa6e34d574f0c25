mod logging;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use velodata_analyze::{AnalysisEngine, AnalyzeError, AnalyzeOptions};
use velodata_generate::{GenerateOptions, GenerationEngine, GenerationError};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("analysis error: {0}")]
    Analysis(#[from] AnalyzeError),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(
    name = "velodata",
    version,
    about = "Synthetic bike-rental dataset generator and analyzer"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a synthetic rental dataset CSV.
    Generate(GenerateArgs),
    /// Run the analysis query battery over a dataset CSV.
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Destination CSV path; overwritten if present.
    #[arg(long, default_value = "bike_sharing.csv")]
    out: PathBuf,
    /// Number of records to generate.
    #[arg(long, default_value_t = 1000)]
    records: u64,
    /// Seed for reproducible output; entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Input dataset CSV.
    #[arg(long, default_value = "bike_sharing.csv")]
    input: PathBuf,
    /// Rows shown in the dataset preview.
    #[arg(long, default_value_t = 5)]
    preview: usize,
    /// Directory for report.md and analysis.json artifacts.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<(), CliError> {
    logging::init().map_err(CliError::Logging)?;
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Analyze(args) => run_analyze(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let engine = GenerationEngine::new(GenerateOptions {
        out_path: args.out.clone(),
        records: args.records,
        seed: args.seed,
    });
    let report = engine.run()?;

    println!(
        "generated {} record(s) to {} (seed {}, {} bytes)",
        report.records_written,
        args.out.display(),
        report.seed,
        report.bytes_written
    );
    Ok(())
}

fn run_analyze(args: AnalyzeArgs) -> Result<(), CliError> {
    let engine = AnalysisEngine::new(AnalyzeOptions {
        input: args.input,
        preview_rows: args.preview,
        out_dir: args.out,
    });
    let result = engine.run()?;

    println!("{}", result.rendered);
    if let Some(path) = result.report_path {
        println!("report written to {}", path.display());
    }
    Ok(())
}
