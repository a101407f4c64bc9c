//! brandsplit - Split tabular data by brand

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use brandsplit::config::{Config, OutputMode};
use brandsplit::parser::ParserFactory;
use brandsplit::split::SplitEngine;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputMode {
    MultiSheet,
    WorkbookArchive,
    DelimitedArchive,
}

impl From<CliOutputMode> for OutputMode {
    fn from(m: CliOutputMode) -> Self {
        match m {
            CliOutputMode::MultiSheet => OutputMode::MultiSheet,
            CliOutputMode::WorkbookArchive => OutputMode::WorkbookArchive,
            CliOutputMode::DelimitedArchive => OutputMode::DelimitedArchive,
        }
    }
}

/// Split tabular data (CSV, Excel) into per-brand exports
#[derive(Parser, Debug)]
#[command(name = "brandsplit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file to split
    input: PathBuf,

    /// 0-based index of the brand column
    #[arg(short, long, default_value_t = 1, conflicts_with = "key_name")]
    key_column: usize,

    /// Resolve the brand column from a header name instead of an index
    #[arg(long)]
    key_name: Option<String>,

    /// Treat the first row as data instead of a header
    #[arg(long)]
    no_header: bool,

    /// Output shape
    #[arg(short, long, value_enum, default_value = "workbook-archive")]
    mode: CliOutputMode,

    /// For Excel files: which sheet to read
    #[arg(long)]
    sheet: Option<String>,

    /// Where to write the result (defaults to the derived batch name)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::new(cli.input.clone())
        .with_key_column(cli.key_column)
        .with_include_header(!cli.no_header)
        .with_mode(cli.mode.into());
    if let Some(name) = cli.key_name {
        config = config.with_key_column_name(name);
    }
    if let Some(sheet) = cli.sheet {
        config = config.with_sheet_name(sheet);
    }

    let factory = ParserFactory::new();
    let table = factory
        .parse(&cli.input, &config)
        .with_context(|| format!("Failed to parse input file: {}", cli.input.display()))?;

    // Resolve a named key column against the parsed header
    if let Some(ref name) = config.key_column_name {
        config.key_column = table
            .column_index(name)
            .with_context(|| format!("No column named '{}' in input header", name))?;
    }

    let engine = SplitEngine::new(config);
    let export = engine.split(&table)?;

    let out_path = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&export.file_name));
    fs::write(&out_path, &export.bytes)
        .with_context(|| format!("Failed to write output: {}", out_path.display()))?;

    println!("{}", out_path.display());

    Ok(())
}
