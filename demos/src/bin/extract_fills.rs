//! Demo: Fill Extraction
//!
//! Reads a FIX session log from stdin and writes one CSV row per fully
//! filled limit order to stdout. Logs and the run summary go to stderr.
//!
//! Run: cargo run --bin extract_fills < session.log > fills.csv
//!
//! Log level follows `RUST_LOG` (default `warn`).

use std::io::{self, Write};

use anyhow::Context;
use colored::*;
use fix_csv::CsvEmitter;
use fix_engine::{run, PipelineConfig};
use fix_types::FixError;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut emitter = CsvEmitter::new(stdout.lock()).context("failed to start CSV output")?;

    let summary = match run(stdin.lock(), &mut emitter, &PipelineConfig::default()) {
        Ok(summary) => summary,
        Err(FixError::MissingField { tag }) => {
            eprintln!(
                "{} Missing expected FIX tag: {} ({}). Recheck that fields are entered correctly.",
                "✗".red(),
                tag,
                tag.name().bold()
            );
            std::process::exit(1);
        }
        Err(err) => return Err(err).context("fill extraction failed"),
    };

    emitter.into_inner().context("failed to flush CSV output")?.flush()?;

    eprintln!(
        "{} Parsed rows: {}",
        "✓".green(),
        summary.records_written.to_string().bold()
    );
    eprintln!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
