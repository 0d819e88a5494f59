//! Implementation of the lotledger replay command.
//!
//! Reads a query stream (first line: query count; then one query per line),
//! drives a [`Ledger`], and writes one total price per withdrawal.

use anyhow::{Context, Result};
use clap::Parser;
use lotledger_core::Ledger;
use lotledger_parser::{Query, QueryReader};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, Level};

/// Replay a query stream against a FIFO consumption ledger.
#[derive(Parser, Debug)]
#[command(name = "lotledger")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// File holding the query stream (default: stdin)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,

    /// Show verbose output including per-query tracing
    #[arg(short, long)]
    pub verbose: bool,
}

/// Replay every query from `input`, writing one total per withdrawal.
///
/// The first input line is the query count; if the stream ends before the
/// count is met, replay stops quietly at end of input. Queries past the
/// count are ignored.
pub fn process<R: BufRead, W: Write>(input: R, output: &mut W) -> Result<()> {
    let mut queries = QueryReader::new(input);
    let mut ledger = Ledger::new();

    let count = queries.read_count().context("failed to read query count")?;
    for _ in 0..count {
        let Some(query) = queries.next_query().context("failed to read query")? else {
            break;
        };
        match query {
            Query::Add {
                quantity,
                unit_price,
            } => {
                debug!(quantity, unit_price, "add lot");
                ledger.add(quantity, unit_price);
            }
            Query::Withdraw { requested } => {
                let withdrawal = ledger.withdraw(requested);
                debug!(
                    requested,
                    drawn = withdrawal.units,
                    total = %withdrawal.total_price,
                    "withdraw"
                );
                writeln!(output, "{}", withdrawal.total_price)
                    .context("failed to write result")?;
            }
        }
    }

    Ok(())
}

fn run(args: &Args) -> Result<ExitCode> {
    let mut output: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("failed to create {}", path.display())
        })?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    match &args.file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            process(BufReader::new(file), &mut output)?;
        }
        None => process(io::stdin().lock(), &mut output)?,
    }

    output.flush().context("failed to flush output")?;
    Ok(ExitCode::SUCCESS)
}

/// Entry point for the `lotledger` binary.
pub fn main() -> ExitCode {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .init();
    }

    match run(&args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
