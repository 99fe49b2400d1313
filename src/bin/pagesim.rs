//! `pagesim` command line.
//!
//! ```text
//! pagesim <ALGORITHM> <FRAMES> <INPUT> <OUTPUT>
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;

use pagesim::{replay_file, Policy, SimulationConfig};

/// Simulate page replacement over a reference trace.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Replacement policy: `fifo` or `lru` (case-insensitive)
    algorithm: Policy,

    /// Number of memory frames (at least 1)
    frames: usize,

    /// Trace file with one page id per token
    input: PathBuf,

    /// File to write the classified references and fault rate to
    output: PathBuf,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = SimulationConfig::new(args.algorithm, args.frames)?;

    let report = replay_file(config, &args.input, &args.output).with_context(|| {
        format!(
            "Unable to simulate {} into {}",
            args.input.display(),
            args.output.display()
        )
    })?;

    log::info!("Wrote {} results to {}", report.len(), args.output.display());
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error! {:#}", err);
            ExitCode::FAILURE
        }
    }
}
