//! mdautogen CLI entry point.
//!
//! Parses arguments, sets up logging, and rewrites stdin to stdout. Errors
//! are printed to stderr and mapped to exit codes.

mod cli;

use cli::Cli;
use mdautogen::config::Config;
use mdautogen::error::{MdautogenError, Result};
use mdautogen::exit_codes;
use mdautogen::generator::GeneratorRegistry;
use mdautogen::rewrite::{RewriteSummary, Rewriter};
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(_) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Log to stderr so stdout carries only the document.
///
/// --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<RewriteSummary> {
    let cwd = std::env::current_dir()
        .map_err(|e| MdautogenError::io("failed to determine working directory", e))?;
    let config = Config::discover(cli.config.as_deref(), &cwd)?;
    debug!(config = %config.to_yaml()?.trim_end(), "effective config");
    let registry = GeneratorRegistry::with_builtins();
    let rewriter = Rewriter::new(&config, &registry)?;

    let mut output = BufWriter::new(io::stdout().lock());
    let result = rewriter.rewrite(io::stdin().lock(), &mut output);

    // Flush what was written even when the rewrite aborted part-way.
    let flushed = output
        .flush()
        .map_err(|e| MdautogenError::io("failed to write output", e));

    let summary = result?;
    flushed?;
    Ok(summary)
}
