//! CLI argument parsing for mdautogen.
//!
//! Uses clap derive macros. The document itself always flows stdin → stdout;
//! the flags only tune configuration and diagnostics.

use clap::Parser;
use std::path::PathBuf;

/// mdautogen: regenerate marker-delimited regions of a Markdown document.
///
/// Reads a document on stdin and writes it to stdout. Every region between
/// `<!-- BEGIN_MDAUTOGEN:directive -->` and `<!-- END_MDAUTOGEN -->` is
/// replaced by the directive's output, e.g.
/// `code_table('example01.js', 'example01.hpp')`.
#[derive(Parser, Debug)]
#[command(name = "mdautogen")]
#[command(author, version, about)]
pub struct Cli {
    /// Config file (default: .mdautogen.yaml in the working directory, if present).
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log marker and directive activity to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
