//! Error types for mdautogen.
//!
//! Uses thiserror for derive macros. Every variant here is fatal to a rewrite;
//! file-read failures inside generators are recovered locally and never reach
//! this type (see [`crate::loader::FileReadError`]).

use crate::exit_codes;
use thiserror::Error;

/// Main error type for mdautogen operations.
#[derive(Error, Debug)]
pub enum MdautogenError {
    /// The payload of a Begin marker is not a well-formed directive.
    #[error("malformed directive '{directive}': {reason} (at byte {offset})")]
    DirectiveParse {
        directive: String,
        offset: usize,
        reason: String,
    },

    /// The directive names a command that is not in the generator registry.
    #[error("unknown directive '{name}' (available: {available})")]
    UnknownDirective { name: String, available: String },

    /// The command exists but was invoked with arguments it cannot accept.
    #[error("invalid arguments for '{name}': {reason}")]
    DirectiveArguments { name: String, reason: String },

    /// The configuration file could not be read, parsed or validated.
    #[error("{0}")]
    Config(String),

    /// Reading the input stream or writing the output stream failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl MdautogenError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            MdautogenError::DirectiveParse { .. }
            | MdautogenError::UnknownDirective { .. }
            | MdautogenError::DirectiveArguments { .. } => exit_codes::DIRECTIVE_FAILURE,
            MdautogenError::Config(_) | MdautogenError::Io { .. } => exit_codes::USER_ERROR,
        }
    }

    /// Wrap an I/O error with a short description of what was being done.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        MdautogenError::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type alias for mdautogen operations.
pub type Result<T> = std::result::Result<T, MdautogenError>;
