//! Exit code constants for the mdautogen CLI.
//!
//! - 0: Success
//! - 1: User error (bad config, unreadable input, unwritable output)
//! - 2: Directive failure (malformed directive, unknown command, bad arguments)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: invalid config or a failure on the input/output streams.
pub const USER_ERROR: i32 = 1;

/// Directive failure: the rewrite was aborted at a Begin marker.
pub const DIRECTIVE_FAILURE: i32 = 2;
