//! The marker-driven stream rewriter.
//!
//! Input is consumed line by line and written to the output as it goes.
//! Lines outside marker regions are echoed with their original terminators;
//! each region between a Begin and an End marker is replaced by the block the
//! Begin marker's directive generates.

mod rewriter;
mod types;


// Re-export public API
pub use rewriter::{Rewriter, rewrite_str};
pub use types::{Mode, RewriteSummary};
