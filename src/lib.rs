//! mdautogen: regenerate marker-delimited regions of Markdown documents.
//!
//! A document is rewritten in one pass. Lines are echoed until a Begin marker
//! such as
//!
//! ```text
//! <!-- BEGIN_MDAUTOGEN: code_table('example01.js', 'example01.hpp') -->
//! ```
//!
//! is found. The marker is echoed, its directive is dispatched to the
//! [`generator::GeneratorRegistry`], and the generated block is written in
//! place of everything up to the next `<!-- END_MDAUTOGEN -->` line.

pub mod config;
pub mod directive;
pub mod error;
pub mod exit_codes;
pub mod generator;
pub mod loader;
pub mod marker;
pub mod rewrite;

#[cfg(test)]
pub(crate) mod test_support;
