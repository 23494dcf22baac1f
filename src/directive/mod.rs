//! Directive parsing for Begin markers.
//!
//! A directive is a single command invocation such as
//! `code_table('example01.js', 'example01.hpp')`: an identifier followed by a
//! parenthesized, comma-separated list of quoted string arguments. Directives
//! are never evaluated; the parsed name is looked up in the generator registry.

mod parser;
mod types;


// Re-export public API
pub use parser::parse_directive;
pub use types::Directive;
