//! Generators that produce the content of a marker region.
//!
//! Directives are dispatched by name through a closed [`GeneratorRegistry`].
//! The built-in set is:
//! - `code_table(path1, path2)` / `code_table(header1, header2, path1, path2)`:
//!   a two-column Markdown table with one file per cell

mod code_table;
mod escape;
mod registry;

#[cfg(test)]
mod tests;

// Re-export public API
pub use code_table::{CodeTable, text_to_cell};
pub use escape::{escape_cell_text, escape_markdown};
pub use registry::{Generator, GeneratorRegistry, RenderContext};
