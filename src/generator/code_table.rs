//! The `code_table` generator: two files side by side in a Markdown table.

use crate::error::{MdautogenError, Result};
use crate::loader::load_text;
use std::path::Path;
use tracing::warn;

use super::escape::{escape_cell_text, escape_markdown};
use super::registry::{Generator, RenderContext};

/// Renders `code_table(path1, path2)` and `code_table(header1, header2, path1, path2)`.
///
/// Output is a header row, a separator row and one data row. Each data cell
/// holds a whole file: `<pre>` before the first line, `<br>` before every
/// later one, each line escaped with [`escape_markdown`]. Headers and inline
/// read errors have `|` escaped so they stay inside their cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeTable;

impl Generator for CodeTable {
    fn name(&self) -> &'static str {
        "code_table"
    }

    fn render(&self, args: &[String], ctx: &RenderContext<'_>) -> Result<String> {
        let (header1, header2, path1, path2) = match args {
            [path1, path2] => ("", "", path1, path2),
            [header1, header2, path1, path2] => {
                (header1.as_str(), header2.as_str(), path1, path2)
            }
            _ => {
                return Err(MdautogenError::DirectiveArguments {
                    name: self.name().to_string(),
                    reason: format!(
                        "expected (path1, path2) or (header1, header2, path1, path2), got {} argument(s)",
                        args.len()
                    ),
                });
            }
        };

        let trim = ctx.config.trim_trailing_breaks;
        let cell1 = file_to_cell(&ctx.config.resolve_path(path1), trim);
        let cell2 = file_to_cell(&ctx.config.resolve_path(path2), trim);

        Ok(format!(
            "| {} | {} |\n|----|----|\n|{}|{}|",
            escape_cell_text(header1),
            escape_cell_text(header2),
            cell1,
            cell2
        ))
    }
}

/// Render one file as a cell, or the read error as the cell's content.
fn file_to_cell(path: &Path, trim_trailing_breaks: bool) -> String {
    match load_text(path) {
        Ok(text) => text_to_cell(&text, trim_trailing_breaks),
        Err(e) => {
            warn!(path = %path.display(), error = %e.source, "embedding read error in table cell");
            format!("<pre>{}", escape_cell_text(&e.to_string()))
        }
    }
}

/// Render file text as a single table cell.
///
/// Lines are split on `\n` or `\r\n`. A trailing newline produces a final
/// empty line (and so a trailing `<br>`) unless `trim_trailing_breaks` is set.
pub fn text_to_cell(text: &str, trim_trailing_breaks: bool) -> String {
    let mut lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    if trim_trailing_breaks {
        while lines.len() > 1 && lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
    }

    let mut cell = String::with_capacity(text.len() + 5 + lines.len() * 4);
    for (i, line) in lines.iter().enumerate() {
        cell.push_str(if i == 0 { "<pre>" } else { "<br>" });
        cell.push_str(&escape_markdown(line));
    }
    cell
}
