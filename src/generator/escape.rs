//! Escaping of source lines embedded in table cells.

/// Escape the characters that Markdown renderers would otherwise interpret
/// inside a `<pre>` table cell.
///
/// Substitutions run in a fixed order: `:` → `\:`, then `<` → `\<`, then
/// `>` → `\>`.
pub fn escape_markdown(line: &str) -> String {
    line.replace(':', "\\:")
        .replace('<', "\\<")
        .replace('>', "\\>")
}

/// Escape `|` so text placed in a table cell cannot split the row.
///
/// Used for headers and inline error messages; file content goes through
/// [`escape_markdown`] only.
pub fn escape_cell_text(text: &str) -> String {
    text.replace('|', "\\|")
}
