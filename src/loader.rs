//! Loading the text files that directives reference.
//!
//! A failed read is reported as a [`FileReadError`] rather than a crate-level
//! error: generators turn it into visible text in the document instead of
//! aborting the rewrite.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// A referenced file could not be read.
#[derive(Error, Debug)]
#[error("failed to read '{}': {}", .path.display(), .source)]
pub struct FileReadError {
    /// The path as it was resolved for reading.
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Read the full text content of `path`.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD. The file handle
/// is scoped to this call and closed on every exit path.
pub fn load_text<P: AsRef<Path>>(path: P) -> Result<String, FileReadError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| FileReadError {
        path: path.to_path_buf(),
        source,
    })?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            debug!(path = %path.display(), "replacing invalid UTF-8 in source file");
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}
