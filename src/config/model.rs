//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a rewrite run.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Marker settings
    // =========================================================================
    /// Tag inside the Begin marker: `<!-- {begin_tag}:directive -->`.
    #[serde(default = "default_begin_tag")]
    pub begin_tag: String,

    /// Tag inside the End marker: any line containing `<!-- {end_tag}`.
    #[serde(default = "default_end_tag")]
    pub end_tag: String,

    // =========================================================================
    // Generator settings
    // =========================================================================
    /// Directory that relative file paths in directives are resolved against.
    /// When unset, paths are used as written (relative to the working directory).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<PathBuf>,

    /// Drop trailing blank source lines so table cells do not end in `<br>` runs.
    #[serde(default)]
    pub trim_trailing_breaks: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            begin_tag: default_begin_tag(),
            end_tag: default_end_tag(),
            base_dir: None,
            trim_trailing_breaks: false,
        }
    }
}
