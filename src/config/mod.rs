//! Configuration model for mdautogen.
//!
//! This module defines the Config struct that represents `.mdautogen.yaml`.
//! Every key is optional: a missing file, an empty file and a file with
//! unknown keys all produce a usable config.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::DEFAULT_CONFIG_FILE;
