//! Config loading, validation, and path resolution.

use super::model::Config;
use super::types::{DEFAULT_CONFIG_FILE, is_tag_char};
use crate::error::{MdautogenError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(MdautogenError::Config)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            MdautogenError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!(path = %path.display(), "loaded config file");
        Self::from_yaml(&content)
    }

    /// Resolve the config for a run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] in
    /// `cwd` is used if present, and defaults otherwise.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = cwd.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(candidate)
        } else {
            debug!("no config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the default config.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| MdautogenError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            MdautogenError::Config(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `begin_tag` and `end_tag` must be non-empty
    /// - tags may contain only ASCII letters, digits, `_` and `-`
    /// - `begin_tag` and `end_tag` must differ
    pub fn validate(&self) -> Result<()> {
        for (key, tag) in [("begin_tag", &self.begin_tag), ("end_tag", &self.end_tag)] {
            if tag.is_empty() {
                return Err(MdautogenError::Config(format!(
                    "config validation failed: {} must be non-empty",
                    key
                )));
            }
            if !tag.chars().all(is_tag_char) {
                return Err(MdautogenError::Config(format!(
                    "config validation failed: {} '{}' may only contain letters, digits, '_' and '-'",
                    key, tag
                )));
            }
        }

        if self.begin_tag == self.end_tag {
            return Err(MdautogenError::Config(
                "config validation failed: begin_tag and end_tag must differ".to_string(),
            ));
        }

        Ok(())
    }

    /// Resolve a path named in a directive against `base_dir`.
    ///
    /// Absolute paths are returned unchanged.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}
