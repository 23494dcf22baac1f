//! Begin/End marker detection.
//!
//! The Begin marker must occupy the whole line; the End marker is found by a
//! substring search, so `<!-- END_MDAUTOGEN anything -->` and indented End
//! markers both close a region.

use crate::config::Config;
use crate::error::{MdautogenError, Result};
use regex::Regex;

/// Classification of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker<'a> {
    /// A Begin marker, carrying the raw directive payload.
    Begin(&'a str),
    /// An End marker.
    End,
}

/// Compiled marker patterns for one rewrite run.
#[derive(Debug, Clone)]
pub struct MarkerPatterns {
    begin: Regex,
    end: String,
}

impl MarkerPatterns {
    /// Compile marker patterns for the tags in `config`.
    ///
    /// Tags are validated by [`Config::validate`], so compilation only fails
    /// for a config that bypassed validation.
    pub fn from_config(config: &Config) -> Result<Self> {
        let pattern = format!(r"^<!-- {}:(.+) -->$", regex::escape(&config.begin_tag));
        let begin = Regex::new(&pattern).map_err(|e| {
            MdautogenError::Config(format!(
                "invalid begin_tag '{}': {}",
                config.begin_tag, e
            ))
        })?;

        Ok(Self {
            begin,
            end: format!("<!-- {}", config.end_tag),
        })
    }

    /// Classify a line (without its terminator).
    ///
    /// Begin is checked first, so a line that is a valid Begin marker and
    /// also contains the End substring counts as Begin.
    pub fn classify<'a>(&self, line: &'a str) -> Option<Marker<'a>> {
        if let Some(caps) = self.begin.captures(line) {
            let payload = caps.get(1).map_or("", |m| m.as_str());
            return Some(Marker::Begin(payload));
        }
        if line.contains(&self.end) {
            return Some(Marker::End);
        }
        None
    }
}
