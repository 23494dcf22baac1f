//! Constants and default value functions used by the Config struct.

/// File name looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = ".mdautogen.yaml";

pub fn default_begin_tag() -> String {
    "BEGIN_MDAUTOGEN".to_string()
}

pub fn default_end_tag() -> String {
    "END_MDAUTOGEN".to_string()
}

/// Characters allowed in a marker tag.
///
/// Tags are spliced into a regex, so they are restricted to characters that
/// never need escaping.
pub fn is_tag_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}
