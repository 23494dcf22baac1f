//! The parsed form of a directive.

use std::fmt;

/// A command name plus its ordered string arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Command name (an identifier).
    pub name: String,
    /// Arguments in call order, with quotes and escapes removed.
    pub args: Vec<String>,
}

impl Directive {
    /// Create a new directive.
    pub fn new<I, S>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str("'")?;
            for c in arg.chars() {
                if c == '\'' || c == '\\' {
                    f.write_str("\\")?;
                }
                write!(f, "{}", c)?;
            }
            f.write_str("'")?;
        }
        f.write_str(")")
    }
}
