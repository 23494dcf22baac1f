//! Hand-written scanner for directive text.

use super::types::Directive;
use crate::error::{MdautogenError, Result};

/// Parse the payload of a Begin marker into a [`Directive`].
///
/// Surrounding whitespace is ignored. Arguments are single- or double-quoted;
/// inside quotes a backslash escapes the next character.
///
/// # Returns
///
/// * `Ok(Directive)` - The command name and its unquoted arguments
/// * `Err(MdautogenError::DirectiveParse)` - With the byte offset of the problem
///
/// # Example
///
/// ```
/// use mdautogen::directive::parse_directive;
///
/// let directive = parse_directive(" code_table('a.js', \"b.hpp\") ").unwrap();
/// assert_eq!(directive.name, "code_table");
/// assert_eq!(directive.args, vec!["a.js", "b.hpp"]);
/// ```
pub fn parse_directive(text: &str) -> Result<Directive> {
    let mut scanner = Scanner::new(text);

    scanner.skip_whitespace();
    let name = scanner.identifier()?;

    scanner.skip_whitespace();
    scanner.expect('(')?;

    let mut args = Vec::new();
    scanner.skip_whitespace();
    if !scanner.eat(')') {
        loop {
            scanner.skip_whitespace();
            args.push(scanner.quoted()?);
            scanner.skip_whitespace();
            if scanner.eat(',') {
                continue;
            }
            scanner.expect(')')?;
            break;
        }
    }

    scanner.skip_whitespace();
    if let Some(c) = scanner.peek() {
        return Err(scanner.error(format!("unexpected '{}' after ')'", c)));
    }

    Ok(Directive { name, args })
}

struct Scanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        if self.eat(expected) {
            return Ok(());
        }
        let found = match self.peek() {
            Some(c) => format!("'{}'", c),
            None => "end of directive".to_string(),
        };
        Err(self.error(format!("expected '{}', found {}", expected, found)))
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn identifier(&mut self) -> Result<String> {
        let start = self.pos;
        match self.peek() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                self.bump();
            }
            _ => return Err(self.error("expected a command name".to_string())),
        }
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.bump();
        }
        Ok(self.text[start..self.pos].to_string())
    }

    fn quoted(&mut self) -> Result<String> {
        let quote = match self.peek() {
            Some(q @ ('\'' | '"')) => q,
            _ => return Err(self.error("expected a quoted string argument".to_string())),
        };
        let start = self.pos;
        self.bump();

        let mut value = String::new();
        loop {
            match self.bump() {
                Some('\\') => match self.bump() {
                    Some(c) => value.push(c),
                    None => break,
                },
                Some(c) if c == quote => return Ok(value),
                Some(c) => value.push(c),
                None => break,
            }
        }

        self.pos = start;
        Err(self.error("unterminated string argument".to_string()))
    }

    fn error(&self, reason: String) -> MdautogenError {
        MdautogenError::DirectiveParse {
            directive: self.text.trim().to_string(),
            offset: self.pos,
            reason,
        }
    }
}
