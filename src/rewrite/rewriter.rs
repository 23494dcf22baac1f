//! Core rewrite loop.

use crate::config::Config;
use crate::directive::parse_directive;
use crate::error::{MdautogenError, Result};
use crate::generator::{GeneratorRegistry, RenderContext};
use crate::marker::{Marker, MarkerPatterns};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

use super::types::{Mode, RewriteSummary};

/// Rewrites marker regions using a fixed config and generator registry.
#[derive(Debug)]
pub struct Rewriter<'a> {
    config: &'a Config,
    registry: &'a GeneratorRegistry,
    patterns: MarkerPatterns,
}

impl<'a> Rewriter<'a> {
    /// Create a rewriter, compiling marker patterns from `config`.
    pub fn new(config: &'a Config, registry: &'a GeneratorRegistry) -> Result<Self> {
        Ok(Self {
            config,
            registry,
            patterns: MarkerPatterns::from_config(config)?,
        })
    }

    /// Rewrite `input` into `output` in a single pass.
    ///
    /// Each line is written before the next one is read. On a directive
    /// error the rewrite stops: everything up to and including the offending
    /// Begin marker has been written, nothing after it is.
    ///
    /// An unclosed Begin marker is not an error; the rest of the input is
    /// dropped and the summary reports `final_mode == Mode::Suppressed`.
    ///
    /// # Example
    ///
    /// ```
    /// use mdautogen::config::Config;
    /// use mdautogen::generator::GeneratorRegistry;
    /// use mdautogen::rewrite::Rewriter;
    ///
    /// let config = Config::default();
    /// let registry = GeneratorRegistry::with_builtins();
    /// let rewriter = Rewriter::new(&config, &registry)?;
    ///
    /// let mut output = Vec::new();
    /// let summary = rewriter.rewrite("no markers\n".as_bytes(), &mut output)?;
    /// assert_eq!(output, b"no markers\n");
    /// assert_eq!(summary.lines_echoed, 1);
    /// # Ok::<(), mdautogen::error::MdautogenError>(())
    /// ```
    pub fn rewrite<R: BufRead, W: Write>(
        &self,
        mut input: R,
        mut output: W,
    ) -> Result<RewriteSummary> {
        let ctx = RenderContext::new(self.config);
        let mut summary = RewriteSummary::default();
        let mut mode = Mode::Passthrough;
        let mut line = Vec::new();

        loop {
            line.clear();
            let read = input
                .read_until(b'\n', &mut line)
                .map_err(|e| MdautogenError::io("failed to read input", e))?;
            if read == 0 {
                break;
            }
            summary.lines_read += 1;

            let (content, terminator) = split_terminator(&line);

            // Lines that are not valid UTF-8 are never markers.
            let marker = std::str::from_utf8(content)
                .ok()
                .and_then(|text| self.patterns.classify(text));

            match marker {
                Some(Marker::Begin(payload)) => {
                    debug!(line = summary.lines_read, "begin marker");
                    if mode == Mode::Suppressed {
                        warn!(
                            line = summary.lines_read,
                            "begin marker inside an open region, previous region left unclosed"
                        );
                    }

                    emit(&mut output, &line)?;
                    summary.lines_echoed += 1;

                    let directive = parse_directive(payload)?;
                    let block = self.registry.dispatch(&directive, &ctx)?;

                    if terminator.is_empty() {
                        emit(&mut output, b"\n")?;
                    }
                    emit(&mut output, block.as_bytes())?;
                    emit(&mut output, b"\n")?;
                    summary.blocks_generated += 1;

                    mode = Mode::Suppressed;
                }
                Some(Marker::End) => {
                    debug!(line = summary.lines_read, "end marker");
                    emit(&mut output, &line)?;
                    summary.lines_echoed += 1;
                    mode = Mode::Passthrough;
                }
                None if mode == Mode::Suppressed => {
                    summary.lines_suppressed += 1;
                }
                None => {
                    emit(&mut output, &line)?;
                    summary.lines_echoed += 1;
                }
            }
        }

        summary.final_mode = mode;
        if summary.is_unterminated() {
            warn!(
                dropped = summary.lines_suppressed,
                "input ended inside a marker region; trailing lines were dropped"
            );
        }
        info!(
            lines_read = summary.lines_read,
            lines_echoed = summary.lines_echoed,
            lines_suppressed = summary.lines_suppressed,
            blocks_generated = summary.blocks_generated,
            "rewrite complete"
        );

        Ok(summary)
    }
}

/// Rewrite an in-memory document with the built-in generators.
pub fn rewrite_str(input: &str, config: &Config) -> Result<String> {
    let registry = GeneratorRegistry::with_builtins();
    let rewriter = Rewriter::new(config, &registry)?;

    let mut output = Vec::with_capacity(input.len());
    rewriter.rewrite(input.as_bytes(), &mut output)?;

    // Every byte written is either copied from `input` or generated from a
    // `String`, so the buffer is valid UTF-8.
    String::from_utf8(output).map_err(|e| {
        MdautogenError::io(
            "rewritten output is not valid UTF-8",
            std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        )
    })
}

/// Split a line read by `read_until` into its content and `\n` / `\r\n` terminator.
fn split_terminator(line: &[u8]) -> (&[u8], &[u8]) {
    if let Some(content) = line.strip_suffix(&b"\r\n"[..]) {
        (content, &b"\r\n"[..])
    } else if let Some(content) = line.strip_suffix(&b"\n"[..]) {
        (content, &b"\n"[..])
    } else {
        (line, &b""[..])
    }
}

fn emit<W: Write>(output: &mut W, bytes: &[u8]) -> Result<()> {
    output
        .write_all(bytes)
        .map_err(|e| MdautogenError::io("failed to write output", e))
}
