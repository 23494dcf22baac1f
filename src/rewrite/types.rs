//! Rewriter state and run statistics.

/// Whether non-marker lines are currently echoed or dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Outside a marker region: lines are echoed.
    #[default]
    Passthrough,
    /// Inside a marker region: lines are dropped.
    Suppressed,
}

/// Counters for a single rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RewriteSummary {
    /// Input lines consumed.
    pub lines_read: usize,
    /// Input lines written back out (markers included).
    pub lines_echoed: usize,
    /// Input lines dropped inside marker regions.
    pub lines_suppressed: usize,
    /// Generated blocks written.
    pub blocks_generated: usize,
    /// Mode at end of input; `Suppressed` means a Begin marker was never closed.
    pub final_mode: Mode,
}

impl RewriteSummary {
    /// True if input ended inside a marker region.
    pub fn is_unterminated(&self) -> bool {
        self.final_mode == Mode::Suppressed
    }
}
