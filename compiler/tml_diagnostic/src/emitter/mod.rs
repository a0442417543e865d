//! Diagnostic Emitters
//!
//! Provides different output formats for diagnostics:
//! - Terminal: human-readable output with a source snippet and optional color
//! - JSON: a single JSON array of diagnostic objects, for editors and scripts
//!
//! Both emitters implement [`DiagnosticEmitter`]. When given a
//! [`RenderSource`] they resolve spans to `line:col`; without one they fall
//! back to raw byte ranges.

mod json;
mod terminal;

pub use json::JsonEmitter;
pub use terminal::{ColorMode, TerminalEmitter};

use crate::span_utils::LineOffsetTable;
use crate::Diagnostic;
use tml_ir::Span;

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Flush any buffered output.
    fn flush(&mut self);
}

/// The source a diagnostic's spans point into.
#[derive(Clone, Debug)]
pub struct RenderSource {
    path: String,
    content: String,
    lines: LineOffsetTable,
}

impl RenderSource {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let lines = LineOffsetTable::build(&content);
        RenderSource {
            path: path.into(),
            content,
            lines,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// 1-based `(line, column)` of the start of `span`.
    pub fn line_col(&self, span: Span) -> (u32, u32) {
        self.lines.offset_to_line_col(&self.content, span.start)
    }

    /// Text of the line containing the start of `span`.
    pub fn line_text(&self, span: Span) -> &str {
        let line = self.lines.line_from_offset(span.start);
        self.lines.line_text(&self.content, line).unwrap_or("")
    }

    /// Number of characters of `span` that fall on its first line.
    ///
    /// Never less than one, so empty spans (end of input, a point) still get
    /// a visible marker.
    pub fn underline_width(&self, span: Span) -> usize {
        let range = span.to_range();
        let start = range.start.min(self.content.len());
        let end = range.end.clamp(start, self.content.len());
        let covered = self.content.get(start..end).unwrap_or("");
        covered
            .split('\n')
            .next()
            .map_or(0, |first| first.chars().count())
            .max(1)
    }
}
