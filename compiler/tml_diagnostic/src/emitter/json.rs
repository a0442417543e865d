//! JSON Emitter
//!
//! Machine-readable diagnostic output as a JSON array.

use std::io::Write;

use serde_json::{json, Value};

use crate::Diagnostic;

use super::{DiagnosticEmitter, RenderSource};

/// JSON emitter for machine-readable output.
///
/// Call [`begin`](Self::begin) before the first diagnostic and
/// [`end`](Self::end) after the last one.
pub struct JsonEmitter<W: Write> {
    writer: W,
    first: bool,
    source: Option<RenderSource>,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            first: true,
            source: None,
        }
    }

    /// Attach the source text so labels also carry `file`, `line` and `column`.
    #[must_use]
    pub fn with_source(mut self, source: RenderSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Begin the JSON array output.
    pub fn begin(&mut self) {
        let _ = writeln!(self.writer, "[");
    }

    /// End the JSON array output.
    pub fn end(&mut self) {
        if self.first {
            let _ = writeln!(self.writer, "]");
        } else {
            let _ = writeln!(self.writer, "\n]");
        }
    }

    fn to_value(&self, diagnostic: &Diagnostic) -> Value {
        let labels: Vec<Value> = diagnostic
            .labels
            .iter()
            .map(|label| {
                let mut value = json!({
                    "start": label.span.start,
                    "end": label.span.end,
                    "message": label.message,
                    "primary": label.is_primary,
                });
                if let (Some(source), Value::Object(map)) = (&self.source, &mut value) {
                    let (line, column) = source.line_col(label.span);
                    map.insert("file".to_owned(), json!(source.path()));
                    map.insert("line".to_owned(), json!(line));
                    map.insert("column".to_owned(), json!(column));
                }
                value
            })
            .collect();

        json!({
            "code": diagnostic.code.as_str(),
            "message": diagnostic.message,
            "labels": labels,
            "notes": diagnostic.notes,
        })
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        if !self.first {
            let _ = writeln!(self.writer, ",");
        }
        self.first = false;

        let value = self.to_value(diagnostic);
        let _ = write!(self.writer, "  {value}");
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
