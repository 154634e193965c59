//! JSON Emitter
//!
//! Machine-readable diagnostic output in JSON format.

use std::io::Write;

use crate::Diagnostic;

use super::DiagnosticEmitter;

/// JSON emitter for machine-readable output.
///
/// Diagnostics are buffered and written as one JSON array per `flush`.
pub struct JsonEmitter<W: Write> {
    writer: W,
    pending: Vec<Diagnostic>,
}

impl<W: Write> JsonEmitter<W> {
    /// Create a new JSON emitter.
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            pending: Vec::new(),
        }
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.pending.push(diagnostic.clone());
    }

    fn flush(&mut self) {
        let _ = serde_json::to_writer_pretty(&mut self.writer, &self.pending);
        let _ = writeln!(self.writer);
        let _ = self.writer.flush();
        self.pending.clear();
    }

    fn emit_summary(&mut self, _error_count: usize, _warning_count: usize) {
        // JSON output doesn't need a summary - the data speaks for itself
    }
}
