//! Observers that bridge `sov-sim` callbacks to an `OutputWriter`.

use sov_sim::{StepObserver, SweepObserver, SweepRecord};

use crate::row::{SweepRow, TraceRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// Keeps only the first error; later writes are still attempted.
fn store_err(slot: &mut Option<OutputError>, result: OutputResult<()>) {
    if let Err(e) = result {
        if slot.is_none() {
            *slot = Some(e);
        }
    }
}

// ── Sweep ─────────────────────────────────────────────────────────────────────

/// A [`SweepObserver`] that writes one [`SweepRow`] per record and finishes
/// the writer when the sweep ends.
///
/// Observer methods have no return value, so errors are stored.  After the
/// sweep returns, check with [`take_error`][Self::take_error].
pub struct SweepOutputObserver<W: OutputWriter<Row = SweepRow>> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter<Row = SweepRow>> SweepOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<W: OutputWriter<Row = SweepRow>> SweepObserver for SweepOutputObserver<W> {
    fn on_record(&mut self, record: &SweepRecord) {
        let result = self.writer.write_row(&SweepRow::from(record));
        store_err(&mut self.last_error, result);
    }

    fn on_sweep_end(&mut self, _records: usize) {
        let result = self.writer.finish();
        store_err(&mut self.last_error, result);
    }
}

// ── Trace ─────────────────────────────────────────────────────────────────────

/// A [`StepObserver`] that writes one [`TraceRow`] per step and finishes the
/// writer at the end of the run.
pub struct TraceOutputObserver<W: OutputWriter<Row = TraceRow>> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter<Row = TraceRow>> TraceOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<W: OutputWriter<Row = TraceRow>> StepObserver for TraceOutputObserver<W> {
    fn on_step(&mut self, step: u64, density: f64, velocity: f64) {
        let result = self.writer.write_row(&TraceRow { step, density, velocity });
        store_err(&mut self.last_error, result);
    }

    fn on_run_end(&mut self, _steps: u64) {
        let result = self.writer.finish();
        store_err(&mut self.last_error, result);
    }
}
