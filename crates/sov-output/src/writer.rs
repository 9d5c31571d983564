//! The `OutputWriter` trait implemented by all backend writers.

use crate::OutputResult;

/// A sink for one kind of row.
///
/// Observers never propagate errors from these methods directly; they store
/// the first one, retrievable with `take_error`.
pub trait OutputWriter {
    type Row;

    fn write_row(&mut self, row: &Self::Row) -> OutputResult<()>;

    /// Flush and publish the output.
    ///
    /// Idempotent after a successful publish.
    fn finish(&mut self) -> OutputResult<()>;
}
