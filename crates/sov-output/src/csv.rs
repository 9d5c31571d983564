//! CSV output backend.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::BufWriter;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use ::csv::Writer;
use log::{debug, warn};

use crate::row::{CsvRow, SweepRow, TraceRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// Writes rows of type `R` to one CSV file.
///
/// Rows go to `<path>.partial` while the run is in progress; `finish`
/// flushes and renames it onto `path`.  Dropping an unfinished writer
/// removes the partial file, as does a failed `finish`; every later
/// `finish` then reports [`OutputError::Unpublished`].
pub struct CsvWriter<R: CsvRow> {
    writer:  Option<Writer<BufWriter<File>>>,
    partial: PathBuf,
    target:  PathBuf,
    rows:    u64,
    failed:  bool,
    _row:    PhantomData<fn(&R)>,
}

/// `Alpha,Beta,Density,Flux` — one row per sweep sample.
pub type SweepCsvWriter = CsvWriter<SweepRow>;

/// `Step,Density,Velocity` — one row per trace step.
pub type TraceCsvWriter = CsvWriter<TraceRow>;

fn partial_path(target: &Path) -> PathBuf {
    let mut name: OsString = target.file_name().map(OsString::from).unwrap_or_default();
    name.push(".partial");
    target.with_file_name(name)
}

impl<R: CsvRow> CsvWriter<R> {
    /// Open the partial file next to `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        let target = path.to_path_buf();
        let partial = partial_path(&target);

        let file = File::create(&partial)?;
        let mut writer = Writer::from_writer(BufWriter::new(file));
        writer.write_record(R::HEADER)?;

        Ok(Self {
            writer: Some(writer),
            partial,
            target,
            rows: 0,
            failed: false,
            _row: PhantomData,
        })
    }

    /// Destination path the output appears at after `finish`.
    pub fn path(&self) -> &Path {
        &self.target
    }

    /// Data rows written so far (header excluded).
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// True once the output has been published at [`path`][Self::path].
    pub fn is_finished(&self) -> bool {
        self.writer.is_none() && !self.failed
    }

    fn publish(&self, mut writer: Writer<BufWriter<File>>) -> OutputResult<()> {
        writer.flush()?;
        // Dropping the writer closes the file before the rename.
        drop(writer);
        fs::rename(&self.partial, &self.target)?;
        Ok(())
    }
}

impl<R: CsvRow> OutputWriter for CsvWriter<R> {
    type Row = R;

    fn write_row(&mut self, row: &R) -> OutputResult<()> {
        let writer = self.writer.as_mut().ok_or(OutputError::Finished)?;
        writer.write_record(row.fields())?;
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        let Some(writer) = self.writer.take() else {
            if self.failed {
                return Err(OutputError::Unpublished(self.target.clone()));
            }
            return Ok(());
        };
        if let Err(e) = self.publish(writer) {
            self.failed = true;
            if let Err(rm) = fs::remove_file(&self.partial) {
                warn!("could not remove {}: {rm}", self.partial.display());
            }
            return Err(e);
        }
        debug!("wrote {} rows to {}", self.rows, self.target.display());
        Ok(())
    }
}

impl<R: CsvRow> Drop for CsvWriter<R> {
    fn drop(&mut self) {
        if self.writer.take().is_some() {
            if let Err(e) = fs::remove_file(&self.partial) {
                warn!("could not remove {}: {e}", self.partial.display());
            }
        }
    }
}
