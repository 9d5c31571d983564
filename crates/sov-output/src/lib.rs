//! `sov-output` — CSV output for the `sov` drivers.
//!
//! | Writer            | Header                           | One row per          |
//! |-------------------|----------------------------------|----------------------|
//! | `SweepCsvWriter`  | `Alpha,Beta,Density,Flux`        | sweep sample         |
//! | `TraceCsvWriter`  | `Step,Density,Velocity`          | trace step           |
//!
//! The sweep `Flux` column carries the *counting* flux of each run.
//!
//! Writers stream into a `<name>.partial` sibling and rename it onto the
//! destination in [`OutputWriter::finish`].  A run that fails or is dropped
//! part-way leaves the destination path untouched.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sov_output::{SweepCsvWriter, SweepOutputObserver};
//!
//! let writer = SweepCsvWriter::create(Path::new("data.csv"))?;
//! let mut obs = SweepOutputObserver::new(writer);
//! sov_sim::run_sweep_observed(&config, &mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::{CsvWriter, SweepCsvWriter, TraceCsvWriter};
pub use error::{OutputError, OutputResult};
pub use observer::{SweepOutputObserver, TraceOutputObserver};
pub use row::{CsvRow, SweepRow, TraceRow};
pub use writer::OutputWriter;
