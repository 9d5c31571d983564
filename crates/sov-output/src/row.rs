//! Plain data row types written by output backends.

use sov_sim::SweepRecord;

/// A row type with a fixed CSV header.
pub trait CsvRow {
    const HEADER: &'static [&'static str];

    /// Field values in `HEADER` order.
    fn fields(&self) -> Vec<String>;
}

/// One sweep sample.  `flux` is the run's counting flux.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRow {
    pub alpha:   f64,
    pub beta:    f64,
    pub density: f64,
    pub flux:    f64,
}

impl From<&SweepRecord> for SweepRow {
    fn from(record: &SweepRecord) -> Self {
        Self {
            alpha:   record.alpha,
            beta:    record.beta,
            density: record.observables.density,
            flux:    record.observables.counting_flux,
        }
    }
}

impl CsvRow for SweepRow {
    const HEADER: &'static [&'static str] = &["Alpha", "Beta", "Density", "Flux"];

    fn fields(&self) -> Vec<String> {
        vec![
            self.alpha.to_string(),
            self.beta.to_string(),
            self.density.to_string(),
            self.flux.to_string(),
        ]
    }
}

/// Observables at the start of one trace step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceRow {
    pub step:     u64,
    pub density:  f64,
    pub velocity: f64,
}

impl CsvRow for TraceRow {
    const HEADER: &'static [&'static str] = &["Step", "Density", "Velocity"];

    fn fields(&self) -> Vec<String> {
        vec![
            self.step.to_string(),
            self.density.to_string(),
            self.velocity.to_string(),
        ]
    }
}
