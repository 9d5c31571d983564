//! Observer traits for trace and sweep output.

use crate::SweepRecord;

/// Callbacks invoked by [`trace`][crate::trace] once per step.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — console logger
///
/// ```rust,ignore
/// struct Printer;
///
/// impl StepObserver for Printer {
///     fn on_step(&mut self, step: u64, density: f64, velocity: f64) {
///         println!("{step}, {density}, {velocity}");
///     }
/// }
/// ```
pub trait StepObserver {
    /// Called before step `step` is executed, with the observables of the
    /// state that step starts from.
    fn on_step(&mut self, _step: u64, _density: f64, _velocity: f64) {}

    /// Called once after the last step.
    fn on_run_end(&mut self, _steps: u64) {}
}

/// Callbacks invoked by [`run_sweep_observed`][crate::run_sweep_observed].
///
/// Records always arrive in grid order (α outer, β middle, sample inner),
/// whether or not the `parallel` feature is enabled.
pub trait SweepObserver {
    fn on_record(&mut self, _record: &SweepRecord) {}

    /// Called once after the last grid point with the number of records.
    fn on_sweep_end(&mut self, _records: usize) {}
}

/// An observer that does nothing.
pub struct NoopObserver;

impl StepObserver for NoopObserver {}

impl SweepObserver for NoopObserver {}

impl<T: StepObserver + ?Sized> StepObserver for &mut T {
    fn on_step(&mut self, step: u64, density: f64, velocity: f64) {
        (**self).on_step(step, density, velocity);
    }

    fn on_run_end(&mut self, steps: u64) {
        (**self).on_run_end(steps);
    }
}

impl<T: SweepObserver + ?Sized> SweepObserver for &mut T {
    fn on_record(&mut self, record: &SweepRecord) {
        (**self).on_record(record);
    }

    fn on_sweep_end(&mut self, records: usize) {
        (**self).on_sweep_end(records);
    }
}
