//! Per-step trace of a single run.

use log::debug;
use sov_core::UniformSource;
use sov_model::SovModel;

use crate::StepObserver;

/// Run `steps` steps on `model`, reporting density and mean velocity at the
/// start of every step.
///
/// There is no warm-up and no averaging: step 0 reports the initial state.
pub fn trace<R, O>(model: &mut SovModel<R>, steps: u64, observer: &mut O)
where
    R: UniformSource,
    O: StepObserver + ?Sized,
{
    debug!(
        "trace α={} β={} for {steps} steps",
        model.config().alpha,
        model.config().beta
    );
    for step in 0..steps {
        observer.on_step(step, model.density(), model.mean_velocity());
        model.step();
    }
    observer.on_run_end(steps);
}
