//! Warm-up and sampling driver for a single (α, β) configuration.

use log::debug;
use sov_core::{CountingMode, ModelConfig, RunConfig, UniformSource};
use sov_model::SovModel;

use crate::SimResult;

/// Time-averaged observables of one sampling run.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observables {
    pub density:           f64,
    pub velocity:          f64,
    /// Mean of the per-step `velocity × density`.
    pub flux:              f64,
    /// Mean of the per-step moved fraction from the counting sample.
    pub counting_velocity: f64,
    /// Mean of the per-step `counting_velocity × density`.
    pub counting_flux:     f64,
}

impl Observables {
    /// `(density, velocity, flux, counting_velocity, counting_flux)`.
    pub fn as_tuple(&self) -> (f64, f64, f64, f64, f64) {
        (
            self.density,
            self.velocity,
            self.flux,
            self.counting_velocity,
            self.counting_flux,
        )
    }
}

/// Running sums over the sampled steps.
#[derive(Default)]
struct Accumulator {
    density:           f64,
    velocity:          f64,
    flux:              f64,
    counting_velocity: f64,
    counting_flux:     f64,
}

impl Accumulator {
    fn add(&mut self, density: f64, velocity: f64, counting_velocity: f64) {
        self.density += density;
        self.velocity += velocity;
        self.flux += velocity * density;
        self.counting_velocity += counting_velocity;
        self.counting_flux += counting_velocity * density;
    }

    fn mean(self, samples: u64) -> Observables {
        let n = samples as f64;
        Observables {
            density:           self.density / n,
            velocity:          self.velocity / n,
            flux:              self.flux / n,
            counting_velocity: self.counting_velocity / n,
            counting_flux:     self.counting_flux / n,
        }
    }
}

/// Run warm-up then sampling on `model`, which is advanced in place.
///
/// # Errors
///
/// Rejects `run.sample_steps == 0`.
pub fn simulate_with<R: UniformSource>(model: &mut SovModel<R>, run: &RunConfig) -> SimResult<Observables> {
    run.validate()?;

    for _ in 0..run.ignore_steps {
        model.step();
    }

    let mut acc = Accumulator::default();
    for _ in 0..run.sample_steps {
        model.step();

        let velocity = model.mean_velocity();
        let density = model.density();
        let counting_velocity = match run.counting {
            CountingMode::Advance => model.update(),
            CountingMode::Probe => model.probe(),
        };

        acc.add(density, velocity, counting_velocity);
    }

    let obs = acc.mean(run.sample_steps);
    debug!(
        "run α={} β={}: ρ={:.4} v={:.4} J={:.4} Jc={:.4}",
        model.config().alpha,
        model.config().beta,
        obs.density,
        obs.velocity,
        obs.flux,
        obs.counting_flux
    );
    Ok(obs)
}

/// One reproducible run on a fresh, empty model.
pub fn simulate_seeded(config: ModelConfig, run: &RunConfig, seed: u64) -> SimResult<Observables> {
    let mut model = SovModel::seeded(config, seed)?;
    simulate_with(&mut model, run)
}

/// One run on a fresh default segment with an entropy-seeded random source.
///
/// Uses [`CountingMode::Advance`].
pub fn simulate(alpha: f64, beta: f64, ignore_steps: u64, sample_steps: u64) -> SimResult<Observables> {
    let mut model = SovModel::new(alpha, beta)?;
    simulate_with(&mut model, &RunConfig::new(ignore_steps, sample_steps))
}
