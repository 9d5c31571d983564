//! `SovModel<R>` — one model instance: configuration, register, random source.

use std::fmt;

use sov_core::{ModelConfig, SimRng, SovError, SovResult, UniformSource};

use crate::boundary::{self, BoundaryEvents};
use crate::register::VehicleRegister;
use crate::velocity::optimal_velocity;
use crate::{dynamics, stats};

/// A single open segment of `N` cells and the vehicles on it.
///
/// The model owns its random source, so independent instances can run on
/// different threads without sharing any state.
///
/// # Type parameter
///
/// `R` is the uniform random source.  Production runs use [`SimRng`]; tests
/// substitute [`sov_core::FixedUniform`] or [`sov_core::ScriptedUniform`] to
/// force particular outcomes.
pub struct SovModel<R: UniformSource = SimRng> {
    config:   ModelConfig,
    register: VehicleRegister,
    rng:      R,
}

impl SovModel<SimRng> {
    /// Default segment (`N = 200`, `a = 0.01`, `c = 1.5`), empty, with an
    /// entropy-seeded random source.
    pub fn new(alpha: f64, beta: f64) -> SovResult<Self> {
        Self::from_config(ModelConfig::new(alpha, beta), SimRng::from_entropy())
    }

    /// Reproducible instance: the same `config` and `seed` always produce the
    /// same trajectory.
    pub fn seeded(config: ModelConfig, seed: u64) -> SovResult<Self> {
        Self::from_config(config, SimRng::new(seed))
    }
}

impl<R: UniformSource> SovModel<R> {
    /// An empty segment described by `config`, drawing from `rng`.
    pub fn from_config(config: ModelConfig, rng: R) -> SovResult<Self> {
        config.validate()?;
        Ok(Self {
            register: VehicleRegister::new(config.cells),
            config,
            rng,
        })
    }

    /// Start from a pre-populated register instead of an empty one.
    ///
    /// # Errors
    ///
    /// Fails if `config` is invalid or the register was built for a different
    /// segment length.
    pub fn with_register(config: ModelConfig, register: VehicleRegister, rng: R) -> SovResult<Self> {
        config.validate()?;
        if register.cells() != config.cells {
            return Err(SovError::Config(format!(
                "register has {} cells but config expects {}",
                register.cells(),
                config.cells
            )));
        }
        register.check_invariants()?;
        Ok(Self { config, register, rng })
    }

    // ── Engines ───────────────────────────────────────────────────────────

    /// One dynamics step.  Returns the fraction of vehicles that moved.
    pub fn update(&mut self) -> f64 {
        dynamics::update(&mut self.register, &self.config, &mut self.rng)
    }

    /// The fraction that would move on the next `update`, without moving them.
    pub fn probe(&mut self) -> f64 {
        dynamics::probe(&self.register, &self.config, &mut self.rng)
    }

    /// One boundary step.
    pub fn boundary(&mut self) -> BoundaryEvents {
        boundary::boundary(&mut self.register, &self.config, &mut self.rng)
    }

    /// One full simulation step: `update`, then `boundary`.
    pub fn step(&mut self) -> (f64, BoundaryEvents) {
        let moved = self.update();
        let events = self.boundary();
        (moved, events)
    }

    // ── Observables ───────────────────────────────────────────────────────

    /// `V(dx)` with this model's shape parameter.
    #[inline]
    pub fn velocity_function(&self, dx: f64) -> f64 {
        optimal_velocity(dx, self.config.shape)
    }

    pub fn mean_velocity(&self) -> f64 {
        stats::mean_velocity(&self.register)
    }

    pub fn density(&self) -> f64 {
        stats::density(&self.register)
    }

    pub fn flux(&self) -> f64 {
        stats::flux(&self.register)
    }

    pub fn render(&self) -> String {
        self.register.render()
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Read-only view of the vehicles.
    pub fn register(&self) -> &VehicleRegister {
        &self.register
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

impl<R: UniformSource> fmt::Display for SovModel<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.register, f)
    }
}
