//! Model, run, and sweep configuration.
//!
//! All three structs are plain data with `pub` fields and a `validate()`
//! method.  Drivers call `validate()` before building anything, so the
//! engines themselves never see an out-of-range parameter.

use crate::{SovError, SovResult};

/// Number of cells in the segment.
pub const DEFAULT_CELLS: usize = 200;
/// Relaxation rate `a`.
pub const DEFAULT_RELAXATION: f64 = 0.01;
/// Shape parameter `c` of the optimal velocity function.
pub const DEFAULT_SHAPE: f64 = 1.5;

fn check_probability(name: &str, p: f64) -> SovResult<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(SovError::Config(format!("{name} must be in [0, 1], got {p}")))
    }
}

// ── ModelConfig ───────────────────────────────────────────────────────────────

/// Parameters of one model instance.  Immutable for the lifetime of a run.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelConfig {
    /// Segment length `N` in cells.  Vehicles occupy cells `0..N`.
    pub cells: usize,
    /// Relaxation rate `a`, in `(0, 1)`.
    pub relaxation: f64,
    /// Shape parameter `c` of the optimal velocity function.
    pub shape: f64,
    /// Injection probability `α` at cell 0.
    pub alpha: f64,
    /// Ejection probability `β` at cell `N - 1`.
    pub beta: f64,
}

impl ModelConfig {
    /// Default segment (`N = 200`, `a = 0.01`, `c = 1.5`) with the given
    /// boundary probabilities.
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self {
            cells:      DEFAULT_CELLS,
            relaxation: DEFAULT_RELAXATION,
            shape:      DEFAULT_SHAPE,
            alpha,
            beta,
        }
    }

    /// Copy of `self` with different boundary probabilities.
    pub fn with_boundary(self, alpha: f64, beta: f64) -> Self {
        Self { alpha, beta, ..self }
    }

    /// Index of the exit cell, `N - 1`.
    #[inline]
    pub fn last_cell(&self) -> usize {
        self.cells - 1
    }

    pub fn validate(&self) -> SovResult<()> {
        if self.cells == 0 {
            return Err(SovError::Config("segment must have at least one cell".into()));
        }
        if !(self.relaxation > 0.0 && self.relaxation < 1.0) {
            return Err(SovError::Config(format!(
                "relaxation rate must be in (0, 1), got {}",
                self.relaxation
            )));
        }
        if !self.shape.is_finite() {
            return Err(SovError::Config(format!("shape parameter must be finite, got {}", self.shape)));
        }
        check_probability("alpha", self.alpha)?;
        check_probability("beta", self.beta)
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// How the per-step "counting velocity" sample is obtained.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CountingMode {
    /// Call `update()` a second time.  The state advances again without a
    /// matching boundary step; this reproduces the historical data sets.
    #[default]
    Advance,
    /// Measure the would-be moved fraction without mutating the state.
    Probe,
}

/// Step counts for one `simulate` call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Warm-up steps, discarded.
    pub ignore_steps: u64,
    /// Sampled steps, averaged.  Must be positive.
    pub sample_steps: u64,
    pub counting: CountingMode,
}

impl RunConfig {
    pub fn new(ignore_steps: u64, sample_steps: u64) -> Self {
        Self { ignore_steps, sample_steps, counting: CountingMode::default() }
    }

    pub fn with_counting(self, counting: CountingMode) -> Self {
        Self { counting, ..self }
    }

    pub fn validate(&self) -> SovResult<()> {
        if self.sample_steps == 0 {
            return Err(SovError::Config("sample_steps must be positive".into()));
        }
        Ok(())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(100, 2000)
    }
}

// ── SweepConfig ───────────────────────────────────────────────────────────────

/// The α × β × sample grid of a phase-diagram sweep.
///
/// `model.alpha` and `model.beta` are overwritten at every grid point; the
/// other model fields apply to all runs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepConfig {
    pub model:       ModelConfig,
    pub run:         RunConfig,
    /// Half-open α range `[start, end)`.
    pub alpha_start: f64,
    pub alpha_end:   f64,
    /// Half-open β range `[start, end)`.
    pub beta_start:  f64,
    pub beta_end:    f64,
    /// Grid increment for both axes.
    pub step:        f64,
    /// Independent runs per (α, β) point.
    pub samples:     u32,
    /// Master seed.  The same seed always produces identical records.
    pub seed:        u64,
    /// Worker thread count for the `parallel` feature.  `None` uses all
    /// logical cores.
    pub num_threads: Option<usize>,
}

impl SweepConfig {
    /// Grid values `start + i * step` below `end`.
    ///
    /// Computed from the index rather than by repeated addition so that
    /// rounding error does not accumulate along the axis, then snapped to
    /// 1e-9 so that `6 * 0.05` is stored (and printed) as `0.3`.
    fn axis(start: f64, end: f64, step: f64) -> Vec<f64> {
        if !(step > 0.0) {
            return Vec::new();
        }
        (0u32..)
            .map(|i| ((start + f64::from(i) * step) * 1e9).round() / 1e9)
            .take_while(|&v| v < end)
            .collect()
    }

    pub fn alphas(&self) -> Vec<f64> {
        Self::axis(self.alpha_start, self.alpha_end, self.step)
    }

    pub fn betas(&self) -> Vec<f64> {
        Self::axis(self.beta_start, self.beta_end, self.step)
    }

    /// Total number of runs the sweep performs.
    pub fn run_count(&self) -> usize {
        self.alphas().len() * self.betas().len() * self.samples as usize
    }

    pub fn validate(&self) -> SovResult<()> {
        if !(self.step > 0.0 && self.step.is_finite()) {
            return Err(SovError::Config(format!("sweep step must be positive, got {}", self.step)));
        }
        if self.samples == 0 {
            return Err(SovError::Config("samples per grid point must be positive".into()));
        }
        for (name, start, end) in [
            ("alpha", self.alpha_start, self.alpha_end),
            ("beta", self.beta_start, self.beta_end),
        ] {
            check_probability(name, start)?;
            if !(end >= start && end <= 1.0) {
                return Err(SovError::Config(format!(
                    "{name} range [{start}, {end}) is not a sub-range of [0, 1]"
                )));
            }
        }
        self.run.validate()?;
        self.model.validate()
    }
}

impl Default for SweepConfig {
    /// The full unit square in 0.05 steps, 10 samples per point,
    /// 100 warm-up and 2000 sampled steps per run.
    fn default() -> Self {
        Self {
            model:       ModelConfig::default(),
            run:         RunConfig::default(),
            alpha_start: 0.0,
            alpha_end:   1.0,
            beta_start:  0.0,
            beta_end:    1.0,
            step:        0.05,
            samples:     10,
            seed:        42,
            num_threads: None,
        }
    }
}
