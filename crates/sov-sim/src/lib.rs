//! `sov-sim` — drivers for the stochastic optimal-velocity traffic model.
//!
//! # Sampling run
//!
//! ```text
//! model = fresh SovModel(α, β), empty, own random source
//! repeat ignore_steps:  update; boundary                  (discarded)
//! repeat sample_steps:
//!   ① update; boundary
//!   ② v = mean_velocity, ρ = density
//!   ③ cv = counting sample (second update, or non-mutating probe)
//!   ④ accumulate ρ, v, v·ρ, cv, cv·ρ
//! divide every accumulator by sample_steps
//! ```
//!
//! # Drivers
//!
//! | Function                | Purpose                                          |
//! |-------------------------|--------------------------------------------------|
//! | [`simulate`]            | one (α, β) run, entropy-seeded                   |
//! | [`simulate_seeded`]     | one reproducible run                             |
//! | [`simulate_with`]       | drive a caller-supplied model                    |
//! | [`trace`]               | per-step density/velocity, no warm-up or average |
//! | [`run_sweep`]           | the full α × β × sample grid                     |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs sweep grid points on Rayon's thread pool.         |
//! | `serde`    | Derives `Serialize`/`Deserialize` on result types.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sov_sim::simulate;
//!
//! let obs = simulate(0.2, 0.6, 100, 2000)?;
//! println!("density {:.3}  flux {:.3}", obs.density, obs.counting_flux);
//! ```

pub mod driver;
pub mod error;
pub mod observer;
pub mod sweep;
pub mod trace;


pub use driver::{Observables, simulate, simulate_seeded, simulate_with};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, StepObserver, SweepObserver};
pub use sweep::{SweepRecord, run_sweep, run_sweep_observed};
pub use trace::trace;
