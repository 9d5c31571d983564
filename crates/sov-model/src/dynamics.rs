//! The dynamics engine: one synchronous velocity/position step.
//!
//! # Update rule
//!
//! ```text
//! for each follower i (rear to front):
//!   dx   = x[i+1] - x[i]                       gap to the vehicle ahead
//!   v[i] = (1 - a) * v[i] + a * V(dx - 1)      relax toward optimal velocity
//!   if dx > 1 and U[0,1) < v[i]: x[i] += 1     stochastic hop
//! leader:
//!   v = 1; advance unless already in cell N - 1
//! ```
//!
//! Followers are visited rear to front, so every gap is measured against the
//! position the vehicle ahead held *before* this step.  That makes the
//! sequential loop equivalent to a parallel update.
//!
//! A follower with `dx == 1` consumes no random draw.

use sov_core::{ModelConfig, UniformSource};

use crate::VehicleRegister;
use crate::velocity::optimal_velocity;

/// Relaxed velocity for a follower with current velocity `v` and gap `dx`.
#[inline]
fn relax(v: f64, dx: usize, config: &ModelConfig) -> f64 {
    let a = config.relaxation;
    (1.0 - a) * v + a * optimal_velocity((dx - 1) as f64, config.shape)
}

/// Advance every vehicle one step.
///
/// Returns the fraction of vehicles that moved, in `[0, 1]`; `0.0` for an
/// empty register.
pub fn update<R>(register: &mut VehicleRegister, config: &ModelConfig, rng: &mut R) -> f64
where
    R: UniformSource + ?Sized,
{
    let count = register.len();
    if count == 0 {
        return 0.0;
    }

    let vehicles = &mut register.vehicles;
    let mut moved = 0usize;

    for i in 0..count - 1 {
        let ahead = vehicles[i + 1].position;
        let here = &mut vehicles[i];
        let dx = ahead - here.position;

        here.velocity = relax(here.velocity, dx, config);
        if dx > 1 && rng.next_uniform() < here.velocity {
            here.position += 1;
            moved += 1;
        }
    }

    let leader = &mut vehicles[count - 1];
    leader.velocity = 1.0;
    if leader.position < config.last_cell() {
        leader.position += 1;
        moved += 1;
    }

    moved as f64 / count as f64
}

/// The fraction of vehicles that *would* move if [`update`] ran now.
///
/// Evaluates the same relaxed velocities and consumes the same random draws
/// as `update`, but writes nothing back to the register.
pub fn probe<R>(register: &VehicleRegister, config: &ModelConfig, rng: &mut R) -> f64
where
    R: UniformSource + ?Sized,
{
    let count = register.len();
    if count == 0 {
        return 0.0;
    }

    let vehicles = &register.vehicles;
    let mut moved = 0usize;

    for i in 0..count - 1 {
        let here = vehicles[i];
        let dx = vehicles[i + 1].position - here.position;
        let velocity = relax(here.velocity, dx, config);
        if dx > 1 && rng.next_uniform() < velocity {
            moved += 1;
        }
    }

    if vehicles[count - 1].position < config.last_cell() {
        moved += 1;
    }

    moved as f64 / count as f64
}
