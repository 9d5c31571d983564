//! `sov-model` — the state-evolution engine of the stochastic
//! optimal-velocity (S-OV) traffic model.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                       |
//! |---------------|----------------------------------------------------------------|
//! | [`velocity`]  | `optimal_velocity` — headway → target velocity                 |
//! | [`register`]  | `Vehicle`, `VehicleRegister` — ordered vehicle state           |
//! | [`dynamics`]  | `update`, `probe` — one synchronous velocity/position step     |
//! | [`boundary`]  | `boundary`, `BoundaryEvents` — open-boundary entry and exit    |
//! | [`stats`]     | `mean_velocity`, `density`, `flux`                             |
//! | [`model`]     | `SovModel<R>` — config + register + random source              |
//!
//! # Step model
//!
//! The segment is `N` unit cells.  One simulation step is:
//!
//! 1. [`dynamics::update`] relaxes every follower's velocity toward
//!    `V(gap - 1)` and lets it advance one cell with probability equal to the
//!    new velocity; the leader always moves at velocity 1.
//! 2. [`boundary::boundary`] injects a vehicle at cell 0 with probability `α`
//!    and removes the leader from cell `N - 1` with probability `β`.
//!
//! Vehicles never move more than one cell and never enter an occupied cell,
//! so the register stays sorted without ever being re-sorted.

pub mod boundary;
pub mod dynamics;
pub mod model;
pub mod register;
pub mod stats;
pub mod velocity;

#[cfg(test)]
mod tests;

pub use boundary::BoundaryEvents;
pub use model::SovModel;
pub use register::{Vehicle, VehicleRegister};
pub use velocity::optimal_velocity;
