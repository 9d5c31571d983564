//! `sov-core` — foundational types for the `sov` traffic model workspace.
//!
//! This crate is a dependency of every other `sov-*` crate.  It has no
//! `sov-*` dependencies and only `rand` and `thiserror` externally, plus
//! optional `serde`.
//!
//! # What lives here
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`config`]  | `ModelConfig`, `RunConfig`, `SweepConfig`, `CountingMode`  |
//! | [`rng`]     | `UniformSource` trait, `SimRng`, test sources              |
//! | [`error`]   | `SovError`, `SovResult`                                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the configuration types. |

pub mod config;
pub mod error;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{CountingMode, ModelConfig, RunConfig, SweepConfig};
pub use error::{SovError, SovResult};
pub use rng::{FixedUniform, ScriptedUniform, SimRng, UniformSource};
