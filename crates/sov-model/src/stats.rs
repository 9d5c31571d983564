//! Instantaneous macroscopic observables.

use crate::VehicleRegister;

/// Arithmetic mean of all velocities; `0.0` for an empty register.
pub fn mean_velocity(register: &VehicleRegister) -> f64 {
    if register.is_empty() {
        return 0.0;
    }
    register.iter().map(|v| v.velocity).sum::<f64>() / register.len() as f64
}

/// Occupied fraction of the segment, in `[0, 1]`.
pub fn density(register: &VehicleRegister) -> f64 {
    register.len() as f64 / register.cells() as f64
}

/// `mean_velocity × density`.
pub fn flux(register: &VehicleRegister) -> f64 {
    mean_velocity(register) * density(register)
}
