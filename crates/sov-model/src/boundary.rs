//! The boundary engine: probabilistic entry at cell 0, exit at cell `N - 1`.

use log::trace;
use sov_core::{ModelConfig, UniformSource};

use crate::{Vehicle, VehicleRegister};

/// What one [`boundary`] call did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundaryEvents {
    /// A vehicle entered at cell 0.
    pub injected: bool,
    /// The leader left from cell `N - 1`.
    pub ejected: bool,
}

/// Apply the open boundary conditions once.
///
/// Injection is tried first: if cell 0 is free, a draw below `α` inserts a
/// vehicle there at velocity 1.  Ejection is then tried independently: if the
/// leader sits in cell `N - 1`, a draw below `β` removes it.  A draw is only
/// consumed when the corresponding cell condition holds.
pub fn boundary<R>(register: &mut VehicleRegister, config: &ModelConfig, rng: &mut R) -> BoundaryEvents
where
    R: UniformSource + ?Sized,
{
    let mut events = BoundaryEvents::default();

    let entrance_free = register.rearmost().is_none_or(|v| v.position != 0);
    if entrance_free && rng.next_uniform() < config.alpha {
        register.push_rear(Vehicle::entering());
        events.injected = true;
    }

    let leader_at_exit = register
        .leading()
        .is_some_and(|v| v.position == config.last_cell());
    if leader_at_exit && rng.next_uniform() < config.beta {
        register.pop_leading();
        events.ejected = true;
    }

    if events.injected || events.ejected {
        trace!(
            "boundary: injected={} ejected={} vehicles={}",
            events.injected,
            events.ejected,
            register.len()
        );
    }
    events
}
