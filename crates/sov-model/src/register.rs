//! The `VehicleRegister` — ordered per-vehicle position and velocity.

use std::collections::VecDeque;
use std::fmt;

use sov_core::{SovError, SovResult};

/// One vehicle: the cell it occupies and its current velocity in `[0, 1]`.
///
/// Vehicles have no identity beyond their index in the register.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    pub position: usize,
    pub velocity: f64,
}

impl Vehicle {
    pub fn new(position: usize, velocity: f64) -> Self {
        Self { position, velocity }
    }

    /// A freshly injected vehicle: cell 0, full speed.
    #[inline]
    pub fn entering() -> Self {
        Self { position: 0, velocity: 1.0 }
    }
}

/// All vehicles on the segment, sorted by strictly increasing position.
///
/// Index 0 is the rearmost vehicle and the last index is the leader.  New
/// vehicles enter at the rear and leave from the front, so the storage is a
/// `VecDeque` and both ends are O(1).
///
/// Read access is public.  Mutation is limited to the dynamics and boundary
/// engines in this crate, which preserve the ordering invariant by
/// construction.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleRegister {
    cells: usize,
    pub(crate) vehicles: VecDeque<Vehicle>,
}

impl VehicleRegister {
    /// An empty segment of `cells` cells.
    pub fn new(cells: usize) -> Self {
        Self { cells, vehicles: VecDeque::new() }
    }

    /// Build a register from vehicles listed rear to front.
    ///
    /// # Errors
    ///
    /// Returns `SovError::Invariant` if positions are not strictly increasing,
    /// fall outside `0..cells`, or a velocity lies outside `[0, 1]`.
    pub fn from_vehicles<I>(cells: usize, vehicles: I) -> SovResult<Self>
    where
        I: IntoIterator<Item = Vehicle>,
    {
        let register = Self { cells, vehicles: vehicles.into_iter().collect() };
        register.check_invariants()?;
        Ok(register)
    }

    /// Segment length `N`.
    #[inline]
    pub fn cells(&self) -> usize {
        self.cells
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Vehicle> {
        self.vehicles.get(index)
    }

    /// Iterate rear to front.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Vehicle> + '_ {
        self.vehicles.iter()
    }

    /// The vehicle nearest the entrance.
    #[inline]
    pub fn rearmost(&self) -> Option<&Vehicle> {
        self.vehicles.front()
    }

    /// The vehicle nearest the exit.
    #[inline]
    pub fn leading(&self) -> Option<&Vehicle> {
        self.vehicles.back()
    }

    /// Snapshot of all positions, rear to front.
    pub fn positions(&self) -> Vec<usize> {
        self.vehicles.iter().map(|v| v.position).collect()
    }

    /// Snapshot of all velocities, rear to front.
    pub fn velocities(&self) -> Vec<f64> {
        self.vehicles.iter().map(|v| v.velocity).collect()
    }

    /// Whether cell `cell` is occupied.
    pub fn is_occupied(&self, cell: usize) -> bool {
        self.vehicles
            .binary_search_by(|v| v.position.cmp(&cell))
            .is_ok()
    }

    /// Verify ordering, range, and velocity bounds.
    pub fn check_invariants(&self) -> SovResult<()> {
        let mut previous: Option<usize> = None;
        for (i, v) in self.vehicles.iter().enumerate() {
            if v.position >= self.cells {
                return Err(SovError::Invariant(format!(
                    "vehicle {i} at cell {} outside segment of {} cells",
                    v.position, self.cells
                )));
            }
            if !(0.0..=1.0).contains(&v.velocity) {
                return Err(SovError::Invariant(format!(
                    "vehicle {i} has velocity {} outside [0, 1]",
                    v.velocity
                )));
            }
            if let Some(p) = previous {
                if v.position <= p {
                    return Err(SovError::Invariant(format!(
                        "vehicle {i} at cell {} does not lie ahead of cell {p}",
                        v.position
                    )));
                }
            }
            previous = Some(v.position);
        }
        Ok(())
    }

    /// One character per cell: `*` occupied, `-` empty.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.cells);
        let mut next = self.vehicles.iter().peekable();
        for cell in 0..self.cells {
            if next.next_if(|v| v.position == cell).is_some() {
                out.push('*');
            } else {
                out.push('-');
            }
        }
        out
    }

    // ── Engine-only mutation ──────────────────────────────────────────────

    /// Insert `vehicle` behind the current rearmost vehicle.
    pub(crate) fn push_rear(&mut self, vehicle: Vehicle) {
        debug_assert!(self.rearmost().is_none_or(|r| r.position > vehicle.position));
        self.vehicles.push_front(vehicle);
    }

    /// Remove and return the leader.
    pub(crate) fn pop_leading(&mut self) -> Option<Vehicle> {
        self.vehicles.pop_back()
    }
}

impl fmt::Display for VehicleRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
