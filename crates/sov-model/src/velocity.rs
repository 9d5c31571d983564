//! The optimal velocity function.

/// Target velocity for a vehicle whose headway is `dx` cells.
///
///   V(dx) = (tanh(dx − c) + tanh(c)) / (1 + tanh(c))
///
/// Monotonically non-decreasing, `V(0) = 0`, saturating toward 1 as `dx`
/// grows.  `shape` (`c`) sets where the sigmoid turns over.
#[inline]
pub fn optimal_velocity(dx: f64, shape: f64) -> f64 {
    let tc = shape.tanh();
    ((dx - shape).tanh() + tc) / (1.0 + tc)
}
