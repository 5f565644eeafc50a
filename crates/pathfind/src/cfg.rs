//! Tolerance defaults for polygon geometry (internal).
//!
//! Policy
//! - Defaults are fixed constants, matching the integer-ish coordinate scale
//!   of floor plans. Clamping of query points is configured separately via
//!   `pathfinder::ClampCfg`.

/// Per-coordinate slack for approximate point equality (`near_eq`), also used
/// to decide that a point lies on a polygon edge.
pub const NEAR_EPS: f64 = 1e-5;

/// Approximate equality of two points, coordinate by coordinate.
#[inline]
pub fn near_eq(a: crate::Vec2<f64>, b: crate::Vec2<f64>) -> bool {
    (a.x - b.x).abs() <= NEAR_EPS && (a.y - b.y).abs() <= NEAR_EPS
}
