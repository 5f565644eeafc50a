//! Polygon geometry in floating point.
//!
//! - `LineSeg`, `Line`: segment queries, strict crossing, side test.
//! - `Polygon`: vertex ring with ray-casting containment and vertex classes.
//! - `PolygonSet`: nested areas and holes under the odd/even rule.
//!
//! Degenerate cases are resolved by policy, never by failure: parallel
//! lines have no intersection, touching endpoints never cross, zero-length
//! segments collapse to their start point.

mod line;
mod polygon;
mod set;

pub use line::{Line, LineSeg};
pub use polygon::Polygon;
pub use set::PolygonSet;
