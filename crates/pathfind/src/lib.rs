//! Shortest paths inside a region bounded by simple polygons.
//!
//! The region is a set of polygons whose nesting alternates between
//! accessible area and hole: top-level polygons are areas, polygons inside
//! an area are holes, polygons inside a hole are areas again, and so on.
//! A [`Pathfinder`] extracts the corners a taut path can bend around once,
//! then answers each query by building a small visibility graph over those
//! corners plus the query endpoints and running A* on it.
//!
//! Layout
//! - `poly`: segments, lines, polygons and polygon sets (floating point).
//! - `graph`, `astar`: adjacency lists keyed by [`Point`] and the search.
//! - `pathfinder`: routing-vertex extraction, line of sight, queries.
//! - `parse`, `rand`: coordinate strings and random floor plans.

pub mod astar;
pub mod cfg;
pub mod error;
pub mod graph;
pub mod parse;
pub mod pathfinder;
pub mod point;
pub mod poly;
pub mod rand;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::PathfindError;
pub use graph::{Neighbours, VisibilityGraph};
pub use nalgebra::Vector2 as Vec2;
pub use pathfinder::{ClampCfg, Pathfinder};
pub use point::Point;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::graph::{Neighbours, VisibilityGraph};
    pub use crate::pathfinder::{ClampCfg, Pathfinder};
    pub use crate::point::Point;
    pub use crate::poly::{Line, LineSeg, Polygon, PolygonSet};
    pub use crate::PathfindError;
    pub use nalgebra::Vector2 as Vec2;
}

/// Signed area of the parallelogram spanned by `a` and `b` (the 2D cross product).
/// Positive for a→b counterclockwise in a y-up frame, negative otherwise.
#[inline]
pub fn cross(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}
