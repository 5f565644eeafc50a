//! Integer points: graph nodes and the public query type.
//!
//! Geometry runs in `f64`; the boundary to the caller is an integer lattice.
//! `from_vec2` rounds half away from zero (`f64::round`).

use std::fmt;
use std::ops::{Add, Sub};

use crate::Vec2;

/// A point on the integer lattice. Equal coordinates mean the same graph node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Shorthand constructor.
#[inline]
pub const fn pt(x: i32, y: i32) -> Point {
    Point { x, y }
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_vec2(self) -> Vec2<f64> {
        Vec2::new(f64::from(self.x), f64::from(self.y))
    }

    /// Round each coordinate to the nearest integer (ties away from zero).
    #[inline]
    pub fn from_vec2(v: Vec2<f64>) -> Self {
        Self {
            x: v.x.round() as i32,
            y: v.y.round() as i32,
        }
    }

    /// Euclidean distance; used as both edge cost and A* heuristic.
    /// Differences are taken in `f64`, so the full `i32` range is safe.
    #[inline]
    pub fn dist(self, other: Point) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy)
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
