//! Line segments and infinite lines.

use std::fmt;

use crate::cfg::near_eq;
use crate::{cross, Vec2};

/// Segment between `a` and `b`. Direction matters for side tests only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSeg {
    pub a: Vec2<f64>,
    pub b: Vec2<f64>,
}

impl LineSeg {
    #[inline]
    pub fn new(a: Vec2<f64>, b: Vec2<f64>) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn len(&self) -> f64 {
        (self.b - self.a).norm()
    }

    /// Zero length (`a == b`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.a == self.b
    }

    /// Orthogonal projection of `p` onto the segment, clamped to the end points.
    /// A zero-length segment returns `a`.
    pub fn closest_pt(&self, p: Vec2<f64>) -> Vec2<f64> {
        let v = self.b - self.a;
        let w = p - self.a;
        let c1 = w.dot(&v);
        if c1 <= 0.0 {
            return self.a;
        }
        let c2 = v.dot(&v);
        if c2 <= c1 {
            return self.b;
        }
        self.a + v * (c1 / c2)
    }

    /// True iff the segments meet in a point strictly inside both of them.
    ///
    /// Parallel (including collinear overlapping) segments never cross, and
    /// neither do segments that merely touch at an end point.
    pub fn crosses(&self, other: &LineSeg) -> bool {
        let u = self.a - self.b;
        let v = other.a - other.b;
        let d = cross(u, v);
        if d == 0.0 {
            return false;
        }
        let w = self.b - other.b;
        let n1 = cross(u, w);
        let n2 = cross(v, w);
        if n1 == 0.0 || n2 == 0.0 {
            return false;
        }
        let r = n1 / d;
        let s = n2 / d;
        (0.0 < r && r < 1.0) && (0.0 < s && s < 1.0)
    }

    #[inline]
    pub fn middle(&self) -> Vec2<f64> {
        (self.a + self.b) / 2.0
    }

    /// Approximate equality of `a` with `a` and `b` with `b`; order matters.
    #[inline]
    pub fn near_eq(&self, other: &LineSeg) -> bool {
        near_eq(self.a, other.a) && near_eq(self.b, other.b)
    }
}

impl fmt::Display for LineSeg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "L({}, {}):({}, {})",
            self.a.x, self.a.y, self.b.x, self.b.y
        )
    }
}

/// Infinite line through the end points of `seg`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub seg: LineSeg,
}

impl Line {
    #[inline]
    pub fn new(seg: LineSeg) -> Self {
        Self { seg }
    }

    #[inline]
    pub fn through(a: Vec2<f64>, b: Vec2<f64>) -> Self {
        Self::new(LineSeg::new(a, b))
    }

    /// Intersection point of two lines; `None` if they are parallel,
    /// coincident lines included.
    pub fn intersect(&self, other: &Line) -> Option<Vec2<f64>> {
        let u = self.seg.a - self.seg.b;
        let v = other.seg.a - other.seg.b;
        let d = cross(u, v);
        if d == 0.0 {
            return None;
        }
        let r = cross(self.seg.a, self.seg.b) / d;
        let s = cross(other.seg.a, other.seg.b) / d;
        Some(v * r - u * s)
    }

    /// Side of the line `p` lies on: `+1`, `-1`, or `0` on the line.
    #[inline]
    pub fn side(&self, p: Vec2<f64>) -> i32 {
        let ap = p - self.seg.a;
        let ab = self.seg.b - self.seg.a;
        sgn(cross(ap, ab))
    }
}

#[inline]
fn sgn(x: f64) -> i32 {
    if x < 0.0 {
        -1
    } else if x > 0.0 {
        1
    } else {
        0
    }
}
