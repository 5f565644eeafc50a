//! Simple polygon as an implicitly closed vertex ring.

use crate::cfg::near_eq;
use crate::point::Point;
use crate::{cross, Vec2};

use super::line::{Line, LineSeg};

/// Vertex ring; edge `i` runs from vertex `i` to vertex `(i + 1) mod n`.
///
/// Invariants:
/// - Index arithmetic always wraps into `[0, n)`.
/// - Edge and containment queries assume `n >= 1`; callers validate this at
///   the construction boundary (see `Pathfinder::new`).
/// - Concave/convex is relative to the stored winding. Floor plans use
///   clockwise rings in screen coordinates (y grows downward).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Vec2<f64>>,
}

impl Polygon {
    #[inline]
    pub fn new(vertices: Vec<Vec2<f64>>) -> Self {
        Self { vertices }
    }

    pub fn from_points(points: &[Point]) -> Self {
        Self::new(points.iter().map(|p| p.to_vec2()).collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edge from vertex `i` to the next vertex (wrapping).
    ///
    /// # Panics
    /// If `i >= self.len()`, which includes every `i` on an empty ring.
    #[inline]
    pub fn edge(&self, i: usize) -> LineSeg {
        let j = (i + 1) % self.len();
        LineSeg::new(self.vertices[i], self.vertices[j])
    }

    pub fn edges(&self) -> impl Iterator<Item = LineSeg> + '_ {
        (0..self.len()).map(move |i| self.edge(i))
    }

    /// Normalize any index, negative included, into `[0, n)`.
    ///
    /// # Panics
    /// On an empty ring, where `[0, 0)` has no index to return.
    #[inline]
    pub fn wrap_index(&self, i: isize) -> usize {
        let n = self.len() as isize;
        i.rem_euclid(n) as usize
    }

    /// Ray-casting containment: a horizontal ray towards +x crosses the
    /// boundary an odd number of times iff `pt` is inside.
    ///
    /// A point on the boundary is neither inside nor outside geometrically;
    /// the answer is then `tolerance_on_outside`, chosen by the caller.
    pub fn contains(&self, pt: Vec2<f64>, tolerance_on_outside: bool) -> bool {
        let mut inside = false;
        for edge in self.edges() {
            if near_eq(edge.closest_pt(pt), pt) {
                return tolerance_on_outside;
            }
            if h_ray_intersects(pt, &edge) {
                inside = !inside;
            }
        }
        inside
    }

    /// True if `ls` crosses the boundary: either strictly through an edge, or
    /// exactly through a vertex where the boundary passes from one side of
    /// `ls` to the other. Vertices equal to an end point of `ls` are skipped.
    pub fn is_crossed_by(&self, ls: &LineSeg) -> bool {
        let line = Line::new(*ls);
        for (i, &v) in self.vertices.iter().enumerate() {
            if ls.a == v || ls.b == v {
                continue;
            }
            if ls.crosses(&self.edge(i)) {
                return true;
            }
            if near_eq(ls.closest_pt(v), v) {
                let prev = self.vertices[self.wrap_index(i as isize - 1)];
                let next = self.vertices[self.wrap_index(i as isize + 1)];
                if line.side(prev) != line.side(next) {
                    return true;
                }
            }
        }
        false
    }

    /// Closest point on the outline; the first edge reaching the minimum wins.
    /// An empty ring has no outline and returns `pt` unchanged.
    pub fn closest_pt(&self, pt: Vec2<f64>) -> Vec2<f64> {
        let Some(&first) = self.vertices.first() else {
            return pt;
        };
        let mut best = first;
        let mut best_dist = (best - pt).norm_squared();
        for edge in self.edges() {
            let cand = edge.closest_pt(pt);
            let dist = (cand - pt).norm_squared();
            if dist < best_dist {
                best = cand;
                best_dist = dist;
            }
        }
        best
    }

    /// Vertex `i` turns against the winding: `(v - prev) x (next - v) < 0`.
    ///
    /// # Panics
    /// If `i >= self.len()`.
    pub fn is_concave_at(&self, i: usize) -> bool {
        let v = self.vertices[i];
        let prev = self.vertices[self.wrap_index(i as isize - 1)];
        let next = self.vertices[self.wrap_index(i as isize + 1)];
        cross(v - prev, next - v) < 0.0
    }
}

impl From<Vec<Vec2<f64>>> for Polygon {
    fn from(vertices: Vec<Vec2<f64>>) -> Self {
        Self::new(vertices)
    }
}

/// Horizontal ray from `p` towards +x hits `edge`.
fn h_ray_intersects(p: Vec2<f64>, edge: &LineSeg) -> bool {
    if !h_line_intersects(p, edge) {
        return false;
    }
    let ray = Line::through(p, Vec2::new(p.x + 1.0, p.y));
    match ray.intersect(&Line::new(*edge)) {
        Some(q) => p.x <= q.x,
        None => false,
    }
}

/// End points lie on different sides of the horizontal line through `p`
/// (one `>=`, one `<`), so shared vertices are counted once.
#[inline]
fn h_line_intersects(p: Vec2<f64>, edge: &LineSeg) -> bool {
    (edge.a.y >= p.y) != (edge.b.y >= p.y)
}
