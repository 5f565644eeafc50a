//! Ordered collection of polygons forming areas and holes.

use crate::point::Point;
use crate::Vec2;

use super::polygon::Polygon;

/// Polygons whose nesting depth decides their role: even depth is area,
/// odd depth is hole. No per-polygon flag is stored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolygonSet {
    pub polygons: Vec<Polygon>,
}

impl PolygonSet {
    #[inline]
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    pub fn from_points(polygons: &[Vec<Point>]) -> Self {
        Self::new(polygons.iter().map(|p| Polygon::from_points(p)).collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Polygon> {
        self.polygons.iter()
    }

    /// Odd/even containment over all polygons, in order.
    ///
    /// Each polygon is asked with `tolerance_on_outside = !inside`, so a point
    /// on a boundary resolves towards "inside" both when entering an area and
    /// when touching a hole from within its area.
    pub fn contains(&self, pt: Vec2<f64>) -> bool {
        let mut inside = false;
        for p in &self.polygons {
            if p.contains(pt, !inside) {
                inside = !inside;
            }
        }
        inside
    }

    /// Closest point on any outline; the first polygon reaching the minimum wins.
    /// Empty polygons are skipped; with no outline at all `pt` is returned.
    pub fn closest_pt(&self, pt: Vec2<f64>) -> Vec2<f64> {
        let mut best: Option<(Vec2<f64>, f64)> = None;
        for p in self.polygons.iter().filter(|p| !p.is_empty()) {
            let cand = p.closest_pt(pt);
            let dist = (cand - pt).norm_squared();
            if !matches!(best, Some((_, d)) if d <= dist) {
                best = Some((cand, dist));
            }
        }
        best.map_or(pt, |(cand, _)| cand)
    }

    /// Polygon `i` is a hole iff it lies inside an odd number of the others,
    /// judged by its first vertex with boundary contact counting as outside.
    ///
    /// # Panics
    /// If `i` is out of range or polygon `i` has no vertices.
    pub fn is_hole(&self, i: usize) -> bool {
        let probe = self.polygons[i].vertices[0];
        self.polygons
            .iter()
            .enumerate()
            .filter(|&(j, p)| j != i && p.contains(probe, false))
            .count()
            % 2
            == 1
    }
}

impl<'a> IntoIterator for &'a PolygonSet {
    type Item = &'a Polygon;
    type IntoIter = std::slice::Iter<'a, Polygon>;
    fn into_iter(self) -> Self::IntoIter {
        self.polygons.iter()
    }
}

impl From<Vec<Polygon>> for PolygonSet {
    fn from(polygons: Vec<Polygon>) -> Self {
        Self::new(polygons)
    }
}
