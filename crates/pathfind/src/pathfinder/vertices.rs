use crate::point::Point;
use crate::poly::{Polygon, PolygonSet};

/// Corners a shortest path can bend around: concave corners of area polygons
/// and convex corners of holes, in polygon then vertex order.
pub fn routing_vertices(ps: &PolygonSet) -> Vec<Point> {
    let mut out = Vec::new();
    for (i, p) in ps.iter().enumerate() {
        let want_concave = !ps.is_hole(i);
        out.extend(corners(p, want_concave));
    }
    out
}

fn corners(p: &Polygon, concave: bool) -> impl Iterator<Item = Point> + '_ {
    p.vertices
        .iter()
        .enumerate()
        .filter(move |&(i, _)| p.is_concave_at(i) == concave)
        .map(|(_, &v)| Point::from_vec2(v))
}
