use tracing::trace;

use crate::graph::VisibilityGraph;
use crate::point::Point;
use crate::poly::{LineSeg, PolygonSet};
use crate::Vec2;

/// `a` sees `b` when no polygon edge is crossed by the segment between them
/// and its midpoint lies in the region. The midpoint test rejects segments
/// that bridge a notch from outside without touching an edge.
pub fn in_line_of_sight(ps: &PolygonSet, a: Vec2<f64>, b: Vec2<f64>) -> bool {
    let seg = LineSeg::new(a, b);
    if ps.iter().any(|p| p.is_crossed_by(&seg)) {
        trace!(%seg, "sight blocked by an edge");
        return false;
    }
    if !ps.contains(seg.middle()) {
        trace!(%seg, "sight leaves the region");
        return false;
    }
    true
}

/// Link every mutually visible pair of `nodes`, both directions.
///
/// Neighbour lists keep the order of `nodes`. Nodes with equal coordinates are
/// one graph node and are never linked to each other.
pub fn visibility_graph(ps: &PolygonSet, nodes: &[Point]) -> VisibilityGraph {
    let mut g = VisibilityGraph::new();
    for (i, &a) in nodes.iter().enumerate() {
        for &b in &nodes[i + 1..] {
            if a == b {
                continue;
            }
            if in_line_of_sight(ps, a.to_vec2(), b.to_vec2()) {
                g.link(a, b).link(b, a);
            }
        }
    }
    g
}
