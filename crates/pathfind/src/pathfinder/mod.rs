//! Pathfinder: routing vertices once, visibility graph and A* per query.
//!
//! Purpose
//! - Own an immutable [`PolygonSet`] and the corners a taut path can bend
//!   around (concave corners of areas, convex corners of holes).
//! - Answer `path(start, dest)` by clamping an outside destination onto the
//!   region, linking every mutually visible pair among the corners and the
//!   two endpoints, and searching that graph with Euclidean cost.
//!
//! Layout
//! - `vertices.rs`: hole classification and routing-vertex extraction.
//! - `visibility.rs`: line of sight and graph construction.

mod vertices;
mod visibility;

pub use vertices::routing_vertices;
pub use visibility::{in_line_of_sight, visibility_graph};

use std::sync::Arc;

use tracing::debug;

use crate::astar;
use crate::error::{PathfindError, Result};
use crate::graph::VisibilityGraph;
use crate::point::Point;
use crate::poly::PolygonSet;

/// Destination clamping knobs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClampCfg {
    /// Half-width of the integer lattice probed around a clamped boundary point
    /// when it does not test as inside. `1` probes the 8 neighbours.
    pub probe_radius: i32,
}

impl Default for ClampCfg {
    fn default() -> Self {
        Self { probe_radius: 1 }
    }
}

#[derive(Clone, Debug)]
pub struct Pathfinder {
    polygons: Arc<PolygonSet>,
    routing: Vec<Point>,
    clamp: ClampCfg,
    last_graph: Option<VisibilityGraph>,
}

impl Pathfinder {
    /// Build from polygon vertex lists. Top-level polygons are walkable areas;
    /// nesting alternates between hole and area.
    pub fn new(polygons: &[Vec<Point>]) -> Result<Self> {
        if polygons.is_empty() {
            return Err(PathfindError::NoPolygons);
        }
        if let Some(index) = polygons.iter().position(Vec::is_empty) {
            return Err(PathfindError::EmptyPolygon { index });
        }
        Ok(Self::build(Arc::new(PolygonSet::from_points(polygons))))
    }

    /// Share an existing set. Also rejects non-finite coordinates.
    pub fn from_polygon_set(polygons: Arc<PolygonSet>) -> Result<Self> {
        if polygons.is_empty() {
            return Err(PathfindError::NoPolygons);
        }
        for (index, p) in polygons.iter().enumerate() {
            if p.is_empty() {
                return Err(PathfindError::EmptyPolygon { index });
            }
            if p.vertices.iter().any(|v| !v.x.is_finite() || !v.y.is_finite()) {
                return Err(PathfindError::NonFinite { index });
            }
        }
        Ok(Self::build(polygons))
    }

    fn build(polygons: Arc<PolygonSet>) -> Self {
        let routing = routing_vertices(&polygons);
        let holes = (0..polygons.len()).filter(|&i| polygons.is_hole(i)).count();
        debug!(
            polygons = polygons.len(),
            holes,
            routing = routing.len(),
            "pathfinder constructed"
        );
        Self {
            polygons,
            routing,
            clamp: ClampCfg::default(),
            last_graph: None,
        }
    }

    pub fn with_clamp_cfg(mut self, clamp: ClampCfg) -> Self {
        self.clamp = clamp;
        self
    }

    pub fn polygon_set(&self) -> &PolygonSet {
        &self.polygons
    }

    /// Shared handle to the polygon set, for building sibling pathfinders.
    pub fn polygon_set_arc(&self) -> Arc<PolygonSet> {
        Arc::clone(&self.polygons)
    }

    pub fn routing_vertices(&self) -> &[Point] {
        &self.routing
    }

    pub fn clamp_cfg(&self) -> ClampCfg {
        self.clamp
    }

    /// Graph built by the most recent [`Pathfinder::path`] call.
    pub fn visibility_graph(&self) -> Option<&VisibilityGraph> {
        self.last_graph.as_ref()
    }

    /// Whether `pt` lies in the walkable region (boundaries count as inside).
    pub fn contains(&self, pt: Point) -> bool {
        self.polygons.contains(pt.to_vec2())
    }

    /// Shortest path from `start` to `dest`, both included.
    ///
    /// An outside `dest` is first moved to the nearest walkable point. `start`
    /// is taken as given; an outside `start` normally has no line of sight to
    /// anything and yields `None`.
    pub fn path(&mut self, start: Point, dest: Point) -> Option<Vec<Point>> {
        let dest = self.clamp_dest(dest);

        let mut nodes = Vec::with_capacity(self.routing.len() + 2);
        nodes.extend_from_slice(&self.routing);
        nodes.push(start);
        nodes.push(dest);

        let graph = visibility_graph(&self.polygons, &nodes);
        let path = astar::find_path(&graph, start, dest, Point::dist, Point::dist);
        debug!(
            %start,
            %dest,
            nodes = graph.len(),
            edges = graph.edge_count() / 2,
            found = path.is_some(),
            "path query"
        );
        self.last_graph = Some(graph);
        path
    }

    /// `dest` if inside, else the closest boundary point nudged inward.
    pub fn clamp_dest(&self, dest: Point) -> Point {
        if self.contains(dest) {
            return dest;
        }
        let on_boundary = Point::from_vec2(self.polygons.closest_pt(dest.to_vec2()));
        let clamped = self.ensure_inside(on_boundary);
        debug!(from = %dest, to = %clamped, "destination clamped");
        clamped
    }

    fn ensure_inside(&self, pt: Point) -> Point {
        if self.contains(pt) {
            return pt;
        }
        let r = self.clamp.probe_radius;
        for dx in -r..=r {
            for dy in -r..=r {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let probe = pt + Point::new(dx, dy);
                if self.contains(probe) {
                    return probe;
                }
            }
        }
        pt
    }
}

#[cfg(test)]
mod tests;
