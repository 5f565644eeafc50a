//! Adjacency lists keyed by [`Point`].

use std::collections::hash_map;
use std::collections::HashMap;

use crate::point::Point;

/// Anything A* can expand.
pub trait Neighbours<N> {
    /// Nodes reachable from `node` in one step. Unknown nodes have none.
    fn neighbours(&self, node: &N) -> &[N];
}

/// Directed adjacency lists. Line of sight is symmetric, so the builder in
/// [`crate::pathfinder`] always links both ways.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibilityGraph {
    adj: HashMap<Point, Vec<Point>>,
}

impl VisibilityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `to` to the list of `from`. Returns `self` so links can be chained.
    pub fn link(&mut self, from: Point, to: Point) -> &mut Self {
        self.adj.entry(from).or_default().push(to);
        self
    }

    pub fn neighbours(&self, node: Point) -> &[Point] {
        self.adj.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_node(&self, node: Point) -> bool {
        self.adj.contains_key(&node)
    }

    /// Nodes with at least one outgoing link.
    pub fn len(&self) -> usize {
        self.adj.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    /// Directed edge count; twice the undirected count for a symmetric graph.
    pub fn edge_count(&self) -> usize {
        self.adj.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, Point, Vec<Point>> {
        self.adj.iter()
    }

    /// Every edge has its reverse.
    pub fn is_symmetric(&self) -> bool {
        self.adj
            .iter()
            .all(|(from, tos)| tos.iter().all(|to| self.neighbours(*to).contains(from)))
    }
}

impl Neighbours<Point> for VisibilityGraph {
    fn neighbours(&self, node: &Point) -> &[Point] {
        VisibilityGraph::neighbours(self, *node)
    }
}

impl<'a> IntoIterator for &'a VisibilityGraph {
    type Item = (&'a Point, &'a Vec<Point>);
    type IntoIter = hash_map::Iter<'a, Point, Vec<Point>>;

    fn into_iter(self) -> Self::IntoIter {
        self.adj.iter()
    }
}

impl From<HashMap<Point, Vec<Point>>> for VisibilityGraph {
    fn from(adj: HashMap<Point, Vec<Point>>) -> Self {
        Self { adj }
    }
}
