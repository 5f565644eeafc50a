//! A* over any [`Neighbours`] graph.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::hash::Hash;

use tracing::trace;

use crate::graph::Neighbours;

/// Open-set entry. Ordered so the max-heap pops the lowest `f`, then the
/// earliest pushed among equals.
#[derive(Clone, Copy, Debug)]
struct Open<N> {
    node: N,
    g: f64,
    f: f64,
    seq: u64,
}

impl<N> PartialEq for Open<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for Open<N> {}

impl<N> Ord for Open<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<N> PartialOrd for Open<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Cheapest path from `start` to `goal`, both included.
///
/// `cost(a, b)` is the weight of the edge `a -> b`; `heuristic(n, goal)` must
/// not overestimate the remaining cost. Returns `None` when `goal` is not
/// reachable and `[start]` when `start == goal`.
pub fn find_path<N, G, C, H>(
    graph: &G,
    start: N,
    goal: N,
    cost: C,
    heuristic: H,
) -> Option<Vec<N>>
where
    N: Copy + Eq + Hash,
    G: Neighbours<N> + ?Sized,
    C: Fn(N, N) -> f64,
    H: Fn(N, N) -> f64,
{
    if start == goal {
        return Some(vec![start]);
    }

    let mut open = BinaryHeap::new();
    let mut g_score: HashMap<N, f64> = HashMap::new();
    let mut came_from: HashMap<N, N> = HashMap::new();
    let mut closed: HashSet<N> = HashSet::new();
    let mut seq = 0u64;

    g_score.insert(start, 0.0);
    open.push(Open {
        node: start,
        g: 0.0,
        f: heuristic(start, goal),
        seq,
    });

    while let Some(Open { node, g, .. }) = open.pop() {
        if node == goal {
            trace!(expanded = closed.len(), cost = g, "astar reached goal");
            return Some(reconstruct(&came_from, goal));
        }
        if !closed.insert(node) {
            continue;
        }
        for &next in graph.neighbours(&node) {
            if closed.contains(&next) {
                continue;
            }
            let tentative = g + cost(node, next);
            if g_score.get(&next).is_some_and(|&known| tentative >= known) {
                continue;
            }
            g_score.insert(next, tentative);
            came_from.insert(next, node);
            seq += 1;
            open.push(Open {
                node: next,
                g: tentative,
                f: tentative + heuristic(next, goal),
                seq,
            });
        }
    }

    trace!(expanded = closed.len(), "astar exhausted open set");
    None
}

fn reconstruct<N: Copy + Eq + Hash>(came_from: &HashMap<N, N>, goal: N) -> Vec<N> {
    let mut path = vec![goal];
    let mut cur = goal;
    while let Some(&prev) = came_from.get(&cur) {
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    path
}
