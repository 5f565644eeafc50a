use super::*;
use crate::point::pt;
use crate::rand::{draw_floor_plan, draw_points_inside, FloorPlanCfg, ReplayToken};
use proptest::prelude::*;
use std::collections::HashMap;

// Origin at the top-left corner, y grows downwards.
//
//  0,0 +---+   +---+ 30,0
//      |   |   |   |
//      |   +---+   |
//      |           |
// 0,20 +-----------+ 30,20
fn polygon_u() -> Vec<Vec<Point>> {
    vec![vec![
        pt(0, 0),
        pt(10, 0),
        pt(10, 10),
        pt(20, 10),
        pt(20, 0),
        pt(30, 0),
        pt(30, 20),
        pt(0, 20),
    ]]
}

// Square with a diamond-shaped hole.
fn polygon_o() -> Vec<Vec<Point>> {
    vec![
        vec![pt(0, 0), pt(40, 0), pt(40, 40), pt(0, 40)],
        vec![pt(20, 10), pt(30, 20), pt(20, 30), pt(10, 20)],
    ]
}

//  (0,0) +---+   +-----------+ (50,0)
//        | s |   |   +---+   |
//        |   +---+   |   | d |
//        |           +---+   |
// (0,20) +-------------------+ (50,20)
fn notch_and_room() -> Vec<Vec<Point>> {
    vec![
        vec![
            pt(0, 0),
            pt(10, 0),
            pt(10, 10),
            pt(20, 10),
            pt(20, 0),
            pt(50, 0),
            pt(50, 20),
            pt(0, 20),
        ],
        vec![pt(30, 5), pt(40, 5), pt(40, 15), pt(30, 15)],
    ]
}

fn path(polygons: &[Vec<Point>], start: Point, dest: Point) -> Option<Vec<Point>> {
    Pathfinder::new(polygons).unwrap().path(start, dest)
}

#[test]
fn direct_connection() {
    assert_eq!(
        path(&polygon_u(), pt(5, 5), pt(5, 15)),
        Some(vec![pt(5, 5), pt(5, 15)])
    );
}

#[test]
fn one_corner() {
    assert_eq!(
        path(&polygon_u(), pt(5, 5), pt(25, 15)),
        Some(vec![pt(5, 5), pt(10, 10), pt(25, 15)])
    );
}

#[test]
fn two_corners() {
    assert_eq!(
        path(&polygon_u(), pt(5, 5), pt(25, 5)),
        Some(vec![pt(5, 5), pt(10, 10), pt(20, 10), pt(25, 5)])
    );
}

#[test]
fn dest_in_wall_is_clamped() {
    assert_eq!(
        path(&polygon_u(), pt(5, 5), pt(15, 5)),
        Some(vec![pt(5, 5), pt(10, 5)])
    );
}

#[test]
fn start_outside_has_no_path() {
    assert_eq!(path(&polygon_u(), pt(15, 0), pt(15, 5)), None);
}

#[test]
fn start_at_lattice_extremes_has_no_path() {
    let mut pf = Pathfinder::new(&polygon_u()).unwrap();
    assert_eq!(pf.path(pt(i32::MIN, 0), pt(5, 5)), None);
    assert_eq!(pf.path(pt(i32::MAX, i32::MIN), pt(25, 15)), None);
    // The graph is still built and keeps the far start as an isolated node.
    let g = pf.visibility_graph().unwrap();
    assert!(g.neighbours(pt(i32::MAX, i32::MIN)).is_empty());
}

#[test]
fn around_a_hole() {
    assert_eq!(
        path(&polygon_o(), pt(15, 10), pt(30, 30)),
        Some(vec![pt(15, 10), pt(20, 10), pt(30, 20), pt(30, 30)])
    );
}

#[test]
fn dest_outside_thunderbolt_is_clamped() {
    let bolt = vec![vec![
        pt(0, 0),
        pt(100, 100),
        pt(200, 100),
        pt(200, 300),
        pt(100, 200),
        pt(0, 200),
    ]];
    assert_eq!(
        path(&bolt, pt(30, 70), pt(100, 70)),
        Some(vec![pt(30, 70), pt(85, 85)])
    );
}

#[test]
fn clamped_dest_is_nudged_inside() {
    let flat = vec![vec![pt(70, 55), pt(250, 54), pt(300, 100)]];
    assert_eq!(
        path(&flat, pt(180, 60), pt(181, 54)),
        Some(vec![pt(180, 60), pt(180, 55)])
    );

    let steep = vec![vec![pt(73, 55), pt(100, 100), pt(76, 168)]];
    assert_eq!(
        path(&steep, pt(90, 100), pt(74, 98)),
        Some(vec![pt(90, 100), pt(75, 97)])
    );
}

#[test]
fn zero_probe_radius_keeps_boundary_point() {
    let flat = vec![vec![pt(70, 55), pt(250, 54), pt(300, 100)]];
    let mut pf = Pathfinder::new(&flat)
        .unwrap()
        .with_clamp_cfg(ClampCfg { probe_radius: 0 });
    assert_eq!(pf.clamp_dest(pt(181, 54)), pt(181, 54));
    assert_eq!(pf.path(pt(180, 60), pt(181, 54)), None);
}

#[test]
fn hole_and_notch() {
    assert_eq!(
        path(&notch_and_room(), pt(5, 5), pt(45, 10)),
        Some(vec![pt(5, 5), pt(10, 10), pt(30, 15), pt(40, 15), pt(45, 10)])
    );
}

#[test]
fn routing_vertices_by_polygon_kind() {
    let pf = Pathfinder::new(&polygon_u()).unwrap();
    assert_eq!(pf.routing_vertices(), &[pt(10, 10), pt(20, 10)]);

    let pf = Pathfinder::new(&polygon_o()).unwrap();
    assert_eq!(
        pf.routing_vertices(),
        &[pt(20, 10), pt(30, 20), pt(20, 30), pt(10, 20)]
    );

    let pf = Pathfinder::new(&notch_and_room()).unwrap();
    assert_eq!(
        pf.routing_vertices(),
        &[pt(10, 10), pt(20, 10), pt(30, 5), pt(40, 5), pt(40, 15), pt(30, 15)]
    );
}

#[test]
fn visibility_graph_of_last_query() {
    let mut pf = Pathfinder::new(&polygon_u()).unwrap();
    assert!(pf.visibility_graph().is_none());
    pf.path(pt(5, 5), pt(25, 5));

    let want: HashMap<Point, Vec<Point>> = [
        (pt(5, 5), vec![pt(10, 10)]),
        (pt(10, 10), vec![pt(20, 10), pt(5, 5)]),
        (pt(20, 10), vec![pt(10, 10), pt(25, 5)]),
        (pt(25, 5), vec![pt(20, 10)]),
    ]
    .into_iter()
    .collect();
    assert_eq!(pf.visibility_graph(), Some(&VisibilityGraph::from(want)));

    // The next query replaces it.
    pf.path(pt(5, 5), pt(5, 15));
    let g = pf.visibility_graph().unwrap();
    assert_eq!(g.neighbours(pt(5, 5)), &[pt(10, 10), pt(5, 15)]);
    assert!(g.neighbours(pt(25, 5)).is_empty());
}

#[test]
fn repeated_query_is_identical() {
    let mut pf = Pathfinder::new(&notch_and_room()).unwrap();
    let first = pf.path(pt(5, 5), pt(45, 10));
    let g1 = pf.visibility_graph().cloned();
    let second = pf.path(pt(5, 5), pt(45, 10));
    assert_eq!(first, second);
    assert_eq!(g1.as_ref(), pf.visibility_graph());
    assert_eq!(pf.routing_vertices().len(), 6);
}

#[test]
fn convex_polygon_sees_everything() {
    let square = vec![vec![pt(0, 0), pt(10, 0), pt(10, 10), pt(0, 10)]];
    let ps = PolygonSet::from_points(&square);
    let mut nodes = square[0].clone();
    nodes.extend([pt(3, 3), pt(7, 6)]);

    let g = visibility_graph(&ps, &nodes);
    assert_eq!(g.len(), nodes.len());
    assert_eq!(g.edge_count(), nodes.len() * (nodes.len() - 1));
    for n in &nodes {
        let others: Vec<Point> = nodes.iter().copied().filter(|m| m != n).collect();
        assert_eq!(g.neighbours(*n), others.as_slice());
    }
}

#[test]
fn equal_nodes_are_not_linked() {
    let ps = PolygonSet::from_points(&polygon_u());
    let g = visibility_graph(&ps, &[pt(5, 5), pt(5, 5)]);
    assert!(g.is_empty());
}

#[test]
fn line_of_sight_rejects_notch_bridge() {
    let ps = PolygonSet::from_points(&polygon_u());
    // Both ends on the arms' tips, no edge crossed, midpoint outside.
    assert!(!in_line_of_sight(&ps, pt(10, 0).to_vec2(), pt(20, 0).to_vec2()));
    assert!(in_line_of_sight(&ps, pt(10, 10).to_vec2(), pt(20, 10).to_vec2()));
    assert!(!in_line_of_sight(&ps, pt(5, 5).to_vec2(), pt(25, 5).to_vec2()));
}

#[test]
fn shared_polygon_set() {
    let first = Pathfinder::new(&polygon_o()).unwrap();
    let mut second = Pathfinder::from_polygon_set(first.polygon_set_arc()).unwrap();
    assert_eq!(first.routing_vertices(), second.routing_vertices());
    assert_eq!(
        second.path(pt(15, 10), pt(30, 30)),
        Some(vec![pt(15, 10), pt(20, 10), pt(30, 20), pt(30, 30)])
    );
    assert!(first.visibility_graph().is_none());
}

#[test]
fn construction_rejects_malformed_input() {
    assert_eq!(Pathfinder::new(&[]).unwrap_err(), PathfindError::NoPolygons);
    assert_eq!(
        Pathfinder::new(&[polygon_u()[0].clone(), vec![]]).unwrap_err(),
        PathfindError::EmptyPolygon { index: 1 }
    );
    let nan = PolygonSet::new(vec![crate::poly::Polygon::new(vec![
        crate::Vec2::new(0.0, 0.0),
        crate::Vec2::new(f64::NAN, 1.0),
    ])]);
    assert_eq!(
        Pathfinder::from_polygon_set(Arc::new(nan)).unwrap_err(),
        PathfindError::NonFinite { index: 0 }
    );
}

fn path_len(p: &[Point]) -> f64 {
    p.windows(2).map(|w| w[0].dist(w[1])).sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn paths_are_walkable(seed in 0u64..1_000, index in 0u64..8) {
        let plan = draw_floor_plan(FloorPlanCfg::default(), ReplayToken::new(seed, index));
        let mut pf = Pathfinder::new(&plan).unwrap();
        let ends = draw_points_inside(pf.polygon_set(), 2, ReplayToken::new(seed, index + 100));
        prop_assume!(ends.len() == 2);
        let (start, dest) = (ends[0], ends[1]);

        let found = pf.path(start, dest);
        let graph = pf.visibility_graph().unwrap();
        prop_assert!(graph.is_symmetric());
        if let Some(p) = found {
            prop_assert_eq!(p[0], start);
            prop_assert_eq!(*p.last().unwrap(), dest);
            for w in p.windows(2) {
                prop_assert!(graph.neighbours(w[0]).contains(&w[1]));
            }
            prop_assert!(path_len(&p) + 1e-9 >= start.dist(dest));
        }
    }
}
