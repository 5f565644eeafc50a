//! Shortest paths through a notched room with a pillar, then through a few
//! random floor plans.
//!
//! Usage:
//!   cargo run -p pathfind --example floor_plan
//!   cargo run -p pathfind --example floor_plan -- random 5

use pathfind::point::pt;
use pathfind::rand::{draw_floor_plan, draw_points_inside, FloorPlanCfg, ReplayToken};
use pathfind::Pathfinder;

fn main() {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        None | Some("room") => show_room(),
        Some("random") => {
            let count = args.next().and_then(|s| s.parse().ok()).unwrap_or(3);
            show_random(count);
        }
        Some(_) => eprintln!("usage: floor_plan [room | random [COUNT]]"),
    }
}

fn show_room() {
    //  (0,0) +---+   +-----------+ (50,0)
    //        | s |   |   +---+   |
    //        |   +---+   |   | d |
    //        |           +---+   |
    // (0,20) +-------------------+ (50,20)
    let polygons = vec![
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
    ];
    let mut pf = match Pathfinder::new(&polygons) {
        Ok(pf) => pf,
        Err(e) => {
            eprintln!("invalid polygons: {e}");
            return;
        }
    };
    print_path(&mut pf, pt(5, 5), pt(45, 10));
    print_path(&mut pf, pt(5, 5), pt(60, 10));
}

fn show_random(count: u64) {
    for index in 0..count {
        let plan = draw_floor_plan(FloorPlanCfg::default(), ReplayToken::new(2025, index));
        let Ok(mut pf) = Pathfinder::new(&plan) else {
            continue;
        };
        println!(
            "plan {index}: {} polygons, {} routing vertices",
            plan.len(),
            pf.routing_vertices().len()
        );
        let ends = draw_points_inside(pf.polygon_set(), 2, ReplayToken::new(2026, index));
        if let [s, d] = ends[..] {
            print_path(&mut pf, s, d);
        }
    }
}

fn print_path(pf: &mut Pathfinder, start: pathfind::Point, dest: pathfind::Point) {
    match pf.path(start, dest) {
        Some(path) => {
            let hops: Vec<String> = path.iter().map(ToString::to_string).collect();
            println!("{start} -> {dest}: {}", hops.join(" "));
        }
        None => println!("{start} -> {dest}: no path"),
    }
}
