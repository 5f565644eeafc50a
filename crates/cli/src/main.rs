mod polygons;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pathfind::{ClampCfg, Pathfinder, Point, VisibilityGraph};
use polygons::PolygonFile;
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "pathfind")]
#[command(about = "Shortest paths inside polygon floor plans")]
struct Cmd {
    /// Log level for stderr output (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    /// Polygon JSON file; the built-in floor plan when omitted
    #[arg(long, global = true)]
    polygons: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the shortest path between two points
    Path {
        #[arg(long, value_parser = parse_point, default_value = "245,78")]
        start: Point,
        #[arg(long, value_parser = parse_point, default_value = "420,125")]
        dest: Point,
        /// Also print the visibility graph of the query
        #[arg(long)]
        graph: bool,
        /// Lattice radius probed when nudging a clamped destination inside
        #[arg(long, default_value_t = ClampCfg::default().probe_radius)]
        probe_radius: i32,
    },
    /// Print the routing vertices and which polygons are holes
    Vertices,
    /// Report whether a point is walkable and where a destination there lands
    Check {
        #[arg(long, value_parser = parse_point)]
        point: Point,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(cmd.log_level)
        .with_writer(std::io::stderr)
        .init();

    let file = match &cmd.polygons {
        Some(path) => PolygonFile::load(path)?,
        None => PolygonFile::builtin()?,
    };
    tracing::info!(
        polygons = file.polygons.len(),
        canvas_w = file.canvas.w,
        canvas_h = file.canvas.h,
        source = ?cmd.polygons,
        "loaded floor plan"
    );
    let pf = Pathfinder::new(&file.points()).context("building pathfinder")?;

    let out = match cmd.action {
        Action::Path {
            start,
            dest,
            graph,
            probe_radius,
        } => {
            let mut pf = pf.with_clamp_cfg(ClampCfg { probe_radius });
            path_report(&mut pf, start, dest, graph)
        }
        Action::Vertices => vertices_report(&pf),
        Action::Check { point } => check_report(&pf, point),
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

/// `X,Y` with integer coordinates.
fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let coord = |t: &str| {
        t.trim()
            .parse::<i32>()
            .map_err(|e| format!("bad coordinate {t:?}: {e}"))
    };
    Ok(Point::new(coord(x)?, coord(y)?))
}

fn xy(p: Point) -> Value {
    json!([p.x, p.y])
}

fn graph_json(g: &VisibilityGraph) -> Value {
    let mut nodes: Vec<_> = g.iter().collect();
    nodes.sort_by_key(|(n, _)| **n);
    Value::Array(
        nodes
            .into_iter()
            .map(|(n, ns)| {
                json!({
                    "node": xy(*n),
                    "neighbours": ns.iter().copied().map(xy).collect::<Vec<_>>(),
                })
            })
            .collect(),
    )
}

fn path_report(pf: &mut Pathfinder, start: Point, dest: Point, with_graph: bool) -> Value {
    let clamped = pf.clamp_dest(dest);
    let path = pf.path(start, dest);
    let mut out = json!({
        "start": xy(start),
        "dest": xy(dest),
        "clamped_dest": xy(clamped),
        "path": path.map(|p| p.into_iter().map(xy).collect::<Vec<_>>()),
    });
    if with_graph {
        if let Some(g) = pf.visibility_graph() {
            out["graph"] = graph_json(g);
        }
    }
    out
}

fn vertices_report(pf: &Pathfinder) -> Value {
    let ps = pf.polygon_set();
    let holes: Vec<usize> = (0..ps.len()).filter(|&i| ps.is_hole(i)).collect();
    json!({
        "polygons": ps.len(),
        "holes": holes,
        "routing_vertices": pf.routing_vertices().iter().copied().map(xy).collect::<Vec<_>>(),
    })
}

fn check_report(pf: &Pathfinder, point: Point) -> Value {
    json!({
        "point": xy(point),
        "inside": pf.contains(point),
        "clamped": xy(pf.clamp_dest(point)),
    })
}
