//! Random floor plans for benches and property tests.
//!
//! Model
//! - Outer area: `n` jittered angles around a centre with jittered radii,
//!   joined in angle order (star-shaped, same winding as the test fixtures).
//! - Holes: axis-aligned rectangles dropped inside the inscribed disc of the
//!   outer polygon, kept apart from each other by a gap.
//! - Vertex and hole counts are drawn from inclusive [`Count`] ranges.
//! - A replay token `(seed, index)` keys a single RNG per draw.

use ::rand::rngs::StdRng;
use ::rand::{Rng, SeedableRng};

use crate::point::Point;
use crate::poly::PolygonSet;

/// Inclusive range a count is drawn from uniformly. A `max` below `min`
/// reads as `min`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Count {
    pub min: usize,
    pub max: usize,
}

impl Count {
    pub const fn exactly(n: usize) -> Self {
        Self { min: n, max: n }
    }

    pub const fn between(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    fn draw(self, rng: &mut StdRng) -> usize {
        if self.max <= self.min {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FloorPlanCfg {
    /// Corners of the outer area; at least 3 are used.
    pub corners: Count,
    /// Angular jitter as a fraction of the base spacing. Clamped to [0, 0.45].
    pub angle_jitter_frac: f64,
    /// Radii are `radius * (1 + u)` with `u` in `[-radial_jitter, radial_jitter]`. Clamped to [0, 0.9].
    pub radial_jitter: f64,
    pub radius: f64,
    pub center: Point,
    /// Holes to aim for; fewer are placed when they do not fit.
    pub holes: Count,
    /// Side length range of the rectangular holes.
    pub hole_side: (i32, i32),
}

impl Default for FloorPlanCfg {
    fn default() -> Self {
        Self {
            corners: Count::between(8, 16),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.35,
            radius: 400.0,
            center: Point::new(500, 500),
            holes: Count::between(2, 5),
            hole_side: (20, 80),
        }
    }
}

/// Names one draw: the same `(seed, index)` always yields the same plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Seed and index fill the first 16 bytes of the ChaCha key.
    fn rng(self) -> StdRng {
        let mut key = <StdRng as SeedableRng>::Seed::default();
        key[..8].copy_from_slice(&self.seed.to_le_bytes());
        key[8..16].copy_from_slice(&self.index.to_le_bytes());
        StdRng::from_seed(key)
    }
}

/// Gap kept between holes and from the outer boundary.
const HOLE_GAP: i32 = 4;

/// Draw an outer area followed by its holes, ready for [`crate::Pathfinder::new`].
pub fn draw_floor_plan(cfg: FloorPlanCfg, tok: ReplayToken) -> Vec<Vec<Point>> {
    let mut rng = tok.rng();
    let n = cfg.corners.draw(&mut rng).max(3);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.45);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let r0 = cfg.radius.max(8.0);
    let delta = 2.0 * std::f64::consts::PI / (n as f64);
    let phase = rng.gen::<f64>() * delta;

    let mut angles: Vec<f64> = (0..n)
        .map(|k| phase + (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta)
        .collect();
    angles.sort_by(f64::total_cmp);
    let c = cfg.center.to_vec2();
    let outer: Vec<Point> = angles
        .iter()
        .map(|th| {
            let r = (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj) * r0;
            Point::from_vec2(c + crate::Vec2::new(th.cos(), th.sin()) * r)
        })
        .collect();

    // Consecutive angles are at most delta * (1 + 2 aj) apart. Below pi, every
    // chord stays at least r_min * cos(gap / 2) from the centre; above it r_in
    // goes negative and no hole is placed.
    let max_gap = delta * (1.0 + 2.0 * aj);
    let r_in = r0 * (1.0 - rj) * (max_gap / 2.0).cos() - 1.0 - f64::from(HOLE_GAP);

    let mut plan = vec![outer];
    let mut placed: Vec<(Point, Point)> = Vec::new();
    let (lo, hi) = (cfg.hole_side.0.max(1), cfg.hole_side.1.max(cfg.hole_side.0.max(1)));
    let holes = cfg.holes.draw(&mut rng);
    let mut attempts = holes * 32;
    while placed.len() < holes && attempts > 0 && r_in > f64::from(lo) {
        attempts -= 1;
        let w = rng.gen_range(lo..=hi);
        let h = rng.gen_range(lo..=hi);
        let span = r_in as i32;
        let min = cfg.center + Point::new(rng.gen_range(-span..=span), rng.gen_range(-span..=span));
        let max = min + Point::new(w, h);
        let corners = [min, Point::new(max.x, min.y), max, Point::new(min.x, max.y)];
        if corners.iter().any(|p| p.dist(cfg.center) > r_in) {
            continue;
        }
        let overlaps = placed.iter().any(|&(a, b)| {
            min.x <= b.x + HOLE_GAP
                && a.x <= max.x + HOLE_GAP
                && min.y <= b.y + HOLE_GAP
                && a.y <= max.y + HOLE_GAP
        });
        if overlaps {
            continue;
        }
        placed.push((min, max));
        plan.push(corners.to_vec());
    }
    plan
}

/// Up to `count` lattice points inside `ps`, by rejection in its bounding box.
pub fn draw_points_inside(ps: &PolygonSet, count: usize, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.rng();
    let verts = ps.iter().flat_map(|p| p.vertices.iter());
    let (mut lo, mut hi) = (Point::new(i32::MAX, i32::MAX), Point::new(i32::MIN, i32::MIN));
    for v in verts {
        let p = Point::from_vec2(*v);
        lo = Point::new(lo.x.min(p.x), lo.y.min(p.y));
        hi = Point::new(hi.x.max(p.x), hi.y.max(p.y));
    }
    if lo.x > hi.x {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(count);
    let mut attempts = count * 64;
    while out.len() < count && attempts > 0 {
        attempts -= 1;
        let p = Point::new(rng.gen_range(lo.x..=hi.x), rng.gen_range(lo.y..=hi.y));
        if ps.contains(p.to_vec2()) {
            out.push(p);
        }
    }
    out
}
