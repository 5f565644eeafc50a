//! Polygons from comma-separated coordinate strings, e.g.
//! `"186.5,364.7,303.25,374,303.1,412"`.
//!
//! Parsing is lenient: spaces around tokens are ignored, an
//! unparsable token reads as `0.0`, and a trailing odd coordinate is dropped.

use crate::poly::{Polygon, PolygonSet};
use crate::Vec2;

/// Parse a comma-separated list of floats. An empty first token yields `[]`.
pub fn parse_floats(s: &str) -> Vec<f64> {
    let mut out = Vec::new();
    for (i, tok) in s.split(',').enumerate() {
        let tok = tok.trim();
        if i == 0 && tok.is_empty() {
            break;
        }
        out.push(tok.parse().unwrap_or(0.0));
    }
    out
}

/// Consecutive coordinate pairs become vertices.
pub fn parse_polygon(coords: &str) -> Polygon {
    let floats = parse_floats(coords);
    Polygon::new(
        floats
            .chunks_exact(2)
            .map(|xy| Vec2::new(xy[0], xy[1]))
            .collect(),
    )
}

pub fn parse_polygons<S: AsRef<str>>(coords: &[S]) -> PolygonSet {
    PolygonSet::new(coords.iter().map(|c| parse_polygon(c.as_ref())).collect())
}
