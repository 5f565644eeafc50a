use anyhow::{Context, Result};
use pathfind::Point;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Floor plan used when no polygon file is given.
pub const BUILTIN_FLOOR_PLAN: &str = include_str!("../data/floor_plan.json");

/// Polygon export of the "Polygon Constructor" web tool.
#[derive(Debug, Deserialize)]
pub struct PolygonFile {
    #[serde(default)]
    pub canvas: Canvas,
    pub polygons: Vec<Vec<Vertex>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Canvas {
    pub w: i32,
    pub h: i32,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl PolygonFile {
    pub fn from_json(data: &str) -> Result<Self> {
        serde_json::from_str(data).context("could not parse polygon JSON")
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading polygon file {}", path.display()))?;
        Self::from_json(&data).with_context(|| format!("in {}", path.display()))
    }

    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_FLOOR_PLAN)
    }

    /// Integer vertex lists; coordinates are truncated toward zero.
    pub fn points(&self) -> Vec<Vec<Point>> {
        self.polygons
            .iter()
            .map(|poly| {
                poly.iter()
                    .map(|v| Point::new(v.x as i32, v.y as i32))
                    .collect()
            })
            .collect()
    }
}
