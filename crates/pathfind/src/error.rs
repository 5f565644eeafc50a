//! Error types for pathfinder construction.

use thiserror::Error;

/// Rejected polygon input. Queries never fail; see `Pathfinder::path`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathfindError {
    #[error("polygon set is empty")]
    NoPolygons,

    #[error("polygon {index} has no vertices")]
    EmptyPolygon { index: usize },

    #[error("polygon {index} has a non-finite coordinate")]
    NonFinite { index: usize },
}

pub type Result<T> = std::result::Result<T, PathfindError>;
