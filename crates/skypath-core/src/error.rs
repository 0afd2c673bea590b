//! Error taxonomy shared by the grid and both searches.

use crate::grid::Point;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathfinderError {
    /// Grid data does not match its declared shape.
    #[error("invalid grid: {reason}")]
    InvalidGrid { reason: String },

    #[error("invalid cost parameters: {reason}")]
    InvalidParameters { reason: String },

    #[error("point {point} is outside the {width}x{height} grid")]
    OutOfBounds {
        point: Point,
        width: usize,
        height: usize,
    },

    #[error("point {point} has elevation {elevation}, above the flying ceiling {ceiling}")]
    AboveCeiling {
        point: Point,
        elevation: i32,
        ceiling: i32,
    },

    /// The destination was never settled: every route to it crosses cells above the ceiling.
    #[error("no path from {start} to {end} under the flying ceiling")]
    Unreachable { start: Point, end: Point },
}
