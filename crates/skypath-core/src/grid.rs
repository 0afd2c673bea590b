//! Elevation grid storage and coordinate types.

use crate::error::PathfinderError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grid coordinate: `x` is the column, `y` is the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Point shifted by `(dx, dy)`. Callers bounds-check the result.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Immutable height map, `height` rows by `width` columns, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevationGrid {
    height: usize,
    width: usize,
    elevations: Vec<i32>,
}

impl ElevationGrid {
    pub fn new(height: usize, width: usize, elevations: Vec<i32>) -> Result<Self, PathfinderError> {
        if height == 0 || width == 0 {
            return Err(PathfinderError::InvalidGrid {
                reason: format!("dimensions must be non-zero, got {}x{}", width, height),
            });
        }
        let expected = height.checked_mul(width).ok_or_else(|| PathfinderError::InvalidGrid {
            reason: format!("{}x{} overflows the address space", width, height),
        })?;
        if elevations.len() != expected {
            return Err(PathfinderError::InvalidGrid {
                reason: format!(
                    "expected {} values for {} rows x {} cols, got {}",
                    expected,
                    height,
                    width,
                    elevations.len()
                ),
            });
        }
        if i32::try_from(height).is_err() || i32::try_from(width).is_err() {
            return Err(PathfinderError::InvalidGrid {
                reason: format!("{}x{} exceeds the coordinate range", width, height),
            });
        }
        Ok(Self {
            height,
            width,
            elevations,
        })
    }

    /// Build a grid from nested rows; every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self, PathfinderError> {
        let height = rows.len();
        let width = rows.first().map(|row| row.len()).unwrap_or(0);
        let mut elevations = Vec::with_capacity(height.saturating_mul(width));
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(PathfinderError::InvalidGrid {
                    reason: format!("row {} has {} values, expected {}", idx, row.len(), width),
                });
            }
            elevations.extend(row);
        }
        Self::new(height, width, elevations)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    /// Row-major slot for `point`, or `None` outside the grid.
    pub fn index(&self, point: Point) -> Option<usize> {
        if !self.contains(point) {
            return None;
        }
        Some(point.y as usize * self.width + point.x as usize)
    }

    /// Inverse of [`ElevationGrid::index`].
    pub fn point_at(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    pub fn elevation(&self, point: Point) -> Option<i32> {
        self.index(point).map(|idx| self.elevations[idx])
    }

    pub fn len(&self) -> usize {
        self.elevations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elevations.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[i32]> {
        self.elevations.chunks(self.width)
    }

    /// Lowest and highest elevation in the grid.
    pub fn min_max(&self) -> (i32, i32) {
        self.elevations
            .iter()
            .fold((i32::MAX, i32::MIN), |(lo, hi), &value| {
                (lo.min(value), hi.max(value))
            })
    }

    pub(crate) fn out_of_bounds(&self, point: Point) -> PathfinderError {
        PathfinderError::OutOfBounds {
            point,
            width: self.width,
            height: self.height,
        }
    }
}

/// Elevations rescaled linearly into 0..=255 using the grid's global min/max.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrayscaleMap {
    height: usize,
    width: usize,
    values: Vec<u8>,
}

impl GrayscaleMap {
    pub fn from_grid(grid: &ElevationGrid) -> Self {
        let (min, max) = grid.min_max();
        let span = i64::from(max) - i64::from(min);
        let values = grid
            .elevations
            .iter()
            .map(|&value| {
                if span == 0 {
                    // Flat terrain has no contrast to map.
                    return 0;
                }
                let ratio = (i64::from(value) - i64::from(min)) as f64 / span as f64;
                (ratio * 255.0) as u8
            })
            .collect();

        tracing::debug!(min, max, cells = grid.len(), "rescaled grid to grayscale");

        Self {
            height: grid.height,
            width: grid.width,
            values,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn value(&self, point: Point) -> Option<u8> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        let (x, y) = (point.x as usize, point.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.values[y * self.width + x])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.values.chunks(self.width)
    }
}
