//! Step cost model: fuel burned over distance plus a climb penalty.

use crate::error::PathfinderError;
use crate::grid::{ElevationGrid, Point};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostParameters {
    /// Cost per unit of horizontal travel distance
    pub fuel_cost_per_unit: f64,
    /// Cost per unit of elevation gained; descents cost nothing
    pub climbing_cost_per_unit: f64,
}

impl Default for CostParameters {
    fn default() -> Self {
        Self {
            fuel_cost_per_unit: 1.0,
            climbing_cost_per_unit: 1.0,
        }
    }
}

impl CostParameters {
    pub fn new(fuel_cost_per_unit: f64, climbing_cost_per_unit: f64) -> Result<Self, PathfinderError> {
        let params = Self {
            fuel_cost_per_unit,
            climbing_cost_per_unit,
        };
        params.validate()?;
        Ok(params)
    }

    /// Both weights must be finite and non-negative so every step cost is too.
    pub fn validate(&self) -> Result<(), PathfinderError> {
        for (name, value) in [
            ("fuel_cost_per_unit", self.fuel_cost_per_unit),
            ("climbing_cost_per_unit", self.climbing_cost_per_unit),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PathfinderError::InvalidParameters {
                    reason: format!("{} must be a finite non-negative number, got {}", name, value),
                });
            }
        }
        Ok(())
    }
}

/// Prices directed steps between neighbouring cells of one grid.
#[derive(Debug, Clone, Copy)]
pub struct CostModel<'a> {
    grid: &'a ElevationGrid,
    params: CostParameters,
}

impl<'a> CostModel<'a> {
    pub fn new(grid: &'a ElevationGrid, params: CostParameters) -> Self {
        Self { grid, params }
    }

    /// Cost of flying from `start` to `end`.
    ///
    /// Both points must lie inside the grid; an off-grid endpoint is treated
    /// as flat ground so the result stays finite.
    pub fn step_cost(&self, start: Point, end: Point) -> f64 {
        let dx = f64::from((end.x - start.x).abs());
        let dy = f64::from((end.y - start.y).abs());
        let distance = (dx * dx + dy * dy).sqrt();

        let from = self.grid.elevation(start).unwrap_or(0);
        let to = self.grid.elevation(end).unwrap_or(from);
        let height_impact = (i64::from(to) - i64::from(from)).max(0) as f64;

        distance * self.params.fuel_cost_per_unit + height_impact * self.params.climbing_cost_per_unit
    }

    /// Sum of step costs along `path`; zero for empty or single-point paths.
    pub fn path_cost(&self, path: &[Point]) -> f64 {
        path.windows(2)
            .map(|step| self.step_cost(step[0], step[1]))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> ElevationGrid {
        ElevationGrid::from_rows(vec![vec![0, 4], vec![10, 2]]).unwrap()
    }

    #[test]
    fn climbing_is_charged() {
        let grid = ramp();
        let model = CostModel::new(&grid, CostParameters::new(2.0, 3.0).unwrap());
        // distance 1 * 2.0 + climb 4 * 3.0
        let cost = model.step_cost(Point::new(0, 0), Point::new(1, 0));
        assert!((cost - 14.0).abs() < 1e-9);
    }

    #[test]
    fn descending_only_burns_fuel() {
        let grid = ramp();
        let model = CostModel::new(&grid, CostParameters::new(2.0, 3.0).unwrap());
        let cost = model.step_cost(Point::new(1, 0), Point::new(0, 0));
        assert!((cost - 2.0).abs() < 1e-9);
    }

    #[test]
    fn cost_is_asymmetric_in_elevation() {
        let grid = ramp();
        let model = CostModel::new(&grid, CostParameters::default());
        let up = model.step_cost(Point::new(1, 1), Point::new(0, 1));
        let down = model.step_cost(Point::new(0, 1), Point::new(1, 1));
        assert!((up - 9.0).abs() < 1e-9);
        assert!((down - 1.0).abs() < 1e-9);
    }

    #[test]
    fn diagonal_steps_use_euclidean_distance() {
        let grid = ramp();
        let model = CostModel::new(&grid, CostParameters::new(1.0, 0.0).unwrap());
        let cost = model.step_cost(Point::new(0, 1), Point::new(1, 0));
        assert!((cost - std::f64::consts::SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn trivial_paths_cost_nothing() {
        let grid = ramp();
        let model = CostModel::new(&grid, CostParameters::default());
        assert_eq!(model.path_cost(&[]), 0.0);
        assert_eq!(model.path_cost(&[Point::new(1, 1)]), 0.0);
    }

    #[test]
    fn path_cost_sums_steps() {
        let grid = ramp();
        let model = CostModel::new(&grid, CostParameters::default());
        let path = [Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)];
        // (1 + 4) + (1 + 0)
        assert!((model.path_cost(&path) - 6.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_negative_or_nan_weights() {
        assert!(CostParameters::new(-1.0, 1.0).is_err());
        assert!(CostParameters::new(1.0, f64::NAN).is_err());
        assert!(CostParameters::new(0.0, 0.0).is_ok());
    }
}
