//! Serializable summaries printed by the binary.

use serde::Serialize;
use skypath_core::{EfficientPath, EscapePath, Point};

#[derive(Debug, Clone, Serialize)]
pub struct EfficientReport {
    pub start: Point,
    pub end: Point,
    pub max_flying_height: i32,
    pub fuel_cost_per_unit: f64,
    pub climbing_cost_per_unit: f64,
    pub cost: f64,
    pub nodes_visited: usize,
    pub path: Vec<Point>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EscapeReport {
    pub start: Point,
    pub total_elevation_change: i64,
    pub path: Vec<Point>,
}

impl EscapeReport {
    pub fn new(start: Point, path: EscapePath) -> Self {
        Self {
            start,
            total_elevation_change: path.total_change,
            path: path.points,
        }
    }

    pub fn summary(&self) -> String {
        let end = self.path.last().copied().unwrap_or(self.start);
        format!(
            "escape path {} -> {}: {} points, total elevation change {}",
            self.start,
            end,
            self.path.len(),
            self.total_elevation_change
        )
    }
}

impl EfficientReport {
    pub fn summary(&self) -> String {
        format!(
            "efficient path {} -> {}: {} points, cost {:.4}, {} nodes visited",
            self.start,
            self.end,
            self.path.len(),
            self.cost,
            self.nodes_visited
        )
    }
}

pub fn efficient_report(
    start: Point,
    end: Point,
    max_flying_height: i32,
    fuel_cost_per_unit: f64,
    climbing_cost_per_unit: f64,
    path: EfficientPath,
) -> EfficientReport {
    EfficientReport {
        start,
        end,
        max_flying_height,
        fuel_cost_per_unit,
        climbing_cost_per_unit,
        cost: path.cost,
        nodes_visited: path.nodes_visited,
        path: path.points,
    }
}
