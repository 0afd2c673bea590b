//! Cheapest-path search over the 8-connected elevation grid.
//!
//! Cells above the flying ceiling are never entered. Edge weights come from
//! [`CostModel`], which is never negative, so a cell's cost is final once it
//! is popped from the frontier.

use crate::cost::{CostModel, CostParameters};
use crate::error::PathfinderError;
use crate::grid::{ElevationGrid, Point};
use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Expansion order: W, E, N, S, SW, NW, SE, NE as (dx, dy).
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, 1),
    (-1, -1),
    (1, 1),
    (1, -1),
];

/// Altitude limit for the vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightEnvelope {
    pub max_flying_height: i32,
}

impl FlightEnvelope {
    pub fn new(max_flying_height: i32) -> Self {
        Self { max_flying_height }
    }

    pub fn permits(&self, elevation: i32) -> bool {
        elevation <= self.max_flying_height
    }
}

impl Default for FlightEnvelope {
    fn default() -> Self {
        Self {
            max_flying_height: i32::MAX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EfficientPath {
    /// Source to destination, both inclusive.
    pub points: Vec<Point>,
    pub cost: f64,
    pub nodes_visited: usize,
}

#[derive(Debug, Clone, Copy)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenNode {
    cost: FloatOrd,
    point: Point,
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.point.cmp(&other.point))
    }
}

/// Per-call scratch space, indexed row-major like the grid.
struct SearchState {
    cost: Vec<f64>,
    came_from: Vec<Option<usize>>,
    open_set: BinaryHeap<Reverse<OpenNode>>,
    nodes_visited: usize,
}

impl SearchState {
    fn new(cells: usize) -> Self {
        Self {
            cost: vec![f64::INFINITY; cells],
            came_from: vec![None; cells],
            open_set: BinaryHeap::new(),
            nodes_visited: 0,
        }
    }

    fn push(&mut self, point: Point, cost: f64) {
        self.open_set.push(Reverse(OpenNode {
            cost: FloatOrd(cost),
            point,
        }));
    }
}

/// Dijkstra search bound to one grid, ceiling and cost configuration.
#[derive(Debug, Clone, Copy)]
pub struct EfficientPathSearch<'a> {
    grid: &'a ElevationGrid,
    envelope: FlightEnvelope,
    model: CostModel<'a>,
}

impl<'a> EfficientPathSearch<'a> {
    pub fn new(grid: &'a ElevationGrid, envelope: FlightEnvelope, params: CostParameters) -> Self {
        Self {
            grid,
            envelope,
            model: CostModel::new(grid, params),
        }
    }

    /// Find the cheapest path from `start` to `end`.
    ///
    /// Both endpoints must be inside the grid and at or below the ceiling.
    /// Returns [`PathfinderError::Unreachable`] when the ceiling walls the
    /// destination off; a partial path is never returned.
    pub fn find_path(&self, start: Point, end: Point) -> Result<EfficientPath, PathfinderError> {
        let start_idx = self.check_endpoint(start)?;
        let end_idx = self.check_endpoint(end)?;

        let mut state = SearchState::new(self.grid.len());
        state.cost[start_idx] = 0.0;
        state.push(start, 0.0);

        self.run(&mut state, end);

        let total = state.cost[end_idx];
        if !total.is_finite() {
            tracing::debug!(
                %start,
                %end,
                nodes_visited = state.nodes_visited,
                "destination unreachable under ceiling"
            );
            return Err(PathfinderError::Unreachable { start, end });
        }

        let points = self.reconstruct(&state, start_idx, end_idx);
        tracing::debug!(
            %start,
            %end,
            cost = total,
            steps = points.len().saturating_sub(1),
            nodes_visited = state.nodes_visited,
            "efficient path found"
        );

        Ok(EfficientPath {
            points,
            cost: total,
            nodes_visited: state.nodes_visited,
        })
    }

    /// Total step cost along `path` under this search's cost model.
    pub fn path_cost(&self, path: &[Point]) -> f64 {
        self.model.path_cost(path)
    }

    fn check_endpoint(&self, point: Point) -> Result<usize, PathfinderError> {
        let idx = self
            .grid
            .index(point)
            .ok_or_else(|| self.grid.out_of_bounds(point))?;
        let elevation = self.grid.elevation(point).unwrap_or(i32::MAX);
        if !self.envelope.permits(elevation) {
            return Err(PathfinderError::AboveCeiling {
                point,
                elevation,
                ceiling: self.envelope.max_flying_height,
            });
        }
        Ok(idx)
    }

    fn run(&self, state: &mut SearchState, end: Point) {
        while let Some(Reverse(current)) = state.open_set.pop() {
            let Some(current_idx) = self.grid.index(current.point) else {
                continue;
            };
            let best = state.cost[current_idx];
            // Stale entry left behind by a later relaxation.
            if current.cost.0 > best {
                continue;
            }

            state.nodes_visited += 1;

            if current.point == end {
                break;
            }

            for (dx, dy) in NEIGHBOR_OFFSETS {
                let next = current.point.offset(dx, dy);
                let Some(next_idx) = self.grid.index(next) else {
                    continue;
                };
                let Some(elevation) = self.grid.elevation(next) else {
                    continue;
                };
                if !self.envelope.permits(elevation) {
                    continue;
                }

                let tentative = best + self.model.step_cost(current.point, next);
                if tentative < state.cost[next_idx] {
                    state.cost[next_idx] = tentative;
                    state.came_from[next_idx] = Some(current_idx);
                    state.push(next, tentative);
                }
            }
        }
    }

    fn reconstruct(&self, state: &SearchState, start_idx: usize, end_idx: usize) -> Vec<Point> {
        let mut points = vec![self.grid.point_at(end_idx)];
        let mut current = end_idx;
        while current != start_idx {
            let Some(prev) = state.came_from[current] else {
                break;
            };
            points.push(self.grid.point_at(prev));
            current = prev;
        }
        points.reverse();
        points
    }
}
