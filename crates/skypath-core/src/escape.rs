//! Greedy eastward escape route that keeps elevation changes small.

use crate::error::PathfinderError;
use crate::grid::{ElevationGrid, Point};
use serde::{Deserialize, Serialize};

/// Forward candidates as (dx, dy): East, Northeast, Southeast.
const FORWARD_STEPS: [(i32, i32); 3] = [(1, 0), (1, -1), (1, 1)];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscapePath {
    pub points: Vec<Point>,
    /// Sum of absolute elevation changes between consecutive points.
    pub total_change: i64,
}

#[derive(Debug, Clone, Copy)]
pub struct EscapePathSearch<'a> {
    grid: &'a ElevationGrid,
}

impl<'a> EscapePathSearch<'a> {
    pub fn new(grid: &'a ElevationGrid) -> Self {
        Self { grid }
    }

    /// Walk east from `start`, at each column taking the forward neighbour
    /// whose elevation differs least from the current cell.
    ///
    /// The walk continues while the current row is above the last row and
    /// stops early once no forward neighbour is inside the grid. Due East wins
    /// every tie.
    pub fn find_escape_path(&self, start: Point) -> Result<EscapePath, PathfinderError> {
        let mut current_elevation = self
            .grid
            .elevation(start)
            .ok_or_else(|| self.grid.out_of_bounds(start))?;

        let last_row = self.grid.height() as i32 - 1;
        let mut points = vec![start];
        let mut current = start;
        let mut total_change = 0i64;

        while current.y < last_row {
            let mut next: Option<(Point, i32, i64)> = None;

            for (dx, dy) in FORWARD_STEPS {
                let candidate = current.offset(dx, dy);
                let Some(elevation) = self.grid.elevation(candidate) else {
                    continue;
                };
                let change = (i64::from(elevation) - i64::from(current_elevation)).abs();
                let better = match next {
                    None => true,
                    Some((_, _, best)) => change < best || (change == best && dy == 0),
                };
                if better {
                    next = Some((candidate, elevation, change));
                }
            }

            let Some((point, elevation, change)) = next else {
                break;
            };
            points.push(point);
            total_change += change;
            current = point;
            current_elevation = elevation;
        }

        tracing::debug!(
            %start,
            end = %current,
            steps = points.len() - 1,
            total_change,
            "escape path found"
        );

        Ok(EscapePath {
            points,
            total_change,
        })
    }

    pub fn escape_cost(&self, path: &[Point]) -> i64 {
        escape_cost(self.grid, path)
    }
}

/// Sum of absolute elevation changes along `path`. Off-grid points count as
/// no change.
pub fn escape_cost(grid: &ElevationGrid, path: &[Point]) -> i64 {
    path.windows(2)
        .map(|step| match (grid.elevation(step[0]), grid.elevation(step[1])) {
            (Some(from), Some(to)) => (i64::from(to) - i64::from(from)).abs(),
            _ => 0,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn flat_terrain_goes_due_east_until_the_edge() {
        let grid = ElevationGrid::new(3, 5, vec![0; 15]).unwrap();
        let search = EscapePathSearch::new(&grid);
        let path = search.find_escape_path(Point::new(0, 1)).unwrap();
        assert_eq!(
            path.points,
            points(&[(0, 1), (1, 1), (2, 1), (3, 1), (4, 1)])
        );
        assert_eq!(path.total_change, 0);
        assert_eq!(search.escape_cost(&path.points), 0);
    }

    #[test]
    fn single_row_grid_never_steps() {
        // Termination is on the row index: the last row is reached immediately.
        let grid = ElevationGrid::new(1, 6, vec![0; 6]).unwrap();
        let search = EscapePathSearch::new(&grid);
        let path = search.find_escape_path(Point::new(0, 0)).unwrap();
        assert_eq!(path.points, vec![Point::new(0, 0)]);
        assert_eq!(path.total_change, 0);
    }

    #[test]
    fn stops_once_the_last_row_is_reached() {
        let grid = ElevationGrid::from_rows(vec![
            vec![5, 9, 9, 9],
            vec![9, 9, 9, 9],
            vec![9, 5, 5, 5],
        ])
        .unwrap();
        let search = EscapePathSearch::new(&grid);
        let path = search.find_escape_path(Point::new(0, 1)).unwrap();
        // East keeps the change at 0 and wins its tie with Northeast.
        assert_eq!(path.points, points(&[(0, 1), (1, 1), (2, 1), (3, 1)]));

        let path = search.find_escape_path(Point::new(0, 0)).unwrap();
        // (0,0)=5 -> SE (1,1)=9 ties East (1,0)=9, East wins, then stays on row 0.
        assert_eq!(path.points, points(&[(0, 0), (1, 0), (2, 0), (3, 0)]));
    }

    #[test]
    fn picks_smallest_change_and_ends_on_last_row() {
        let grid = ElevationGrid::from_rows(vec![
            vec![0, 9, 9, 9],
            vec![9, 3, 9, 9],
            vec![9, 9, 2, 9],
        ])
        .unwrap();
        let search = EscapePathSearch::new(&grid);
        let path = search.find_escape_path(Point::new(0, 0)).unwrap();
        // (0,0)=0: E=9, SE=3 -> SE. (1,1)=3: E=9, NE=9, SE=2 -> SE, now on the last row.
        assert_eq!(path.points, points(&[(0, 0), (1, 1), (2, 2)]));
        assert_eq!(path.total_change, 4);
        assert_eq!(escape_cost(&grid, &path.points), 4);
    }

    #[test]
    fn northeast_wins_a_tie_with_southeast() {
        let grid = ElevationGrid::from_rows(vec![
            vec![9, 4, 9],
            vec![5, 0, 9],
            vec![9, 6, 9],
            vec![9, 9, 9],
        ])
        .unwrap();
        let search = EscapePathSearch::new(&grid);
        let path = search.find_escape_path(Point::new(0, 1)).unwrap();
        assert_eq!(path.points[1], Point::new(1, 0));
    }

    #[test]
    fn ignores_northeast_candidate_above_the_top_row() {
        let grid = ElevationGrid::from_rows(vec![vec![3, 7, 3], vec![9, 4, 9]]).unwrap();
        let search = EscapePathSearch::new(&grid);
        let path = search.find_escape_path(Point::new(0, 0)).unwrap();
        assert_eq!(path.points, points(&[(0, 0), (1, 1)]));
        assert_eq!(path.total_change, 1);
    }

    #[test]
    fn rejects_start_outside_grid() {
        let grid = ElevationGrid::new(2, 2, vec![0; 4]).unwrap();
        let search = EscapePathSearch::new(&grid);
        assert!(matches!(
            search.find_escape_path(Point::new(2, 0)),
            Err(PathfinderError::OutOfBounds { .. })
        ));
    }
}
