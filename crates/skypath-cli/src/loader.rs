//! Elevation matrix loading.

use skypath_core::{ElevationGrid, PathfinderError};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read grid file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("grid data has {found} values, expected {expected}")]
    TooFewValues { expected: usize, found: usize },

    #[error("value #{index} is not an integer: {token:?}")]
    InvalidToken { index: usize, token: String },

    #[error(transparent)]
    Grid(#[from] PathfinderError),
}

/// Read `rows * cols` integers in row-major order from `text`.
///
/// Tokens may be separated by any whitespace. Anything after the last
/// required value is ignored.
pub fn parse_grid(text: &str, rows: usize, cols: usize) -> Result<ElevationGrid, LoadError> {
    let expected = rows.checked_mul(cols).ok_or_else(|| PathfinderError::InvalidGrid {
        reason: format!("{}x{} overflows the address space", cols, rows),
    })?;
    // Sized by the input, not the declared dimensions: each value needs at
    // least one digit and one separator.
    let mut values = Vec::with_capacity(expected.min(text.len() / 2 + 1));
    let mut tokens = text.split_whitespace();

    for index in 0..expected {
        let Some(token) = tokens.next() else {
            return Err(LoadError::TooFewValues {
                expected,
                found: index,
            });
        };
        let value = token.parse::<i32>().map_err(|_| LoadError::InvalidToken {
            index,
            token: token.to_string(),
        })?;
        values.push(value);
    }

    let surplus = tokens.count();
    if surplus > 0 {
        tracing::debug!(surplus, "ignoring values past the declared grid size");
    }

    Ok(ElevationGrid::new(rows, cols, values)?)
}

pub fn load_grid(path: &Path, rows: usize, cols: usize) -> Result<ElevationGrid, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = parse_grid(&text, rows, cols)?;
    tracing::info!(path = %path.display(), rows, cols, "loaded elevation grid");
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skypath_core::Point;

    #[test]
    fn parses_mixed_whitespace() {
        let grid = parse_grid("1 2 3\n4\t5  6\n", 2, 3).unwrap();
        assert_eq!(grid.elevation(Point::new(2, 0)), Some(3));
        assert_eq!(grid.elevation(Point::new(0, 1)), Some(4));
    }

    #[test]
    fn rows_need_not_follow_line_breaks() {
        let grid = parse_grid("1 2 3 4 5 6", 3, 2).unwrap();
        assert_eq!(grid.elevation(Point::new(1, 2)), Some(6));
    }

    #[test]
    fn accepts_negative_elevations() {
        let grid = parse_grid("-5 10", 1, 2).unwrap();
        assert_eq!(grid.min_max(), (-5, 10));
    }

    #[test]
    fn reports_missing_values() {
        let err = parse_grid("1 2 3", 2, 2).unwrap_err();
        assert!(matches!(
            err,
            LoadError::TooFewValues {
                expected: 4,
                found: 3
            }
        ));
    }

    #[test]
    fn reports_bad_tokens() {
        let err = parse_grid("1 2 x 4", 2, 2).unwrap_err();
        match err {
            LoadError::InvalidToken { index, token } => {
                assert_eq!(index, 2);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn ignores_trailing_values() {
        let grid = parse_grid("1 2 3 4 99 99", 2, 2).unwrap();
        assert_eq!(grid.len(), 4);
    }

    #[test]
    fn zero_dimensions_are_rejected_by_the_grid() {
        assert!(matches!(parse_grid("", 0, 4), Err(LoadError::Grid(_))));
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        let err = parse_grid("1 2 3", usize::MAX / 2, 3).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Grid(PathfinderError::InvalidGrid { .. })
        ));
    }

    #[test]
    fn huge_dimensions_with_short_input_report_missing_values() {
        let err = parse_grid("1 2 3", usize::MAX / 8, 1).unwrap_err();
        assert!(matches!(
            err,
            LoadError::TooFewValues { found: 3, .. }
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_grid(Path::new("/nonexistent/skypath/grid.dat"), 2, 2).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
