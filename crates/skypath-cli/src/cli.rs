//! Command line arguments.

use clap::{Parser, Subcommand};
use skypath_core::Point;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Cost-aware path search over elevation grids", long_about = None)]
pub struct Args {
    /// Elevation matrix: whitespace-delimited integers, row-major
    #[arg(long)]
    pub grid: PathBuf,

    /// Number of rows in the matrix
    #[arg(long)]
    pub rows: usize,

    /// Number of columns in the matrix
    #[arg(long)]
    pub cols: usize,

    /// Highest elevation the vehicle may fly over [env: SKYPATH_MAX_FLYING_HEIGHT]
    #[arg(long, allow_negative_numbers = true)]
    pub max_flying_height: Option<i32>,

    /// Cost per unit of travel distance [env: SKYPATH_FUEL_COST]
    #[arg(long)]
    pub fuel_cost: Option<f64>,

    /// Cost per unit of elevation gained [env: SKYPATH_CLIMB_COST]
    #[arg(long)]
    pub climb_cost: Option<f64>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Cheapest path between two cells under the fuel and climb cost model
    Efficient {
        /// Start cell as X,Y (column,row)
        #[arg(long, value_parser = parse_point)]
        from: Point,

        /// Destination cell as X,Y (column,row)
        #[arg(long, value_parser = parse_point)]
        to: Point,

        /// Render the grayscale map with the path overlaid to this PNG
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Greedy eastward escape path with the smallest elevation changes
    Escape {
        /// Start cell as X,Y (column,row)
        #[arg(long, value_parser = parse_point)]
        from: Point,

        /// Render the grayscale map with the path overlaid to this PNG
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Write the elevations rescaled to 0-255
    Grayscale {
        /// Output matrix file [env: SKYPATH_GRAYSCALE_FILE]
        #[arg(long)]
        output: Option<PathBuf>,

        /// Also render the map to this PNG
        #[arg(long)]
        image: Option<PathBuf>,
    },
}

/// Parse `X,Y` into a grid point.
pub fn parse_point(value: &str) -> Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got {:?}", value))?;
    let x = x
        .trim()
        .parse::<i32>()
        .map_err(|err| format!("invalid column {:?}: {}", x, err))?;
    let y = y
        .trim()
        .parse::<i32>()
        .map_err(|err| format!("invalid row {:?}: {}", y, err))?;
    Ok(Point::new(x, y))
}
