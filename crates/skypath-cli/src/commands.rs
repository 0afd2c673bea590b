//! Command dispatch: load the grid, run the requested search, emit results.

use anyhow::{Context, Result};
use skypath_core::{
    CostParameters, EfficientPathSearch, ElevationGrid, EscapePathSearch, FlightEnvelope,
    GrayscaleMap, Point,
};
use std::path::Path;

use crate::cli::{Args, Command};
use crate::config::Config;
use crate::export::export_grayscale;
use crate::loader::load_grid;
use crate::render::{overlay_path, render_grayscale, save_png, PathKind};
use crate::report::{efficient_report, EscapeReport};

/// Command-line flags layered over the environment configuration.
pub fn resolve_config(args: &Args, mut config: Config) -> Config {
    if let Some(height) = args.max_flying_height {
        config.max_flying_height = height;
    }
    if let Some(fuel) = args.fuel_cost {
        config.fuel_cost_per_unit = fuel;
    }
    if let Some(climb) = args.climb_cost {
        config.climbing_cost_per_unit = climb;
    }
    config
}

/// Run one command and return what should be printed.
pub fn run(args: Args, config: Config) -> Result<String> {
    let config = resolve_config(&args, config);
    let params = config
        .cost_parameters()
        .context("invalid cost configuration")?;
    let grid = load_grid(&args.grid, args.rows, args.cols)
        .with_context(|| format!("loading {}", args.grid.display()))?;

    match args.command {
        Command::Efficient { from, to, image } => run_efficient(
            &grid,
            config.envelope(),
            params,
            from,
            to,
            image.as_deref(),
            args.json,
        ),
        Command::Escape { from, image } => run_escape(&grid, from, image.as_deref(), args.json),
        Command::Grayscale { output, image } => {
            let output = output.unwrap_or_else(|| config.grayscale_file.clone());
            run_grayscale(&grid, &output, image.as_deref())
        }
    }
}

fn run_efficient(
    grid: &ElevationGrid,
    envelope: FlightEnvelope,
    params: CostParameters,
    from: Point,
    to: Point,
    image: Option<&Path>,
    json: bool,
) -> Result<String> {
    let search = EfficientPathSearch::new(grid, envelope, params);
    let path = search
        .find_path(from, to)
        .with_context(|| format!("efficient path search from {} to {}", from, to))?;

    if let Some(image_path) = image {
        let mut canvas = render_grayscale(&GrayscaleMap::from_grid(grid));
        overlay_path(&mut canvas, &path.points, PathKind::Efficient);
        save_png(&canvas, image_path)?;
    }

    let report = efficient_report(
        from,
        to,
        envelope.max_flying_height,
        params.fuel_cost_per_unit,
        params.climbing_cost_per_unit,
        path,
    );
    if json {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(report.summary())
    }
}

fn run_escape(grid: &ElevationGrid, from: Point, image: Option<&Path>, json: bool) -> Result<String> {
    let path = EscapePathSearch::new(grid)
        .find_escape_path(from)
        .with_context(|| format!("escape path search from {}", from))?;

    if let Some(image_path) = image {
        let mut canvas = render_grayscale(&GrayscaleMap::from_grid(grid));
        overlay_path(&mut canvas, &path.points, PathKind::Escape);
        save_png(&canvas, image_path)?;
    }

    let report = EscapeReport::new(from, path);
    if json {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(report.summary())
    }
}

fn run_grayscale(grid: &ElevationGrid, output: &Path, image: Option<&Path>) -> Result<String> {
    let map = GrayscaleMap::from_grid(grid);
    export_grayscale(&map, output)
        .with_context(|| format!("writing grayscale map to {}", output.display()))?;
    if let Some(image_path) = image {
        save_png(&render_grayscale(&map), image_path)?;
    }
    Ok(format!(
        "grayscale map {}x{} written to {}",
        map.width(),
        map.height(),
        output.display()
    ))
}
