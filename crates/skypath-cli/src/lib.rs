//! Skypath CLI - I/O adapters around the path search core.
//!
//! - loader: reads whitespace-delimited elevation matrices
//! - export: writes the rescaled grayscale matrix
//! - render: paints the grayscale map and path overlays into PNG images

pub mod cli;
pub mod commands;
pub mod config;
pub mod export;
pub mod loader;
pub mod render;
pub mod report;

pub use cli::{Args, Command};
pub use config::Config;
pub use loader::{load_grid, parse_grid, LoadError};
