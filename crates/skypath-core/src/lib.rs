pub mod cost;
pub mod efficient;
pub mod error;
pub mod escape;
pub mod grid;

pub use cost::{CostModel, CostParameters};
pub use efficient::{EfficientPath, EfficientPathSearch, FlightEnvelope};
pub use error::PathfinderError;
pub use escape::{escape_cost, EscapePath, EscapePathSearch};
pub use grid::{ElevationGrid, GrayscaleMap, Point};
