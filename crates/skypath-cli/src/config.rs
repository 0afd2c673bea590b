//! Runtime configuration from environment.

use crate::export::DEFAULT_GRAYSCALE_FILE;
use skypath_core::{CostParameters, FlightEnvelope, PathfinderError};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub max_flying_height: i32,
    pub fuel_cost_per_unit: f64,
    pub climbing_cost_per_unit: f64,
    pub grayscale_file: PathBuf,
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_flying_height: i32::MAX,
            fuel_cost_per_unit: 1.0,
            climbing_cost_per_unit: 1.0,
            grayscale_file: PathBuf::from(DEFAULT_GRAYSCALE_FILE),
            log_json: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unparsable values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            max_flying_height: lookup("SKYPATH_MAX_FLYING_HEIGHT")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.max_flying_height),
            fuel_cost_per_unit: lookup("SKYPATH_FUEL_COST")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.fuel_cost_per_unit),
            climbing_cost_per_unit: lookup("SKYPATH_CLIMB_COST")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.climbing_cost_per_unit),
            grayscale_file: lookup("SKYPATH_GRAYSCALE_FILE")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.grayscale_file),
            log_json: lookup("SKYPATH_LOG_JSON")
                .map(|s| matches!(s.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.log_json),
        }
    }

    pub fn envelope(&self) -> FlightEnvelope {
        FlightEnvelope::new(self.max_flying_height)
    }

    pub fn cost_parameters(&self) -> Result<CostParameters, PathfinderError> {
        CostParameters::new(self.fuel_cost_per_unit, self.climbing_cost_per_unit)
    }
}
