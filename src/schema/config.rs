//! Configuration types for Game of Life simulations.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Top-level simulation configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Grid dimensions.
    pub grid: GridConfig,
    /// Driver loop parameters.
    #[serde(default)]
    pub driver: DriverConfig,
}

/// Grid dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { rows: 70, cols: 70 }
    }
}

/// Parameters for the generation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Delay between generations in milliseconds.
    pub delay_ms: u64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self { delay_ms: 100 }
    }
}

impl SimulationConfig {
    /// Total number of cells, or `None` if it overflows `usize`.
    #[inline]
    pub fn grid_size(&self) -> Option<usize> {
        self.grid.rows.checked_mul(self.grid.cols)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.rows == 0 || self.grid.cols == 0 || self.grid_size().is_none() {
            return Err(ConfigError::InvalidDimensions);
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid dimensions (rows, cols) must be non-zero and their product must fit in usize")]
    InvalidDimensions,
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
