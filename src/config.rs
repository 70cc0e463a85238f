//! Board geometry and timing configuration
//!
//! Validated once at startup; the simulation keeps its own copy and never
//! mutates it.

use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Rejected configuration values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A dimension, the unit size, or the tick period is zero or negative
    NonPositive(&'static str),
    /// A board dimension is not a whole number of cells
    NotCellAligned(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive(field) => write!(f, "{field} must be positive"),
            ConfigError::NotCellAligned(field) => {
                write!(f, "{field} must be divisible by the unit size")
            }
        }
    }
}

impl Error for ConfigError {}

/// Board geometry and tick period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Board width in pixels
    pub board_width: i32,
    /// Board height in pixels
    pub board_height: i32,
    /// Edge length of one grid cell in pixels
    pub unit: i32,
    /// Tick period in milliseconds
    pub tick_ms: u64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            unit: UNIT_SIZE,
            tick_ms: TICK_MS,
        }
    }
}

impl GridConfig {
    /// Build a validated config
    pub fn new(board_width: i32, board_height: i32, unit: i32, tick_ms: u64) -> Result<Self, ConfigError> {
        let config = Self { board_width, board_height, unit, tick_ms };
        config.validate()?;
        Ok(config)
    }

    /// Check every field; run on both built and deserialized configs
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_width <= 0 {
            return Err(ConfigError::NonPositive("board width"));
        }
        if self.board_height <= 0 {
            return Err(ConfigError::NonPositive("board height"));
        }
        if self.unit <= 0 {
            return Err(ConfigError::NonPositive("unit size"));
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::NonPositive("tick period"));
        }
        if self.board_width % self.unit != 0 {
            return Err(ConfigError::NotCellAligned("board width"));
        }
        if self.board_height % self.unit != 0 {
            return Err(ConfigError::NotCellAligned("board height"));
        }
        Ok(())
    }

    /// Number of cells along the x axis
    pub fn cells_across(&self) -> i32 {
        self.board_width / self.unit
    }

    /// Number of cells along the y axis
    pub fn cells_down(&self) -> i32 {
        self.board_height / self.unit
    }

    /// Load a config from a JSON file
    ///
    /// A missing or unparseable file falls back to the defaults; a file that
    /// parses into out-of-range values is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            log::info!("Using default config");
            return Ok(Self::default());
        };

        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Self>(&json) {
                Ok(config) => {
                    config.validate()?;
                    log::info!("Loaded config from {}", path.display());
                    Ok(config)
                }
                Err(err) => {
                    log::warn!("Ignoring malformed config {}: {err}", path.display());
                    Ok(Self::default())
                }
            },
            Err(err) => {
                log::warn!("Could not read {}: {err}", path.display());
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GridConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_nonpositive_fields() {
        assert_eq!(
            GridConfig::new(0, 500, 25, 100),
            Err(ConfigError::NonPositive("board width"))
        );
        assert_eq!(
            GridConfig::new(500, -25, 25, 100),
            Err(ConfigError::NonPositive("board height"))
        );
        assert_eq!(
            GridConfig::new(500, 500, 0, 100),
            Err(ConfigError::NonPositive("unit size"))
        );
        assert_eq!(
            GridConfig::new(500, 500, 25, 0),
            Err(ConfigError::NonPositive("tick period"))
        );
    }

    #[test]
    fn test_rejects_unaligned_board() {
        assert_eq!(
            GridConfig::new(510, 500, 25, 100),
            Err(ConfigError::NotCellAligned("board width"))
        );
        assert_eq!(
            GridConfig::new(500, 510, 25, 100),
            Err(ConfigError::NotCellAligned("board height"))
        );
    }

    #[test]
    fn test_json_round_trip() {
        let config = GridConfig::new(600, 450, 25, 80).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let back: GridConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_cell_counts() {
        let config = GridConfig::new(500, 750, 25, 100).unwrap();
        assert_eq!(config.cells_across(), 20);
        assert_eq!(config.cells_down(), 30);
    }
}
