//! Young tableau dimensions.

use super::{Config, parse_env_var};
use crate::error::{Result, TabulaError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Dimensions of a [`YoungTableau`](crate::YoungTableau).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableauConfig {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl TableauConfig {
    /// Create a `rows x cols` configuration
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Create a `dim x dim` configuration
    pub fn square(dim: usize) -> Self {
        Self::new(dim, dim)
    }

    /// Number of cells, or `None` if it does not fit in `usize`
    pub fn capacity(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }
}

impl Default for TableauConfig {
    fn default() -> Self {
        Self::square(8)
    }
}

impl Config for TableauConfig {
    fn validate(&self) -> Result<()> {
        if self.rows == 0 {
            return Err(TabulaError::configuration("rows must be greater than 0"));
        }
        if self.cols == 0 {
            return Err(TabulaError::configuration("cols must be greater than 0"));
        }
        if self.capacity().is_none() {
            return Err(TabulaError::configuration(format!(
                "{}x{} tableau overflows the addressable cell count",
                self.rows, self.cols
            )));
        }
        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.rows = parse_env_var(&format!("{}TABLEAU_ROWS", prefix), config.rows);
        config.cols = parse_env_var(&format!("{}TABLEAU_COLS", prefix), config.cols);
        config.validate()?;
        Ok(config)
    }

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self).map_err(|e| {
            TabulaError::configuration(format!("Failed to serialize tableau config: {}", e))
        })?;
        std::fs::write(path, serialized).map_err(|e| {
            TabulaError::configuration(format!("Failed to write tableau config file: {}", e))
        })?;
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TabulaError::configuration(format!("Failed to read tableau config file: {}", e))
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            TabulaError::configuration(format!("Failed to parse tableau config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }
}
