//! Configuration APIs for tabula
//!
//! Configurations are plain serde structs that can be validated, read from
//! environment variables and persisted as JSON.
//!
//! ```rust
//! use tabula::config::{Config, TableauConfig};
//! use tabula::YoungTableau;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TableauConfig::square(4);
//! config.validate()?;
//!
//! let tableau = YoungTableau::from_config(&config)?;
//! assert_eq!(tableau.capacity(), 16);
//! # Ok(())
//! # }
//! ```
//!
//! # Environment Initialization
//!
//! ```rust
//! use tabula::config::{Config, TableauConfig};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads TABULA_TABLEAU_ROWS / TABULA_TABLEAU_COLS, falling back to defaults
//! let config = TableauConfig::from_env()?;
//!
//! // Same, with a custom prefix: MYAPP_TABLEAU_ROWS / MYAPP_TABLEAU_COLS
//! let config = TableauConfig::from_env_with_prefix("MYAPP_")?;
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use std::env;
use std::fmt;
use std::path::Path;

pub mod tableau;


pub use tableau::TableauConfig;

/// Common configuration trait providing validation, environment
/// initialization and file persistence.
pub trait Config: Clone + fmt::Debug {
    /// Validate the configuration for correctness and consistency.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the configuration is valid, `Err` with details if invalid.
    fn validate(&self) -> Result<()>;

    /// Initialize configuration from environment variables.
    ///
    /// Environment variables use the format `TABULA_{COMPONENT}_{FIELD}`,
    /// for example `TABULA_TABLEAU_ROWS=16`.
    fn from_env() -> Result<Self>
    where
        Self: Default,
    {
        Self::from_env_with_prefix("TABULA_")
    }

    /// Initialize configuration from environment variables with a custom prefix.
    ///
    /// Unset or unparsable variables fall back to the default value.
    fn from_env_with_prefix(prefix: &str) -> Result<Self>
    where
        Self: Default;

    /// Save configuration to a file.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    /// Load and validate configuration from a file.
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

/// Parse an environment variable, falling back to `default`.
pub fn parse_env_var<T>(var_name: &str, default: T) -> T
where
    T: std::str::FromStr + Clone,
{
    env::var(var_name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
