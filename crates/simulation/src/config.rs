//! Run configuration (TOML).
//!
//! ```toml
//! days = 30
//! seed = 7
//! output_dir = "sample_output"
//!
//! [[items]]
//! name = "Nail Polish"
//! stock = 60
//! reorder_threshold = 20
//! reorder_amount = 50
//! ```
//!
//! Every key is optional. A file without `[[items]]` gets the default salon
//! roster.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use stocksim_core::DomainError;
use stocksim_inventory::ItemSpec;

use crate::roster::Roster;

pub const DEFAULT_DAYS: i64 = 30;
pub const DEFAULT_OUTPUT_DIR: &str = "sample_output";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Days to simulate. Zero or negative means no days run.
    pub days: i64,
    /// Seed for the demand generator; `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub output_dir: PathBuf,
    pub items: Vec<ItemSpec>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            seed: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            items: default_items(),
        }
    }
}

/// The nail salon roster used when nothing else is configured.
pub fn default_items() -> Vec<ItemSpec> {
    vec![
        ItemSpec::new("Nail Polish", 60, 20, 50),
        ItemSpec::new("Acrylic Powder", 40, 15, 30),
    ]
}

impl SimulationConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        tracing::debug!(path = %path.display(), items = config.items.len(), "loaded config");
        Ok(config)
    }

    /// Number of day iterations the driver should perform.
    pub fn day_count(&self) -> u32 {
        self.days.clamp(0, i64::from(u32::MAX)) as u32
    }

    /// Build a fresh roster, validating every item.
    pub fn build_roster(&self) -> Result<Roster, ConfigError> {
        Ok(Roster::from_specs(&self.items)?)
    }
}
