//! Store configuration for gradebook
//!
//! Configuration is stored in `.gradebook/config.toml`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GradebookError, Result};

/// Current store format version
pub const STORE_FORMAT_VERSION: u32 = 1;

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Course title, shown as a header by listing commands
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
}

fn default_version() -> u32 {
    STORE_FORMAT_VERSION
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            version: STORE_FORMAT_VERSION,
            course: None,
        }
    }
}

impl StoreConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: StoreConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GradebookError::Other(format!("failed to serialize config: {e}")))?;
        fs::write(path, content)?;
        Ok(())
    }
}
