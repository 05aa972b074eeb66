// src/config.rs
//! Runtime configuration.
//!
//! Defaults first; an optional `genvet.toml` in the working directory
//! overlays them. Partial files are fine — every field and table defaults
//! independently. The API key is read from the environment at backend
//! construction and never lives in the TOML.

use crate::error::{Result, VetError};
use crate::generate::retry::RetryPolicy;
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_FILE: &str = "genvet.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub model: String,
    pub base_url: String,
    pub cache_capacity: usize,
    pub retry: RetryPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: "gpt-4".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            cache_capacity: 64,
            retry: RetryPolicy::default(),
        }
    }
}

impl Config {
    /// Loads config from `genvet.toml` in the working directory, falling
    /// back to defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns `VetError::Config` if the file exists but is invalid, and
    /// `VetError::Io` if it exists but cannot be read.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Same as [`Config::load`] but with an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses TOML config content.
    ///
    /// # Errors
    ///
    /// Returns `VetError::Config` on malformed TOML.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| VetError::Config(e.to_string()))
    }
}
