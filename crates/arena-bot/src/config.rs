//! Controller configuration, loadable from YAML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Tabard colours a controller may ask the host for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tabard {
    Blue,
    Brown,
    Grey,
    #[default]
    Red,
    Violet,
    White,
    Yellow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Controller name; also the identity used for equality and hashing.
    pub name: String,

    /// Preferred tabard colour.
    pub tabard: Tabard,

    /// Seed for the exploration RNG.
    pub seed: u64,

    /// Forget the world map on reset. Off by default: knowledge carries over between matches.
    pub clear_map_on_reset: bool,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            tabard: Tabard::default(),
            seed: default_seed(),
            clear_map_on_reset: false,
        }
    }
}

fn default_name() -> String {
    "BotController".to_string()
}

fn default_seed() -> u64 {
    0x5EED_AB1E_0000_0001
}

impl BotConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
