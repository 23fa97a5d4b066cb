// crates/nxq-cli/src/config.rs
//
// Runtime configuration for the nxq CLI.
// Loaded from a TOML file or populated with sensible defaults.

use serde::Deserialize;
use std::fs;

use nxq_inflation::GenesisState;

/// Runtime configuration for the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NodeConfig {
    /// Directory for local data storage (RocksDB).
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Log level used when `RUST_LOG` is unset: "trace", "debug", "info",
    /// "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Blocks produced per daily epoch; only affects reported heights.
    #[serde(default = "default_blocks_per_day")]
    pub blocks_per_day: u64,

    /// JSON genesis file used to seed a fresh store. When unset, the default
    /// genesis is used.
    #[serde(default)]
    pub genesis: Option<String>,
}

fn default_data_dir() -> String {
    "~/.nxq/data".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_blocks_per_day() -> u64 {
    17_280
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            blocks_per_day: default_blocks_per_day(),
            genesis: None,
        }
    }
}

impl NodeConfig {
    /// Load configuration from a TOML file at the given path.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(expand_tilde(path))?;
        let config: NodeConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// The genesis a fresh store is seeded with.
    pub fn load_genesis(&self) -> Result<GenesisState, Box<dyn std::error::Error>> {
        match &self.genesis {
            Some(path) => {
                let contents = fs::read_to_string(expand_tilde(path))?;
                Ok(GenesisState::from_json(&contents)?)
            }
            None => Ok(GenesisState::default()),
        }
    }

    /// Path of the RocksDB database inside `data_dir`.
    pub fn db_path(&self) -> String {
        format!("{}/state", expand_tilde(&self.data_dir))
    }
}

pub fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return format!("{}/{}", home.display(), rest);
        }
    }
    path.to_string()
}
