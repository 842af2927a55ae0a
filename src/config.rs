//! Runtime configuration.

use crate::history::LayoutParams;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tunables for the simulation, the flow player and the history layout.
///
/// Every field falls back to its default when absent from the source JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How long a transform animates before it is committed.
    pub animation_ms: u64,
    /// Delay between automatic steps of an interactive flow.
    pub flow_step_ms: u64,
    pub history: LayoutParams,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            animation_ms: 2000,
            flow_step_ms: 2000,
            history: LayoutParams::default(),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn animation(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    pub fn flow_step(&self) -> Duration {
        Duration::from_millis(self.flow_step_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.animation_ms == 0 {
            return Err(ConfigError::Invalid("animation_ms must be positive".into()));
        }
        if self.flow_step_ms == 0 {
            return Err(ConfigError::Invalid("flow_step_ms must be positive".into()));
        }
        let h = &self.history;
        if !(h.base_offset.is_finite() && h.row_height > 0.0 && h.lane_width > 0.0) {
            return Err(ConfigError::Invalid(
                "history layout needs a finite offset and positive spacing".into(),
            ));
        }
        Ok(())
    }
}
