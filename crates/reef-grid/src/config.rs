use std::fs;
use std::path::Path;

use reef_core::errors::{ErrorInfo, ReefError};
use serde::{Deserialize, Serialize};

use crate::grid::GridSize;
use crate::rank::TraceCaps;

/// YAML-configurable parameters for a reef session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Grid size used for generation.
    #[serde(default)]
    pub size: GridSize,
    /// Master seed; absent seeds draw from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Ranking trace caps.
    #[serde(default)]
    pub trace: TraceCaps,
}

impl EngineConfig {
    /// Parses a configuration from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, ReefError> {
        serde_yaml::from_str(text).map_err(|err| {
            ReefError::Config(
                ErrorInfo::new("config-parse", err.to_string())
                    .with_hint("sizes are 10 or 20; trace caps are non-negative integers"),
            )
        })
    }

    /// Loads a configuration file from disk.
    pub fn load(path: &Path) -> Result<Self, ReefError> {
        let text = fs::read_to_string(path).map_err(|err| {
            ReefError::Config(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        Self::from_yaml_str(&text).map_err(|err| match err {
            ReefError::Config(info) => {
                ReefError::Config(info.with_context("path", path.display().to_string()))
            }
            other => other,
        })
    }
}
