use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Optimizer settings as read from a JSON file. Missing fields take the defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FitConfig {
    pub learning_rate: f64,
    pub max_iterations: usize,
    /// `None` keeps the exact-equality stopping rule.
    pub tolerance: Option<f64>,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            max_iterations: 1000,
            tolerance: None,
        }
    }
}

impl FitConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}
