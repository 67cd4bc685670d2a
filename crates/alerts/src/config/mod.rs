use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::AlertsError;

/// Top-level configuration for an [`AlertService`](crate::AlertService),
/// loaded from a TOML file.
#[derive(Debug, Default, Deserialize)]
pub struct AlertServiceConfig {
    /// Rule loading configuration.
    #[serde(default)]
    pub rules: RulesConfig,
    /// Output rendering configuration (used by the CLI).
    #[serde(default)]
    pub output: OutputConfig,
}

impl AlertServiceConfig {
    /// Load configuration from `path`, or use defaults if the file does not exist.
    pub fn load(path: &Path) -> Result<Self, AlertsError> {
        if !path.exists() {
            return Self::from_toml("");
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AlertsError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, AlertsError> {
        toml::from_str(contents).map_err(|e| AlertsError::Config(e.to_string()))
    }
}

/// Configuration for loading rules beyond the built-in set.
#[derive(Debug, Deserialize)]
pub struct RulesConfig {
    /// Optional path to a directory containing YAML rule packs.
    ///
    /// Packs are appended after the built-in rules, one group per file.
    pub directory: Option<PathBuf>,
    /// Reject the repository when two rules for the same drug share an id.
    #[serde(default = "default_validate_on_load")]
    pub validate_on_load: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            directory: None,
            validate_on_load: default_validate_on_load(),
        }
    }
}

fn default_validate_on_load() -> bool {
    true
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// How alert lists are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Return the `snake_case` string representation (matches serde serialization).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
