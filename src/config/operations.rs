//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::MAX_COUNT;
use crate::error::{PromptError, Result};
use std::path::Path;
use tracing::debug;

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "perchance.yaml";

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the config file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PromptError::UserError)` - Parse error or validation failure
    /// * `Err(PromptError::Io)` - The file could not be read
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptError::Io(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the config for a run.
    ///
    /// An explicit path must exist. Otherwise `perchance.yaml` in `base_dir`
    /// is used when present, and defaults when it is not.
    pub fn resolve(explicit: Option<&Path>, base_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading explicit config");
            return Self::load(path);
        }

        let candidate = base_dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "loading config");
            Self::load(candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PromptError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PromptError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `default_count` must be between 1 and [`MAX_COUNT`]
    /// - `history_limit` must be positive
    /// - `default_style`, `templates_dir` and `history_file` must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.default_count == 0 {
            return Err(PromptError::UserError(
                "config validation failed: default_count must be greater than 0".to_string(),
            ));
        }
        if self.default_count > MAX_COUNT {
            return Err(PromptError::UserError(format!(
                "config validation failed: default_count must be at most {}",
                MAX_COUNT
            )));
        }

        if self.history_limit == 0 {
            return Err(PromptError::UserError(
                "config validation failed: history_limit must be greater than 0".to_string(),
            ));
        }

        for (field, value) in [
            ("default_style", &self.default_style),
            ("templates_dir", &self.templates_dir),
            ("history_file", &self.history_file),
        ] {
            if value.trim().is_empty() {
                return Err(PromptError::UserError(format!(
                    "config validation failed: {} must be non-empty",
                    field
                )));
            }
        }

        Ok(())
    }
}
