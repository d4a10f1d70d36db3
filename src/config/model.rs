//! Config struct definition and default implementation.

use super::types::*;
use crate::prompt::GeneratorOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the perchance CLI.
///
/// This struct represents the contents of `perchance.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Data locations
    // =========================================================================
    /// Style data file. When unset, the catalog built into the binary is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles_path: Option<PathBuf>,

    /// Directory holding saved generation templates (default: ".perchance/templates").
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,

    /// Append-only generation history (default: ".perchance/history.ndjson").
    #[serde(default = "default_history_file")]
    pub history_file: String,

    /// Number of history entries shown by default.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    // =========================================================================
    // Generation defaults
    // =========================================================================
    /// Style used when a command is given no `--style`.
    #[serde(default = "default_style")]
    pub default_style: String,

    /// Variations produced by `batch` when no `--count` is given.
    #[serde(default = "default_count")]
    pub default_count: usize,

    /// Append each style's quality modifiers.
    #[serde(default = "default_true")]
    pub include_quality: bool,

    /// Include each style's negative prompt in results.
    #[serde(default = "default_true")]
    pub include_negative_prompt: bool,

    /// Pick random variable candidates for single generations.
    #[serde(default)]
    pub randomize_variables: bool,

    /// Expand short subjects before rendering.
    #[serde(default)]
    pub expand_subjects: bool,

    // =========================================================================
    // Logging
    // =========================================================================
    /// Default log level when `RUST_LOG` is not set.
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            styles_path: None,
            templates_dir: default_templates_dir(),
            history_file: default_history_file(),
            history_limit: default_history_limit(),
            default_style: default_style(),
            default_count: default_count(),
            include_quality: default_true(),
            include_negative_prompt: default_true(),
            randomize_variables: false,
            expand_subjects: false,
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Generator switches derived from this config.
    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            include_quality: self.include_quality,
            include_negative_prompt: self.include_negative_prompt,
            randomize_variables: self.randomize_variables,
            expand_subjects: self.expand_subjects,
        }
    }
}
