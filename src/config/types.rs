//! Configuration types and defaults for perchance.
//!
//! This module defines enums and default value functions used by the
//! Config struct.

use serde::{Deserialize, Serialize};

/// Default verbosity for the stderr log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Error,
    /// Warnings only (default): skipped variations, unreadable history lines.
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// The directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Upper bound for `--count` and `default_count`.
pub const MAX_COUNT: usize = 10;

// Default value functions for serde
pub(crate) fn default_templates_dir() -> String {
    ".perchance/templates".to_string()
}
pub(crate) fn default_history_file() -> String {
    ".perchance/history.ndjson".to_string()
}
pub(crate) fn default_history_limit() -> usize {
    50
}
pub(crate) fn default_style() -> String {
    "photorealistic".to_string()
}
pub(crate) fn default_count() -> usize {
    3
}
pub(crate) fn default_true() -> bool {
    true
}
