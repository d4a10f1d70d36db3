//! Error types for the perchance CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for prompt generation and its surrounding commands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// A generation config is missing required fields, or CLI input is malformed.
    #[error("Invalid configuration: {0}")]
    Validation(String),

    /// The requested style key is not in the catalog.
    #[error("Style \"{key}\" not found. Available: {}", .available.join(", "))]
    StyleNotFound {
        /// The key that was requested.
        key: String,
        /// Every valid key, in catalog order.
        available: Vec<String>,
    },

    /// A style entry exists but cannot be rendered.
    #[error("Invalid style configuration for \"{key}\": {reason}")]
    MalformedStyle {
        /// The offending style key.
        key: String,
        /// What is missing or wrong.
        reason: String,
    },

    /// The style data source could not be read or parsed.
    #[error("Style catalog error: {0}")]
    Catalog(String),

    /// A saved template could not be found, read, or written.
    #[error("Template error: {0}")]
    Template(String),

    /// A local state file (config, history, export) could not be read or written.
    #[error("{0}")]
    Io(String),

    /// User provided an argument the command cannot act on.
    #[error("{0}")]
    UserError(String),
}

impl PromptError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptError::Validation(_) => exit_codes::VALIDATION_FAILURE,
            PromptError::StyleNotFound { .. } => exit_codes::USER_ERROR,
            PromptError::MalformedStyle { .. } => exit_codes::DATA_FAILURE,
            PromptError::Catalog(_) => exit_codes::DATA_FAILURE,
            PromptError::Template(_) => exit_codes::USER_ERROR,
            PromptError::Io(_) => exit_codes::IO_FAILURE,
            PromptError::UserError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for perchance operations.
pub type Result<T> = std::result::Result<T, PromptError>;
