//! Request and result types for prompt generation.

use crate::error::{PromptError, Result};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single generation request.
///
/// `style` and `subject` are required. Every other key is a variable
/// override (age, clothing, setting, mood, ...) that takes precedence over
/// the style's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default)]
    pub style: String,

    #[serde(default)]
    pub subject: String,

    #[serde(flatten)]
    pub overrides: IndexMap<String, String>,
}

impl GenerationConfig {
    pub fn new(style: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            style: style.into(),
            subject: subject.into(),
            overrides: IndexMap::new(),
        }
    }

    /// Add a variable override.
    pub fn with_override(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.insert(name.into(), value.into());
        self
    }

    /// Check that `style` and `subject` are present and non-blank.
    ///
    /// All problems are reported together, joined by `", "`.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        if self.style.trim().is_empty() {
            errors.push("Style is required");
        }
        if self.subject.trim().is_empty() {
            errors.push("Subject is required");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(PromptError::Validation(errors.join(", ")))
        }
    }

    /// Layer `other` on top of this config.
    ///
    /// Non-empty `style`/`subject` in `other` replace ours; its overrides are
    /// inserted after ours, replacing values for keys both define.
    pub fn merged_with(mut self, other: GenerationConfig) -> Self {
        if !other.style.trim().is_empty() {
            self.style = other.style;
        }
        if !other.subject.trim().is_empty() {
            self.subject = other.subject;
        }
        self.overrides.extend(other.overrides);
        self
    }
}

/// Size information derived from the rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptMetadata {
    /// Number of whitespace-delimited tokens.
    pub word_count: usize,
    /// Number of characters (Unicode scalar values).
    pub character_count: usize,
}

impl PromptMetadata {
    pub fn of(text: &str) -> Self {
        Self {
            word_count: text.split_whitespace().count(),
            character_count: text.chars().count(),
        }
    }
}

/// The outcome of one generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub text: String,
    pub style: String,
    pub variables: IndexMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,

    pub metadata: PromptMetadata,
    pub timestamp: DateTime<Utc>,

    /// 1-indexed position within a batch; absent for single generations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variation_number: Option<u32>,
}

impl GenerationResult {
    pub fn new(
        text: String,
        style: String,
        variables: IndexMap<String, String>,
        negative_prompt: Option<String>,
    ) -> Self {
        let metadata = PromptMetadata::of(&text);
        Self {
            text,
            style,
            variables,
            negative_prompt,
            metadata,
            timestamp: Utc::now(),
            variation_number: None,
        }
    }
}
