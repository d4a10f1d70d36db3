//! Generation history log.
//!
//! Every successful generation appends one entry to an NDJSON file (one JSON
//! object per line), `.perchance/history.ndjson` by default.
//!
//! # Entry Format
//!
//! - `ts`: RFC3339 timestamp
//! - `action`: `generate`, `batch` or `enhance`
//! - `actor`: the owner string (e.g., `user@HOST`)
//! - `style`: requested style key
//! - `subject`: requested subject
//! - `count`: number of prompts produced
//! - `preview`: start of the first prompt
//!
//! The log is append-only; reading skips lines that fail to parse so one bad
//! write never hides the rest of the history.

use crate::error::{PromptError, Result};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Characters of the first prompt kept in an entry's preview.
pub const PREVIEW_CHARS: usize = 200;

/// Styles listed by [`HistorySummary::top_styles`].
pub const TOP_STYLES: usize = 5;

/// Actions recorded in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryAction {
    /// Single prompt or `generate --count`
    Generate,
    /// `batch` variations
    Batch,
    /// Enhanced prompts
    Enhance,
}

impl HistoryAction {
    pub fn as_str(self) -> &'static str {
        match self {
            HistoryAction::Generate => "generate",
            HistoryAction::Batch => "batch",
            HistoryAction::Enhance => "enhance",
        }
    }
}

impl std::fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of the history log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub ts: DateTime<Utc>,
    pub action: HistoryAction,
    pub actor: String,
    pub style: String,
    pub subject: String,
    pub count: usize,
    pub preview: String,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time and actor.
    ///
    /// `first_text` is the first produced prompt; an empty string is fine
    /// when nothing was produced.
    pub fn new(
        action: HistoryAction,
        style: impl Into<String>,
        subject: impl Into<String>,
        count: usize,
        first_text: &str,
    ) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: get_actor_string(),
            style: style.into(),
            subject: subject.into(),
            count,
            preview: preview(first_text),
        }
    }

    /// Serialize the entry to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            PromptError::UserError(format!("failed to serialize history entry: {}", e))
        })
    }
}

/// Truncate `text` to [`PREVIEW_CHARS`] characters, marking the cut with `...`.
pub fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(PREVIEW_CHARS).collect();
    cut.push_str("...");
    cut
}

fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Aggregates over the whole log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySummary {
    /// Sum of `count` over all entries.
    pub total_generations: usize,
    /// Up to [`TOP_STYLES`] `(style, prompts)` pairs, most used first.
    pub top_styles: Vec<(String, usize)>,
}

/// The history file.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    path: PathBuf,
}

impl HistoryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append an entry, creating the file and its directory as needed.
    pub fn append(&self, entry: &HistoryEntry) -> Result<()> {
        let json_line = entry.to_ndjson_line()?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| {
                PromptError::Io(format!(
                    "failed to create history directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                PromptError::Io(format!(
                    "failed to open history file '{}': {}",
                    self.path.display(),
                    e
                ))
            })?;

        writeln!(file, "{}", json_line).map_err(|e| {
            PromptError::Io(format!(
                "failed to write history to '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        debug!(action = %entry.action, style = %entry.style, "recorded history entry");
        Ok(())
    }

    /// Every readable entry, oldest first. A missing file is an empty log.
    pub fn entries(&self) -> Result<Vec<HistoryEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            PromptError::Io(format!(
                "failed to read history file '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        let entries = content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(idx, line)| match serde_json::from_str(line) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(
                        path = %self.path.display(),
                        line = idx + 1,
                        "skipping malformed history entry: {}",
                        e
                    );
                    None
                }
            })
            .collect();

        Ok(entries)
    }

    /// The `limit` most recent entries, oldest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<HistoryEntry>> {
        let mut entries = self.entries()?;
        let skip = entries.len().saturating_sub(limit);
        entries.drain(..skip);
        Ok(entries)
    }

    /// Remove the log. Clearing a missing log is a no-op.
    pub fn clear(&self) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        fs::remove_file(&self.path).map_err(|e| {
            PromptError::Io(format!(
                "failed to clear history file '{}': {}",
                self.path.display(),
                e
            ))
        })
    }

    /// Total prompts generated and the most used styles.
    ///
    /// Ties between styles keep the order in which they first appeared.
    pub fn summarize(&self) -> Result<HistorySummary> {
        let entries = self.entries()?;

        let mut per_style: IndexMap<String, usize> = IndexMap::new();
        for entry in &entries {
            *per_style.entry(entry.style.clone()).or_default() += entry.count;
        }

        let mut top_styles: Vec<(String, usize)> = per_style.into_iter().collect();
        // Stable sort keeps first-seen order for ties
        top_styles.sort_by(|a, b| b.1.cmp(&a.1));
        top_styles.truncate(TOP_STYLES);

        Ok(HistorySummary {
            total_generations: entries.iter().map(|e| e.count).sum(),
            top_styles,
        })
    }
}
