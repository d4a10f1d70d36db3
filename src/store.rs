//! Saved generation templates.
//!
//! A template is a named [`GenerationConfig`] stored as
//! `<templates_dir>/<name>.json`:
//!
//! ```text
//! {
//!   "id": "prompt_k3j9x0a2b_1760601600000",
//!   "name": "fox-portrait",
//!   "config": { "style": "anime", "subject": "a fox", "mood": "dark" },
//!   "createdAt": "2026-10-16T08:00:00Z",
//!   "version": "1.0.0"
//! }
//! ```

use crate::error::{PromptError, Result};
use crate::fs::atomic_write_file;
use crate::prompt::GenerationConfig;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Format version written into new templates.
pub const TEMPLATE_VERSION: &str = "1.0.0";

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A saved template file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedTemplate {
    pub id: String,
    pub name: String,
    pub config: GenerationConfig,
    pub created_at: DateTime<Utc>,
    pub version: String,
}

/// A template found on disk by [`TemplateStore::list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pub name: String,
    pub path: PathBuf,
}

/// Directory-backed template storage.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    dir: PathBuf,
}

impl TemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, name: &str) -> Result<PathBuf> {
        validate_template_name(name)?;
        Ok(self.dir.join(format!("{}.json", name)))
    }

    /// Save `config` under `name`, replacing any existing template.
    pub fn save(&self, name: &str, config: &GenerationConfig) -> Result<SavedTemplate> {
        let path = self.path_for(name)?;

        let template = SavedTemplate {
            id: generate_template_id(&mut rand::rng(), Utc::now()),
            name: name.to_string(),
            config: config.clone(),
            created_at: Utc::now(),
            version: TEMPLATE_VERSION.to_string(),
        };

        let json = serde_json::to_string_pretty(&template).map_err(|e| {
            PromptError::Template(format!("failed to serialize template '{}': {}", name, e))
        })?;
        atomic_write_file(&path, &json)?;

        debug!(name, path = %path.display(), "saved template");
        Ok(template)
    }

    /// Load the template saved under `name`.
    pub fn load(&self, name: &str) -> Result<SavedTemplate> {
        let path = self.path_for(name)?;

        if !path.is_file() {
            return Err(PromptError::Template(format!(
                "template \"{}\" not found in '{}'",
                name,
                self.dir.display()
            )));
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            PromptError::Template(format!("failed to load template \"{}\": {}", name, e))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            PromptError::Template(format!("failed to load template \"{}\": {}", name, e))
        })
    }

    /// All saved templates, sorted by name. A missing directory is empty.
    pub fn list(&self) -> Result<Vec<TemplateEntry>> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.dir).map_err(|e| {
            PromptError::Io(format!(
                "failed to read templates directory '{}': {}",
                self.dir.display(),
                e
            ))
        })?;

        let mut templates: Vec<TemplateEntry> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .filter_map(|path| {
                let name = path.file_stem()?.to_str()?.to_string();
                // Skip leftovers from interrupted writes
                if name.starts_with('.') {
                    return None;
                }
                Some(TemplateEntry { name, path })
            })
            .collect();

        templates.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(templates)
    }
}

/// Reject names that are empty or would escape the templates directory.
pub fn validate_template_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(PromptError::Template(
            "template name must not be empty".to_string(),
        ));
    }

    if name.contains('/') || name.contains('\\') || name.contains("..") {
        return Err(PromptError::Template(format!(
            "template name '{}' is not safe: contains path traversal characters",
            name
        )));
    }

    if name.starts_with('.') {
        return Err(PromptError::Template(format!(
            "template name '{}' is not safe: starts with '.'",
            name
        )));
    }

    Ok(())
}

/// Build an id of the form `prompt_<9 base36 chars>_<unix millis>`.
pub fn generate_template_id<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> String {
    let suffix: String = (0..9)
        .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("prompt_{}_{}", suffix, now.timestamp_millis())
}
