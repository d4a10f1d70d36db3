//! Run context for perchance commands.
//!
//! Resolves the config for the working directory and the paths derived from
//! it, so every command reads styles, templates and history from the same
//! places. Relative paths in the config are taken relative to the directory
//! the context was resolved from.

use crate::config::Config;
use crate::error::{PromptError, Result};
use crate::history::HistoryLog;
use crate::prompt::PromptGenerator;
use crate::store::TemplateStore;
use crate::style::StyleCatalog;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolved configuration and paths for one run.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Directory relative config paths are resolved against.
    pub base_dir: PathBuf,

    /// The effective configuration.
    pub config: Config,

    /// Absolute path to the style data file, when not using the built-in set.
    pub styles_path: Option<PathBuf>,

    /// Absolute path to the saved templates directory.
    pub templates_dir: PathBuf,

    /// Absolute path to the history log.
    pub history_file: PathBuf,
}

impl AppContext {
    /// Resolve the context from the current working directory.
    pub fn resolve(config_path: Option<&Path>) -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            PromptError::Io(format!("failed to get current working directory: {}", e))
        })?;

        Self::resolve_from(&cwd, config_path)
    }

    /// Resolve the context from a specific directory.
    pub fn resolve_from<P: AsRef<Path>>(base_dir: P, config_path: Option<&Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = config_path.map(|p| base_dir.join(p));
        let config = Config::resolve(config_path.as_deref(), &base_dir)?;

        Ok(Self::with_config(base_dir, config))
    }

    /// Build a context from an already loaded config.
    pub fn with_config(base_dir: PathBuf, config: Config) -> Self {
        let styles_path = config.styles_path.as_ref().map(|p| base_dir.join(p));
        let templates_dir = base_dir.join(&config.templates_dir);
        let history_file = base_dir.join(&config.history_file);

        Self {
            base_dir,
            config,
            styles_path,
            templates_dir,
            history_file,
        }
    }

    /// Load the style catalog: the configured file, or the built-in set.
    pub fn catalog(&self) -> Result<StyleCatalog> {
        match &self.styles_path {
            Some(path) => {
                debug!(path = %path.display(), "loading style catalog");
                StyleCatalog::load(path)
            }
            None => StyleCatalog::builtin(),
        }
    }

    /// A generator over the catalog, configured from the config file.
    pub fn generator(&self) -> Result<PromptGenerator> {
        Ok(PromptGenerator::new(
            self.catalog()?,
            self.config.generator_options(),
        ))
    }

    pub fn template_store(&self) -> TemplateStore {
        TemplateStore::new(&self.templates_dir)
    }

    pub fn history(&self) -> HistoryLog {
        HistoryLog::new(&self.history_file)
    }
}
