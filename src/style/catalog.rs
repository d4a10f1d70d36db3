//! Style catalog loading and lookup.
//!
//! The catalog accepts the two document shapes found in style data:
//!
//! - A JSON array of style objects, each carrying its own `key`
//! - A legacy JSON object mapping keys to style objects
//!
//! Either way, source order is preserved for listings.

use super::types::{StyleDefinition, StyleSummary};
use crate::error::{PromptError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Style data shipped with the binary.
const BUILTIN_STYLES: &str = include_str!("../../data/styles.json");

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    List(Vec<StyleDefinition>),
    Map(IndexMap<String, StyleDefinition>),
}

/// Read-only collection of styles keyed by style key.
#[derive(Debug, Clone, Default)]
pub struct StyleCatalog {
    styles: IndexMap<String, StyleDefinition>,
}

/// Aggregate counts over the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_styles: usize,
    pub total_variables: usize,
    pub available_styles: Vec<String>,
}

impl StyleCatalog {
    /// Load the catalog embedded in the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_STYLES)
    }

    /// Load a catalog from a JSON file on disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptError::Catalog(format!(
                "failed to read style data '{}': {}",
                path.display(),
                e
            ))
        })?;

        let catalog = Self::from_json(&content)?;
        debug!(path = %path.display(), styles = catalog.len(), "loaded style catalog");
        Ok(catalog)
    }

    /// Parse a catalog from JSON in either the list or the legacy map shape.
    ///
    /// Entries missing `formula` or `variables` are accepted here and rejected
    /// when they are used for generation. A list entry without a key is an
    /// error. Duplicate keys keep the first entry.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(json).map_err(|e| {
            PromptError::Catalog(format!(
                "style data must be a list of styles or a map of key to style: {}",
                e
            ))
        })?;

        let entries: Vec<StyleDefinition> = match document {
            CatalogDocument::List(list) => {
                if let Some(index) = list.iter().position(|s| s.key.trim().is_empty()) {
                    return Err(PromptError::Catalog(format!(
                        "style at index {} has no key",
                        index
                    )));
                }
                list
            }
            CatalogDocument::Map(map) => map
                .into_iter()
                .map(|(key, mut style)| {
                    if style.key.trim().is_empty() {
                        style.key = key;
                    }
                    style
                })
                .collect(),
        };

        let mut styles = IndexMap::with_capacity(entries.len());
        for style in entries {
            if styles.contains_key(&style.key) {
                warn!(key = %style.key, "duplicate style key; keeping the first definition");
                continue;
            }
            styles.insert(style.key.clone(), style);
        }

        Ok(Self { styles })
    }

    /// Build a catalog from already-constructed definitions.
    pub fn from_styles<I>(styles: I) -> Self
    where
        I: IntoIterator<Item = StyleDefinition>,
    {
        let mut map = IndexMap::new();
        for style in styles {
            map.entry(style.key.clone()).or_insert(style);
        }
        Self { styles: map }
    }

    /// Look up a style, or `None` if the key is unknown.
    pub fn find(&self, key: &str) -> Option<&StyleDefinition> {
        self.styles.get(key)
    }

    /// Look up a style by key.
    ///
    /// # Returns
    ///
    /// * `Ok(&StyleDefinition)` - The style exists
    /// * `Err(PromptError::StyleNotFound)` - Carries every valid key for the error message
    pub fn get(&self, key: &str) -> Result<&StyleDefinition> {
        self.find(key).ok_or_else(|| PromptError::StyleNotFound {
            key: key.to_string(),
            available: self.keys(),
        })
    }

    /// All style keys in source order.
    pub fn keys(&self) -> Vec<String> {
        self.styles.keys().cloned().collect()
    }

    /// Summaries of every style in source order.
    pub fn summaries(&self) -> Vec<StyleSummary> {
        self.styles.values().map(StyleDefinition::summary).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyleDefinition> {
        self.styles.values()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            total_styles: self.len(),
            total_variables: self.styles.values().map(StyleDefinition::variable_count).sum(),
            available_styles: self.keys(),
        }
    }
}
