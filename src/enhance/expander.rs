//! Subject expansion for short or generic subjects.
//!
//! Lookup order for a subject:
//!
//! 1. Exact match on the trimmed, lowercased subject
//! 2. First table key (in table order) that the subject contains, or that
//!    contains the subject; the key inside the expansion is replaced by the
//!    caller's subject
//! 3. Subjects of three characters or fewer get a generic detail wrapper
//! 4. Anything else is returned unchanged
//!
//! Step 2 depends on table order, which [`ExpansionTable`] keeps stable.

use super::tables::SUBJECT_EXPANSIONS;
use indexmap::IndexMap;

/// Ordered subject → expansion table.
///
/// Starts from the canonical set; overlays add or replace entries without
/// moving existing keys, so substring tie-breaking stays deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionTable {
    entries: IndexMap<String, String>,
}

impl ExpansionTable {
    /// The canonical table.
    pub fn canonical() -> Self {
        Self {
            entries: SUBJECT_EXPANSIONS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Layer entries over this table.
    ///
    /// Existing keys keep their position and take the new expansion; new
    /// keys are appended. Keys are normalized to trimmed lowercase.
    pub fn with_overlay<I, K, V>(mut self, overlay: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, expansion) in overlay {
            let key = key.as_ref().trim().to_lowercase();
            if !key.is_empty() {
                self.entries.insert(key, expansion.into());
            }
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ExpansionTable {
    fn default() -> Self {
        Self::canonical()
    }
}

/// Replaces short or generic subjects with richer descriptions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectExpander {
    table: ExpansionTable,
}

impl SubjectExpander {
    pub fn new(table: ExpansionTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ExpansionTable {
        &self.table
    }

    /// Expand a subject; see the module docs for the lookup order.
    pub fn expand(&self, subject: &str) -> String {
        let trimmed = subject.trim();
        let normalized = trimmed.to_lowercase();
        if normalized.is_empty() {
            return subject.to_string();
        }

        if let Some(expansion) = self.table.get(&normalized) {
            return expansion.to_string();
        }

        for (key, expansion) in self.table.iter() {
            if normalized.contains(key) || key.contains(normalized.as_str()) {
                return expansion.replacen(key, trimmed, 1);
            }
        }

        if trimmed.chars().count() <= 3 {
            return format!("detailed {} with intricate features", trimmed);
        }

        subject.to_string()
    }
}
