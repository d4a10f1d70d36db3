//! Style catalog for prompt generation.
//!
//! A style pairs a formula (a template with `{{name}}` or `[name]`
//! placeholders) with the variables that fill it, plus quality modifiers and
//! an optional negative prompt. The catalog is read-only once loaded.

mod catalog;
mod types;


pub use catalog::{CatalogStats, StyleCatalog};
pub use types::{StyleDefinition, StyleSummary, StyleTemplate, VariableSpec};
