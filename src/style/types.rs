//! Style definitions and the variable specification variants.

use crate::error::{PromptError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The declared variable slots of a style.
///
/// Style data uses two shapes: a flat list of names whose defaults come from
/// the style's examples, or a name to candidate-values mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableSpec {
    /// Variable names only; the default is the style's first example.
    Names(Vec<String>),
    /// Ordered candidate values per variable name.
    Candidates(IndexMap<String, Vec<String>>),
}

impl VariableSpec {
    /// Declared variable names in declaration order.
    pub fn names(&self) -> Vec<&str> {
        match self {
            VariableSpec::Names(names) => names.iter().map(String::as_str).collect(),
            VariableSpec::Candidates(map) => map.keys().map(String::as_str).collect(),
        }
    }

    /// Number of declared variables.
    pub fn len(&self) -> usize {
        match self {
            VariableSpec::Names(names) => names.len(),
            VariableSpec::Candidates(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A style entry as stored in the catalog.
///
/// `formula` and `variables` are optional at load time so that a single bad
/// entry does not prevent the rest of the catalog from loading. Use
/// [`StyleDefinition::template`] to get a validated view before rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleDefinition {
    pub key: String,
    pub name: String,
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<VariableSpec>,

    pub examples: Vec<String>,
    pub quality_modifiers: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub best_for: Vec<String>,
}

/// A borrowed, validated view of a style that is safe to render.
#[derive(Debug, Clone, Copy)]
pub struct StyleTemplate<'a> {
    pub key: &'a str,
    pub formula: &'a str,
    pub variables: &'a VariableSpec,
    pub examples: &'a [String],
    pub quality_modifiers: &'a [String],
    pub negative_prompt: Option<&'a str>,
}

impl StyleDefinition {
    /// Validate that this style can be rendered.
    ///
    /// # Returns
    ///
    /// * `Ok(StyleTemplate)` - The formula and variables are present
    /// * `Err(PromptError::MalformedStyle)` - Either is missing (an empty formula counts as missing)
    pub fn template(&self) -> Result<StyleTemplate<'_>> {
        let mut missing = Vec::new();

        let formula = self.formula.as_deref().filter(|f| !f.trim().is_empty());
        if formula.is_none() {
            missing.push("formula");
        }
        if self.variables.is_none() {
            missing.push("variables");
        }

        match (formula, self.variables.as_ref()) {
            (Some(formula), Some(variables)) => Ok(StyleTemplate {
                key: &self.key,
                formula,
                variables,
                examples: &self.examples,
                quality_modifiers: &self.quality_modifiers,
                negative_prompt: self.negative_prompt.as_deref().filter(|n| !n.is_empty()),
            }),
            _ => Err(PromptError::MalformedStyle {
                key: self.key.clone(),
                reason: format!("missing required properties: {}", missing.join(", ")),
            }),
        }
    }

    /// Number of declared variables (zero when `variables` is absent).
    pub fn variable_count(&self) -> usize {
        self.variables.as_ref().map_or(0, VariableSpec::len)
    }

    pub fn has_examples(&self) -> bool {
        !self.examples.is_empty()
    }

    /// Build the listing summary for this style.
    pub fn summary(&self) -> StyleSummary {
        StyleSummary {
            key: self.key.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            variable_count: self.variable_count(),
            has_examples: self.has_examples(),
        }
    }
}

/// Summary information used when listing styles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSummary {
    pub key: String,
    pub name: String,
    pub description: String,
    pub variable_count: usize,
    pub has_examples: bool,
}
