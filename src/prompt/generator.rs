//! Prompt generation from catalog styles.
//!
//! [`PromptGenerator`] ties the pieces together for one request:
//! validate the config, look up the style, resolve variables, render the
//! formula, append quality modifiers, and compute metadata.

use super::resolver::{Selection, resolve_variables};
use super::template::{append_quality, render};
use super::types::{GenerationConfig, GenerationResult};
use crate::enhance::SubjectExpander;
use crate::error::Result;
use crate::style::{CatalogStats, StyleCatalog};
use rand::Rng;
use tracing::{debug, warn};

/// Behavior switches for a [`PromptGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Append the style's first three quality modifiers.
    pub include_quality: bool,
    /// Copy the style's negative prompt into results.
    pub include_negative_prompt: bool,
    /// Pick random candidates in [`PromptGenerator::generate`].
    pub randomize_variables: bool,
    /// Run subjects through the [`SubjectExpander`] before rendering.
    pub expand_subjects: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            include_quality: true,
            include_negative_prompt: true,
            randomize_variables: false,
            expand_subjects: false,
        }
    }
}

/// Generates prompts from an injected style catalog.
///
/// The generator holds no mutable state. Randomization for a call is chosen
/// by the caller, so one instance can serve any mix of deterministic and
/// randomized requests.
#[derive(Debug, Clone)]
pub struct PromptGenerator {
    catalog: StyleCatalog,
    options: GeneratorOptions,
    expander: SubjectExpander,
}

impl PromptGenerator {
    pub fn new(catalog: StyleCatalog, options: GeneratorOptions) -> Self {
        Self {
            catalog,
            options,
            expander: SubjectExpander::default(),
        }
    }

    /// Replace the subject expander used when `expand_subjects` is on.
    pub fn with_expander(mut self, expander: SubjectExpander) -> Self {
        self.expander = expander;
        self
    }

    pub fn catalog(&self) -> &StyleCatalog {
        &self.catalog
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    pub fn stats(&self) -> CatalogStats {
        self.catalog.stats()
    }

    /// Generate one prompt using the configured randomization mode.
    pub fn generate(&self, config: &GenerationConfig) -> Result<GenerationResult> {
        let selection = Selection::from_randomize(self.options.randomize_variables);
        self.generate_with(config, selection, &mut rand::rng())
    }

    /// Generate one prompt with an explicit selection mode and RNG.
    ///
    /// # Errors
    ///
    /// * `PromptError::Validation` - `style` or `subject` is blank; raised before any lookup
    /// * `PromptError::StyleNotFound` - unknown style key; lists the valid keys
    /// * `PromptError::MalformedStyle` - the style lacks `formula` or `variables`
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        config: &GenerationConfig,
        selection: Selection,
        rng: &mut R,
    ) -> Result<GenerationResult> {
        config.validate()?;

        let style = self.catalog.get(&config.style)?;
        let template = style.template()?;
        debug!(style = template.key, ?selection, "generating prompt");

        let variables = if self.options.expand_subjects {
            let mut expanded = config.clone();
            expanded.subject = self.expander.expand(&config.subject);
            resolve_variables(&template, &expanded, selection, rng)
        } else {
            resolve_variables(&template, config, selection, rng)
        };

        let mut text = render(template.formula, &variables);
        if self.options.include_quality {
            text = append_quality(&text, template.quality_modifiers);
        }

        let negative_prompt = if self.options.include_negative_prompt {
            template.negative_prompt.map(str::to_string)
        } else {
            None
        };

        Ok(GenerationResult::new(
            text,
            template.key.to_string(),
            variables,
            negative_prompt,
        ))
    }

    /// Check that `config` names a usable style and carries a subject.
    ///
    /// Fails with the same errors [`Self::generate_with`] raises before it
    /// resolves any variable.
    pub fn check(&self, config: &GenerationConfig) -> Result<()> {
        config.validate()?;
        self.catalog.get(&config.style)?.template()?;
        Ok(())
    }

    /// Generate up to `count` randomized variations of one style.
    ///
    /// `style` replaces `config.style`. A request that fails [`Self::check`]
    /// yields an empty batch without drawing. Otherwise a failed draw is
    /// logged and skipped, so the batch returns however many variations
    /// succeeded. Successful results are numbered 1..=k with no gaps.
    pub fn generate_variations(
        &self,
        style: &str,
        config: &GenerationConfig,
        count: usize,
    ) -> Vec<GenerationResult> {
        self.generate_variations_with(style, config, count, &mut rand::rng())
    }

    /// [`Self::generate_variations`] with an explicit RNG.
    pub fn generate_variations_with<R: Rng + ?Sized>(
        &self,
        style: &str,
        config: &GenerationConfig,
        count: usize,
        rng: &mut R,
    ) -> Vec<GenerationResult> {
        let mut request = config.clone();
        request.style = style.to_string();

        // A request that can never succeed would fail every draw
        if let Err(e) = self.check(&request) {
            warn!(count, error = %e, "cannot generate variations; skipping batch");
            return Vec::new();
        }

        let mut variations = Vec::new();
        for attempt in 1..=count {
            match self.generate_with(&request, Selection::Random, rng) {
                Ok(mut result) => {
                    result.variation_number = Some(variations.len() as u32 + 1);
                    variations.push(result);
                }
                Err(e) => {
                    warn!(attempt, error = %e, "failed to generate variation; skipping");
                }
            }
        }

        variations
    }
}
