//! Mood-driven prompt enhancement.
//!
//! Builds a prompt from fixed phrase tables rather than a catalog formula:
//! expanded subject, style prefix, mood modifier, style suffix, and the
//! first four shared quality modifiers, joined by `", "`.

use super::expander::SubjectExpander;
use super::tables::{Mood, QUALITY_MODIFIERS, style_frame};
use crate::error::{PromptError, Result};
use serde::Serialize;
use tracing::debug;

/// Metadata recorded for an enhanced prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedMetadata {
    pub word_count: usize,
    pub character_count: usize,
    pub original_subject: String,
    pub expanded_subject: String,
    pub mood: Mood,
}

/// One enhanced prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedResult {
    pub text: String,
    pub negatives: String,
    /// The requested style key, even when it fell back to the default frame.
    pub style: String,
    pub metadata: EnhancedMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation_number: Option<u32>,
}

/// Generates enhanced prompts.
#[derive(Debug, Clone, Default)]
pub struct EnhancedGenerator {
    expander: SubjectExpander,
}

impl EnhancedGenerator {
    pub fn new(expander: SubjectExpander) -> Self {
        Self { expander }
    }

    /// Build one enhanced prompt.
    ///
    /// Unknown styles use the anime frame; a missing mood means dramatic.
    pub fn enhance(&self, style: &str, subject: &str, mood: Option<Mood>) -> Result<EnhancedResult> {
        if subject.trim().is_empty() {
            return Err(PromptError::Validation("Subject is required".to_string()));
        }

        let frame = style_frame(style);
        let mood = mood.unwrap_or_default();
        let expanded = self.expander.expand(subject);
        let quality = QUALITY_MODIFIERS[..4].join(", ");

        let text = [
            expanded.as_str(),
            frame.prefix,
            mood.modifier(),
            frame.suffix,
            quality.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ");

        debug!(style, frame = frame.key, %mood, "enhanced prompt");

        Ok(EnhancedResult {
            metadata: EnhancedMetadata {
                word_count: text.split_whitespace().count(),
                character_count: text.chars().count(),
                original_subject: subject.to_string(),
                expanded_subject: expanded,
                mood,
            },
            text,
            negatives: frame.negatives.to_string(),
            style: style.to_string(),
            variation_number: None,
        })
    }

    /// Build `count` enhanced prompts, cycling through [`Mood::ALL`].
    pub fn batch(&self, style: &str, subject: &str, count: usize) -> Result<Vec<EnhancedResult>> {
        (0..count)
            .map(|i| {
                let mood = Mood::ALL[i % Mood::ALL.len()];
                let mut result = self.enhance(style, subject, Some(mood))?;
                result.variation_number = Some(i as u32 + 1);
                Ok(result)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enhance_structure() {
        let generator = EnhancedGenerator::default();
        let result = generator
            .enhance("comic", "cat", Some(Mood::Peaceful))
            .unwrap();

        let frame = style_frame("comic");
        assert!(result.text.starts_with(
            "adorable cat with expressive eyes and detailed fur texture, comic book style illustration"
        ));
        assert!(result.text.contains(Mood::Peaceful.modifier()));
        assert!(result.text.contains(frame.suffix));
        assert!(
            result
                .text
                .ends_with("masterpiece, best quality, ultra detailed, sharp focus")
        );
        assert_eq!(result.negatives, frame.negatives);
        assert_eq!(result.metadata.original_subject, "cat");
        assert_eq!(result.metadata.mood, Mood::Peaceful);
        assert_eq!(
            result.metadata.word_count,
            result.text.split_whitespace().count()
        );
    }

    #[test]
    fn test_enhance_defaults() {
        let generator = EnhancedGenerator::default();
        let result = generator
            .enhance("watercolor", "a lantern by the sea", None)
            .unwrap();

        assert_eq!(result.style, "watercolor");
        assert_eq!(result.metadata.mood, Mood::Dramatic);
        assert!(result.text.contains(style_frame("anime").prefix));
        assert!(result.text.starts_with("a lantern by the sea, "));
    }

    #[test]
    fn test_enhance_requires_subject() {
        let err = EnhancedGenerator::default()
            .enhance("anime", " ", None)
            .unwrap_err();
        assert!(matches!(err, PromptError::Validation(_)));
    }

    #[test]
    fn test_batch_cycles_moods() {
        let results = EnhancedGenerator::default()
            .batch("anime", "knight", 7)
            .unwrap();

        assert_eq!(results.len(), 7);
        let moods: Vec<Mood> = results.iter().map(|r| r.metadata.mood).collect();
        assert_eq!(
            moods,
            vec![
                Mood::Dramatic,
                Mood::Peaceful,
                Mood::Epic,
                Mood::Mysterious,
                Mood::Vibrant,
                Mood::Dramatic,
                Mood::Peaceful,
            ]
        );
        let numbers: Vec<u32> = results.iter().filter_map(|r| r.variation_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_mood_parsing() {
        assert_eq!(Mood::from_str("Epic"), Some(Mood::Epic));
        assert_eq!(Mood::from_str(" vibrant "), Some(Mood::Vibrant));
        assert_eq!(Mood::from_str("sleepy"), None);
        assert_eq!(Mood::Mysterious.to_string(), "mysterious");
    }
}
