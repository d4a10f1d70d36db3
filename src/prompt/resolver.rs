//! Variable resolution for style formulas.
//!
//! Fills every declared variable the caller did not override, using the
//! style's variable specification. Whether candidate values are picked
//! deterministically or at random is a per-call [`Selection`], so nothing on
//! a shared generator is mutated to get variety.

use super::types::GenerationConfig;
use crate::style::{StyleTemplate, VariableSpec};
use indexmap::IndexMap;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

/// Subject used when neither the caller nor the style provides one.
pub const FALLBACK_SUBJECT: &str = "a character";

/// How candidate values are chosen for unset variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Always take the first candidate.
    #[default]
    First,
    /// Take a uniformly random candidate.
    Random,
}

impl Selection {
    pub fn from_randomize(randomize: bool) -> Self {
        if randomize {
            Selection::Random
        } else {
            Selection::First
        }
    }
}

/// Build the complete variable map for one generation.
///
/// Order of the result: caller overrides, then declared variables that were
/// filled from the style, then `subject`.
///
/// - Caller overrides always win; an empty override counts as unset.
/// - [`VariableSpec::Names`] entries default to the style's first example,
///   or an empty string when there are no examples.
/// - [`VariableSpec::Candidates`] entries take the first or a random
///   candidate; names with no candidates are left unset.
/// - `subject` comes from the config verbatim when non-blank, else from an
///   override, else the first example, else [`FALLBACK_SUBJECT`].
pub fn resolve_variables<R: Rng + ?Sized>(
    style: &StyleTemplate<'_>,
    config: &GenerationConfig,
    selection: Selection,
    rng: &mut R,
) -> IndexMap<String, String> {
    let mut resolved: IndexMap<String, String> = config
        .overrides
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();

    match style.variables {
        VariableSpec::Names(names) => {
            let default = style.examples.first().cloned().unwrap_or_default();
            for name in names {
                if !resolved.contains_key(name) {
                    resolved.insert(name.clone(), default.clone());
                }
            }
        }
        VariableSpec::Candidates(candidates) => {
            for (name, values) in candidates {
                if resolved.contains_key(name) {
                    continue;
                }
                let picked = match selection {
                    Selection::First => values.first(),
                    Selection::Random => values.choose(rng),
                };
                match picked {
                    Some(value) => {
                        debug!(style = style.key, variable = %name, value = %value, "picked variable");
                        resolved.insert(name.clone(), value.clone());
                    }
                    None => debug!(style = style.key, variable = %name, "no candidates; leaving unset"),
                }
            }
        }
    }

    if !config.subject.trim().is_empty() {
        resolved.insert("subject".to_string(), config.subject.clone());
    } else if !resolved.contains_key("subject") {
        let subject = style
            .examples
            .first()
            .cloned()
            .unwrap_or_else(|| FALLBACK_SUBJECT.to_string());
        resolved.insert("subject".to_string(), subject);
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleDefinition;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn style_with(variables: VariableSpec, examples: &[&str]) -> StyleDefinition {
        StyleDefinition {
            key: "test".to_string(),
            formula: Some("{{subject}}".to_string()),
            variables: Some(variables),
            examples: examples.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn candidates(pairs: Vec<(&str, Vec<&str>)>) -> VariableSpec {
        VariableSpec::Candidates(
            pairs
                .into_iter()
                .map(|(k, vs)| (k.to_string(), vs.into_iter().map(String::from).collect()))
                .collect(),
        )
    }

    #[test]
    fn test_first_selection_is_deterministic() {
        let style = style_with(candidates(vec![("mood", vec!["bright", "dark"])]), &[]);
        let template = style.template().unwrap();
        let config = GenerationConfig::new("test", "a fox");
        let mut rng = StdRng::seed_from_u64(7);

        let resolved = resolve_variables(&template, &config, Selection::First, &mut rng);
        assert_eq!(resolved["mood"], "bright");
        assert_eq!(resolved["subject"], "a fox");
    }

    #[test]
    fn test_random_selection_stays_within_candidates() {
        let style = style_with(candidates(vec![("mood", vec!["bright", "dark", "calm"])]), &[]);
        let template = style.template().unwrap();
        let config = GenerationConfig::new("test", "a fox");
        let mut rng = StdRng::seed_from_u64(42);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..64 {
            let resolved = resolve_variables(&template, &config, Selection::Random, &mut rng);
            seen.insert(resolved["mood"].clone());
        }
        assert!(seen.len() > 1, "random selection never varied: {:?}", seen);
        assert!(seen.iter().all(|m| ["bright", "dark", "calm"].contains(&m.as_str())));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let style = style_with(
            candidates(vec![("mood", vec!["bright"]), ("setting", vec!["forest"])]),
            &[],
        );
        let template = style.template().unwrap();
        let config = GenerationConfig::new("test", "a fox")
            .with_override("mood", "gloomy")
            .with_override("setting", "desert");
        let mut rng = StdRng::seed_from_u64(1);

        for selection in [Selection::First, Selection::Random] {
            let resolved = resolve_variables(&template, &config, selection, &mut rng);
            assert_eq!(resolved["mood"], "gloomy");
            assert_eq!(resolved["setting"], "desert");
        }
    }

    #[test]
    fn test_empty_override_counts_as_unset() {
        let style = style_with(candidates(vec![("mood", vec!["bright"])]), &[]);
        let template = style.template().unwrap();
        let config = GenerationConfig::new("test", "a fox").with_override("mood", "");
        let mut rng = StdRng::seed_from_u64(1);

        let resolved = resolve_variables(&template, &config, Selection::First, &mut rng);
        assert_eq!(resolved["mood"], "bright");
    }

    #[test]
    fn test_empty_candidate_list_is_skipped() {
        let style = style_with(candidates(vec![("mood", vec![]), ("light", vec!["soft"])]), &[]);
        let template = style.template().unwrap();
        let config = GenerationConfig::new("test", "a fox");
        let mut rng = StdRng::seed_from_u64(1);

        let resolved = resolve_variables(&template, &config, Selection::Random, &mut rng);
        assert!(!resolved.contains_key("mood"));
        assert_eq!(resolved["light"], "soft");
    }

    #[test]
    fn test_names_default_to_first_example() {
        let style = style_with(
            VariableSpec::Names(vec!["action".to_string()]),
            &["leaping", "running"],
        );
        let template = style.template().unwrap();
        let config = GenerationConfig::new("test", "a hero");
        let mut rng = StdRng::seed_from_u64(1);

        let resolved = resolve_variables(&template, &config, Selection::Random, &mut rng);
        assert_eq!(resolved["action"], "leaping");
    }

    #[test]
    fn test_names_without_examples_default_to_empty() {
        let style = style_with(VariableSpec::Names(vec!["action".to_string()]), &[]);
        let template = style.template().unwrap();
        let config = GenerationConfig::new("test", "a hero");
        let mut rng = StdRng::seed_from_u64(1);

        let resolved = resolve_variables(&template, &config, Selection::First, &mut rng);
        assert_eq!(resolved["action"], "");
    }

    #[test]
    fn test_subject_fallbacks() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = GenerationConfig::new("test", "");

        let with_examples = style_with(VariableSpec::Names(vec![]), &["a knight"]);
        let resolved = resolve_variables(
            &with_examples.template().unwrap(),
            &config,
            Selection::First,
            &mut rng,
        );
        assert_eq!(resolved["subject"], "a knight");

        let bare = style_with(VariableSpec::Names(vec![]), &[]);
        let resolved =
            resolve_variables(&bare.template().unwrap(), &config, Selection::First, &mut rng);
        assert_eq!(resolved["subject"], FALLBACK_SUBJECT);

        let overridden = config.clone().with_override("subject", "a bard");
        let resolved = resolve_variables(
            &bare.template().unwrap(),
            &overridden,
            Selection::First,
            &mut rng,
        );
        assert_eq!(resolved["subject"], "a bard");
    }

    #[test]
    fn test_subject_is_verbatim() {
        let style = style_with(VariableSpec::Names(vec!["subject".to_string()]), &["ex"]);
        let config = GenerationConfig::new("test", "  a fox ");
        let mut rng = StdRng::seed_from_u64(1);

        let resolved =
            resolve_variables(&style.template().unwrap(), &config, Selection::First, &mut rng);
        assert_eq!(resolved["subject"], "  a fox ");
    }

    #[test]
    fn test_result_order() {
        let style = style_with(candidates(vec![("b", vec!["2"]), ("a", vec!["1"])]), &[]);
        let config = GenerationConfig::new("test", "x").with_override("z", "26");
        let mut rng = StdRng::seed_from_u64(1);

        let resolved =
            resolve_variables(&style.template().unwrap(), &config, Selection::First, &mut rng);
        assert_eq!(resolved.keys().collect::<Vec<_>>(), vec!["z", "b", "a", "subject"]);
    }
}
