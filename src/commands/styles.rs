//! Implementation of the `perchance styles` and `perchance style` commands.

use crate::cli::{StyleArgs, StylesArgs};
use crate::context::AppContext;
use crate::error::Result;
use crate::export::{OutputFormat, render_styles};
use crate::style::{StyleDefinition, VariableSpec};

/// Execute `perchance styles`.
pub fn cmd_styles(ctx: &AppContext, args: StylesArgs) -> Result<()> {
    let format = OutputFormat::parse(&args.export)?;
    let catalog = ctx.catalog()?;
    print!("{}", render_styles(&catalog.summaries(), format)?);
    Ok(())
}

/// Execute `perchance style`.
pub fn cmd_style(ctx: &AppContext, args: StyleArgs) -> Result<()> {
    let catalog = ctx.catalog()?;
    let style = catalog.get(&args.key)?;
    print!("{}", describe_style(style));
    Ok(())
}

/// Human-readable description of one style.
pub(super) fn describe_style(style: &StyleDefinition) -> String {
    let mut out = String::new();

    out.push_str(&format!("{} [{}]\n", style.name, style.key));
    if !style.description.is_empty() {
        out.push_str(&format!("{}\n", style.description));
    }
    out.push('\n');

    match &style.formula {
        Some(formula) => {
            out.push_str(&format!("Formula:    {}\n", formula));
        }
        None => {
            out.push_str("Formula:    (missing)\n");
        }
    }

    match &style.variables {
        Some(VariableSpec::Names(names)) => {
            out.push_str(&format!("Variables:  {}\n", names.join(", ")));
        }
        Some(VariableSpec::Candidates(candidates)) => {
            out.push_str("Variables:\n");
            for (name, values) in candidates {
                out.push_str(&format!("  {}: {}\n", name, values.join(" | ")));
            }
        }
        None => {
            out.push_str("Variables:  (missing)\n");
        }
    }

    if !style.quality_modifiers.is_empty() {
        out.push_str(&format!(
            "Quality:    {}\n",
            style.quality_modifiers.join(", ")
        ));
    }
    if let Some(negative) = &style.negative_prompt {
        out.push_str(&format!("Negative:   {}\n", negative));
    }
    if !style.best_for.is_empty() {
        out.push_str(&format!("Best for:   {}\n", style.best_for.join(", ")));
    }

    if !style.examples.is_empty() {
        out.push('\n');
        out.push_str("Examples:\n");
        for example in &style.examples {
            out.push_str(&format!("  - {}\n", example));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleCatalog;

    #[test]
    fn test_describe_builtin_style() {
        let catalog = StyleCatalog::builtin().unwrap();
        let out = describe_style(catalog.get("comic").unwrap());

        assert!(out.contains("[comic]"));
        assert!(out.contains(
            "Formula:    {{subject}}, comic book panel, [action], bold ink lines, halftone shading"
        ));
        assert!(out.contains("Variables:  subject, action"));
        assert!(out.contains("  - dynamic leap across rooftops"));
    }

    #[test]
    fn test_describe_candidate_variables() {
        let catalog = StyleCatalog::builtin().unwrap();
        let out = describe_style(catalog.get("anime").unwrap());

        assert!(out.contains("Variables:\n  age: "));
        assert!(out.contains("  mood: "));
    }

    #[test]
    fn test_describe_malformed_style() {
        let style = StyleDefinition {
            key: "broken".to_string(),
            name: "Broken".to_string(),
            ..Default::default()
        };
        let out = describe_style(&style);

        assert!(out.starts_with("Broken [broken]\n\n"));
        assert!(out.contains("Formula:    (missing)"));
        assert!(out.contains("Variables:  (missing)"));
    }
}
