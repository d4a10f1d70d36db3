//! Implementation of the `perchance enhance` command.

use crate::cli::EnhanceArgs;
use crate::context::AppContext;
use crate::enhance::{EnhancedGenerator, Mood};
use crate::error::{PromptError, Result};
use crate::export::{OutputFormat, render_enhanced};
use crate::history::{HistoryAction, HistoryEntry};
use tracing::warn;

/// Execute `perchance enhance`.
pub fn cmd_enhance(ctx: &AppContext, args: EnhanceArgs) -> Result<()> {
    print!("{}", run(ctx, &args)?);
    Ok(())
}

pub(super) fn run(ctx: &AppContext, args: &EnhanceArgs) -> Result<String> {
    let format = OutputFormat::parse(&args.format)?;
    let style = args
        .style
        .clone()
        .unwrap_or_else(|| ctx.config.default_style.clone());

    let mood = args
        .mood
        .as_deref()
        .map(|name| {
            Mood::from_str(name).ok_or_else(|| {
                let known: Vec<&str> = Mood::ALL.iter().map(|m| m.as_str()).collect();
                PromptError::Validation(format!(
                    "unknown mood '{}' (expected one of: {})",
                    name,
                    known.join(", ")
                ))
            })
        })
        .transpose()?;

    let generator = EnhancedGenerator::default();
    let results = match (args.count, mood) {
        (Some(count), Some(mood)) if count > 1 => {
            return Err(PromptError::Validation(format!(
                "--mood {} cannot be combined with --count {}; batches cycle through every mood",
                mood.as_str(),
                count
            )));
        }
        (Some(count), None) if count > 1 => generator.batch(&style, &args.subject, count)?,
        (_, mood) => vec![generator.enhance(&style, &args.subject, mood)?],
    };

    let output = render_enhanced(&results, format)?;

    let first_text = results.first().map(|r| r.text.as_str()).unwrap_or("");
    let entry = HistoryEntry::new(
        HistoryAction::Enhance,
        &style,
        &args.subject,
        results.len(),
        first_text,
    );
    if let Err(e) = ctx.history().append(&entry) {
        warn!(error = %e, "failed to record history");
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use tempfile::TempDir;

    fn enhance_args(
        style: Option<&str>,
        subject: &str,
        mood: Option<&str>,
        count: Option<usize>,
    ) -> EnhanceArgs {
        EnhanceArgs {
            style: style.map(str::to_string),
            subject: subject.to_string(),
            mood: mood.map(str::to_string),
            count,
            format: "text".to_string(),
        }
    }

    fn test_ctx(temp_dir: &TempDir) -> AppContext {
        AppContext::with_config(temp_dir.path().to_path_buf(), Config::default())
    }

    #[test]
    fn test_enhance_single_with_mood() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = test_ctx(&temp_dir);

        let out = run(&ctx, &enhance_args(Some("comic"), "cat", Some("Epic"), None)).unwrap();

        assert!(out.starts_with("adorable cat with expressive eyes"));
        assert!(out.contains(Mood::Epic.modifier()));
        assert!(out.contains("\nNegative prompt: "));

        let entries = ctx.history().entries().unwrap();
        assert_eq!(entries[0].action, HistoryAction::Enhance);
        assert_eq!(entries[0].style, "comic");
    }

    #[test]
    fn test_enhance_batch_numbered() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = test_ctx(&temp_dir);

        let out = run(&ctx, &enhance_args(Some("anime"), "knight", None, Some(3))).unwrap();

        assert!(out.starts_with("[1] "));
        assert!(out.contains("\n[3] "));
        assert_eq!(ctx.history().entries().unwrap()[0].count, 3);
    }

    #[test]
    fn test_enhance_defaults_style_from_config() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = test_ctx(&temp_dir);

        run(&ctx, &enhance_args(None, "robot", None, None)).unwrap();
        assert_eq!(ctx.history().entries().unwrap()[0].style, "photorealistic");
    }

    #[test]
    fn test_enhance_rejects_unknown_mood() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = test_ctx(&temp_dir);

        let err = run(&ctx, &enhance_args(None, "cat", Some("sleepy"), None)).unwrap_err();
        assert!(matches!(err, PromptError::Validation(ref msg) if msg.contains("sleepy")));
        assert!(ctx.history().entries().unwrap().is_empty());
    }

    #[test]
    fn test_enhance_rejects_mood_with_batch() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = test_ctx(&temp_dir);

        let err = run(&ctx, &enhance_args(None, "cat", Some("epic"), Some(3))).unwrap_err();
        assert!(matches!(err, PromptError::Validation(ref msg) if msg.contains("--mood epic")));
        assert!(ctx.history().entries().unwrap().is_empty());

        // A single prompt still honors the mood
        let out = run(&ctx, &enhance_args(None, "cat", Some("epic"), Some(1))).unwrap();
        assert!(out.contains(Mood::Epic.modifier()));
    }
}
