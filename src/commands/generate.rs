//! Implementation of the `perchance generate` and `perchance batch` commands.

use crate::cli::{GenerateArgs, parse_set};
use crate::context::AppContext;
use crate::error::Result;
use crate::export::{OutputFormat, render_prompts};
use crate::history::{HistoryAction, HistoryEntry};
use crate::prompt::{GenerationConfig, GenerationResult, PromptGenerator};
use tracing::warn;

/// Execute `perchance generate`.
pub fn cmd_generate(ctx: &AppContext, args: GenerateArgs) -> Result<()> {
    print!("{}", run(ctx, &args, HistoryAction::Generate)?);
    Ok(())
}

/// Execute `perchance batch`.
pub fn cmd_batch(ctx: &AppContext, args: GenerateArgs) -> Result<()> {
    print!("{}", run(ctx, &args, HistoryAction::Batch)?);
    Ok(())
}

/// Generate, record history and return the rendered output.
pub(super) fn run(ctx: &AppContext, args: &GenerateArgs, action: HistoryAction) -> Result<String> {
    let format = OutputFormat::parse(&args.format)?;
    let config = build_request(ctx, args)?;
    let results = generate(ctx, args, &config, action)?;

    let output = render_prompts(&results, format)?;

    let first_text = results.first().map(|r| r.text.as_str()).unwrap_or("");
    let entry = HistoryEntry::new(action, &config.style, &config.subject, results.len(), first_text);
    if let Err(e) = ctx.history().append(&entry) {
        warn!(error = %e, "failed to record history");
    }

    Ok(output)
}

/// Layer the saved template (if any), the configured default style and the
/// command-line options into one request.
fn build_request(ctx: &AppContext, args: &GenerateArgs) -> Result<GenerationConfig> {
    let mut config = match &args.template {
        Some(name) => ctx.template_store().load(name)?.config,
        None => GenerationConfig::new(&ctx.config.default_style, ""),
    };

    if let Some(style) = &args.style {
        config.style = style.clone();
    }
    if let Some(subject) = &args.subject {
        config.subject = subject.clone();
    }
    for arg in &args.set {
        let (name, value) = parse_set(arg)?;
        config.overrides.insert(name, value);
    }

    Ok(config)
}

fn generate(
    ctx: &AppContext,
    args: &GenerateArgs,
    config: &GenerationConfig,
    action: HistoryAction,
) -> Result<Vec<GenerationResult>> {
    let mut options = ctx.config.generator_options();
    if args.random {
        options.randomize_variables = true;
    }
    if args.expand {
        options.expand_subjects = true;
    }
    if args.no_quality {
        options.include_quality = false;
    }
    if args.no_negative {
        options.include_negative_prompt = false;
    }
    let generator = PromptGenerator::new(ctx.catalog()?, options);

    let count = match (args.count, action) {
        (Some(count), _) => count,
        (None, HistoryAction::Batch) => ctx.config.default_count,
        (None, _) => 1,
    };
    if count == 1 && action != HistoryAction::Batch {
        return Ok(vec![generator.generate(config)?]);
    }

    // Surface request errors instead of an empty batch
    generator.check(config)?;

    Ok(generator.generate_variations(&config.style, config, count))
}
