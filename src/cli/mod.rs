//! CLI argument parsing for perchance.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::MAX_COUNT;
use crate::error::{PromptError, Result};
use clap::builder::RangedU64ValueParser;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Perchance: text-to-image prompt generator.
///
/// Builds prompts from a catalog of art styles. Each style has a formula
/// with placeholders that are filled from your subject, explicit
/// `--set name=value` overrides, and the style's own example values.
#[derive(Parser, Debug)]
#[command(name = "perchance")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: perchance.yaml in the current directory, if present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for perchance.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available styles.
    Styles(StylesArgs),

    /// Show one style's formula, variables and examples.
    Style(StyleArgs),

    /// Generate a prompt.
    ///
    /// With `--count` greater than 1, generates randomized variations.
    Generate(GenerateArgs),

    /// Generate randomized variations of one style.
    ///
    /// Same options as `generate`; `--count` defaults to the configured
    /// `default_count`.
    Batch(GenerateArgs),

    /// Generate enhanced prompts with mood and quality phrases.
    ///
    /// With `--count`, cycles through dramatic, peaceful, epic, mysterious
    /// and vibrant.
    Enhance(EnhanceArgs),

    /// Save, show and list generation templates.
    Template(TemplateCommand),

    /// Show recent generations.
    History(HistoryArgs),

    /// Show catalog and usage statistics.
    Stats,
}

/// Arguments for the `styles` command.
#[derive(Parser, Debug)]
pub struct StylesArgs {
    /// Output format (text, json, csv).
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub export: String,
}

/// Arguments for the `style` command.
#[derive(Parser, Debug)]
pub struct StyleArgs {
    /// Style key (e.g., anime).
    pub key: String,
}

/// Arguments for the `generate` and `batch` commands.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Style key (default: the configured default_style).
    #[arg(short, long)]
    pub style: Option<String>,

    /// Main subject of the prompt.
    #[arg(long)]
    pub subject: Option<String>,

    /// Variable override as name=value (repeatable).
    #[arg(long = "set", value_name = "NAME=VALUE", action = ArgAction::Append)]
    pub set: Vec<String>,

    /// Number of prompts to generate (1-10).
    #[arg(short = 'n', long, value_parser = count_parser())]
    pub count: Option<usize>,

    /// Pick random values for unset variables.
    #[arg(long)]
    pub random: bool,

    /// Expand short subjects into richer descriptions.
    #[arg(long)]
    pub expand: bool,

    /// Do not append the style's quality modifiers.
    #[arg(long)]
    pub no_quality: bool,

    /// Do not include the style's negative prompt.
    #[arg(long)]
    pub no_negative: bool,

    /// Start from a saved template; other options override it.
    #[arg(long, value_name = "NAME")]
    pub template: Option<String>,

    /// Output format (text, json, csv).
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub format: String,
}

/// Arguments for the `enhance` command.
#[derive(Parser, Debug)]
pub struct EnhanceArgs {
    /// Style key; unknown styles use the anime frame.
    #[arg(short, long)]
    pub style: Option<String>,

    /// Main subject of the prompt.
    #[arg(long)]
    pub subject: String,

    /// Mood (dramatic, peaceful, epic, mysterious, vibrant); single prompts only.
    #[arg(short, long)]
    pub mood: Option<String>,

    /// Number of prompts (1-10); more than one cycles through all moods.
    #[arg(short = 'n', long, value_parser = count_parser())]
    pub count: Option<usize>,

    /// Output format (text, json, csv).
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub format: String,
}

/// Template subcommands.
#[derive(Parser, Debug)]
pub struct TemplateCommand {
    #[command(subcommand)]
    pub action: TemplateAction,
}

/// Template actions.
#[derive(Subcommand, Debug)]
pub enum TemplateAction {
    /// Save a generation request under a name.
    Save(TemplateSaveArgs),

    /// Print a saved template.
    Show(TemplateShowArgs),

    /// List saved templates.
    List,
}

/// Arguments for `template save`.
#[derive(Parser, Debug)]
pub struct TemplateSaveArgs {
    /// Template name (used as the file name).
    pub name: String,

    /// Style key.
    #[arg(short, long)]
    pub style: String,

    /// Main subject of the prompt.
    #[arg(long)]
    pub subject: String,

    /// Variable override as name=value (repeatable).
    #[arg(long = "set", value_name = "NAME=VALUE", action = ArgAction::Append)]
    pub set: Vec<String>,
}

/// Arguments for `template show`.
#[derive(Parser, Debug)]
pub struct TemplateShowArgs {
    /// Template name.
    pub name: String,
}

/// Arguments for the `history` command.
#[derive(Parser, Debug)]
pub struct HistoryArgs {
    /// Number of entries to show (default: the configured history_limit).
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Delete the history log.
    #[arg(long)]
    pub clear: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

/// `--count` accepts 1 through [`MAX_COUNT`].
fn count_parser() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(1..=MAX_COUNT as u64)
}

/// Parse a `--set name=value` argument.
///
/// The name is trimmed and must be non-empty; the value is kept as given
/// and may itself contain `=`.
pub fn parse_set(arg: &str) -> Result<(String, String)> {
    let (name, value) = arg.split_once('=').ok_or_else(|| {
        PromptError::Validation(format!("--set expects NAME=VALUE, got '{}'", arg))
    })?;

    let name = name.trim();
    if name.is_empty() {
        return Err(PromptError::Validation(format!(
            "--set expects NAME=VALUE, got '{}'",
            arg
        )));
    }

    Ok((name.to_string(), value.to_string()))
}
