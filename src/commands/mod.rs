//! Command implementations for perchance.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command runs against one resolved [`AppContext`].

mod enhance;
mod generate;
mod history;
mod styles;
mod template;

use crate::cli::{Command, TemplateAction, TemplateCommand};
use crate::context::AppContext;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(ctx: &AppContext, command: Command) -> Result<()> {
    match command {
        Command::Styles(args) => styles::cmd_styles(ctx, args),
        Command::Style(args) => styles::cmd_style(ctx, args),
        Command::Generate(args) => generate::cmd_generate(ctx, args),
        Command::Batch(args) => generate::cmd_batch(ctx, args),
        Command::Enhance(args) => enhance::cmd_enhance(ctx, args),
        Command::Template(template_cmd) => dispatch_template(ctx, template_cmd),
        Command::History(args) => history::cmd_history(ctx, args),
        Command::Stats => history::cmd_stats(ctx),
    }
}

/// Dispatch template subcommands.
fn dispatch_template(ctx: &AppContext, template_cmd: TemplateCommand) -> Result<()> {
    match template_cmd.action {
        TemplateAction::Save(args) => template::cmd_template_save(ctx, args),
        TemplateAction::Show(args) => template::cmd_template_show(ctx, args),
        TemplateAction::List => template::cmd_template_list(ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use crate::error::PromptError;
    use crate::test_support::DirGuard;
    use clap::Parser;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn run_in(dir: &TempDir, argv: &[&str]) -> Result<()> {
        let _guard = DirGuard::new(dir.path());
        let cli = Cli::try_parse_from(argv).unwrap();
        let ctx = AppContext::resolve(cli.config.as_deref())?;
        dispatch(&ctx, cli.command)
    }

    #[test]
    #[serial]
    fn test_end_to_end_generate_and_history() {
        let temp_dir = TempDir::new().unwrap();

        run_in(
            &temp_dir,
            &["perchance", "generate", "--style", "anime", "--subject", "a fox"],
        )
        .unwrap();
        run_in(
            &temp_dir,
            &["perchance", "batch", "--subject", "a lighthouse", "-n", "2"],
        )
        .unwrap();
        run_in(&temp_dir, &["perchance", "history", "-n", "1"]).unwrap();
        run_in(&temp_dir, &["perchance", "stats"]).unwrap();

        let history = temp_dir.path().join(".perchance").join("history.ndjson");
        let content = fs::read_to_string(history).unwrap();
        assert_eq!(content.lines().count(), 2);

        run_in(&temp_dir, &["perchance", "history", "--clear"]).unwrap();
        assert!(!temp_dir.path().join(".perchance").join("history.ndjson").exists());
    }

    #[test]
    #[serial]
    fn test_end_to_end_templates() {
        let temp_dir = TempDir::new().unwrap();

        run_in(
            &temp_dir,
            &[
                "perchance", "template", "save", "fox", "--style", "anime", "--subject", "a fox",
            ],
        )
        .unwrap();
        run_in(&temp_dir, &["perchance", "template", "list"]).unwrap();
        run_in(&temp_dir, &["perchance", "template", "show", "fox"]).unwrap();
        run_in(
            &temp_dir,
            &["perchance", "generate", "--template", "fox", "--format", "csv"],
        )
        .unwrap();

        assert!(
            temp_dir
                .path()
                .join(".perchance")
                .join("templates")
                .join("fox.json")
                .is_file()
        );
    }

    #[test]
    #[serial]
    fn test_config_file_is_honored() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("alt.yaml"),
            "history_file: logs/runs.ndjson\n",
        )
        .unwrap();

        run_in(
            &temp_dir,
            &["perchance", "--config", "alt.yaml", "enhance", "--subject", "cat"],
        )
        .unwrap();

        assert!(temp_dir.path().join("logs").join("runs.ndjson").is_file());
    }

    #[test]
    #[serial]
    fn test_unknown_style_exit_code() {
        let temp_dir = TempDir::new().unwrap();

        let err = run_in(&temp_dir, &["perchance", "style", "watercolor"]).unwrap_err();
        assert!(matches!(err, PromptError::StyleNotFound { .. }));
        assert_eq!(err.exit_code(), 1);

        run_in(&temp_dir, &["perchance", "styles", "--export", "csv"]).unwrap();
    }
}
