//! Implementation of the `perchance history` and `perchance stats` commands.

use crate::cli::HistoryArgs;
use crate::context::AppContext;
use crate::error::{PromptError, Result};
use crate::history::{HistoryEntry, HistorySummary};
use crate::style::CatalogStats;

/// Execute `perchance history`.
pub fn cmd_history(ctx: &AppContext, args: HistoryArgs) -> Result<()> {
    let log = ctx.history();

    if args.clear {
        log.clear()?;
        println!("Cleared history at {}", log.path().display());
        return Ok(());
    }

    let limit = args.limit.unwrap_or(ctx.config.history_limit);
    if limit == 0 {
        return Err(PromptError::Validation(
            "history limit must be at least 1".to_string(),
        ));
    }

    let entries = log.recent(limit)?;
    if entries.is_empty() {
        println!("No generations recorded yet.");
        return Ok(());
    }
    print!("{}", format_entries(&entries));
    Ok(())
}

/// Execute `perchance stats`.
pub fn cmd_stats(ctx: &AppContext) -> Result<()> {
    let stats = ctx.catalog()?.stats();
    let summary = ctx.history().summarize()?;
    print!("{}", format_stats(&stats, &summary));
    Ok(())
}

pub(super) fn format_entries(entries: &[HistoryEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!(
            "{}  {:<8}  {} x{}  \"{}\"\n",
            entry.ts.format("%Y-%m-%d %H:%M:%S"),
            entry.action.as_str(),
            entry.style,
            entry.count,
            entry.subject
        ));
        if !entry.preview.is_empty() {
            out.push_str(&format!("    {}\n", entry.preview));
        }
    }
    out
}

pub(super) fn format_stats(stats: &CatalogStats, summary: &HistorySummary) -> String {
    let mut out = String::new();

    out.push_str(&format!("Styles:             {}\n", stats.total_styles));
    out.push_str(&format!("Variables:          {}\n", stats.total_variables));
    out.push_str(&format!(
        "Available styles:   {}\n",
        stats.available_styles.join(", ")
    ));
    out.push_str(&format!(
        "Total generations:  {}\n",
        summary.total_generations
    ));

    if !summary.top_styles.is_empty() {
        out.push('\n');
        out.push_str("Top styles:\n");
        for (rank, (style, count)) in summary.top_styles.iter().enumerate() {
            out.push_str(&format!("  {}. {} ({})\n", rank + 1, style, count));
        }
    }

    out
}
