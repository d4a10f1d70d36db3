//! Output formats for prompts and style listings.
//!
//! Every renderer returns the complete output as a string; commands print it.

use crate::enhance::EnhancedResult;
use crate::error::{PromptError, Result};
use crate::prompt::GenerationResult;
use crate::style::StyleSummary;
use serde::Serialize;

/// How command output is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    /// Parse a format name (case-insensitive).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }

    /// Parse a format name, rejecting unknown names with a validation error.
    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| {
            PromptError::Validation(format!(
                "unknown output format '{}' (expected text, json or csv)",
                s
            ))
        })
    }
}

/// Row shape shared by plain and enhanced prompts.
struct PromptRow<'a> {
    style: &'a str,
    text: &'a str,
    negative: Option<&'a str>,
    words: usize,
    characters: usize,
}

impl<'a> From<&'a GenerationResult> for PromptRow<'a> {
    fn from(result: &'a GenerationResult) -> Self {
        Self {
            style: &result.style,
            text: &result.text,
            negative: result.negative_prompt.as_deref(),
            words: result.metadata.word_count,
            characters: result.metadata.character_count,
        }
    }
}

impl<'a> From<&'a EnhancedResult> for PromptRow<'a> {
    fn from(result: &'a EnhancedResult) -> Self {
        Self {
            style: &result.style,
            text: &result.text,
            negative: Some(result.negatives.as_str()).filter(|n| !n.is_empty()),
            words: result.metadata.word_count,
            characters: result.metadata.character_count,
        }
    }
}

/// Render generated prompts.
pub fn render_prompts(results: &[GenerationResult], format: OutputFormat) -> Result<String> {
    let rows: Vec<PromptRow<'_>> = results.iter().map(PromptRow::from).collect();
    match format {
        OutputFormat::Text => Ok(prompts_to_text(&rows)),
        OutputFormat::Json => to_json(&results),
        OutputFormat::Csv => prompts_to_csv(&rows),
    }
}

/// Render enhanced prompts.
pub fn render_enhanced(results: &[EnhancedResult], format: OutputFormat) -> Result<String> {
    let rows: Vec<PromptRow<'_>> = results.iter().map(PromptRow::from).collect();
    match format {
        OutputFormat::Text => Ok(prompts_to_text(&rows)),
        OutputFormat::Json => to_json(&results),
        OutputFormat::Csv => prompts_to_csv(&rows),
    }
}

/// Render a style listing.
pub fn render_styles(styles: &[StyleSummary], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            let width = styles.iter().map(|s| s.key.len()).max().unwrap_or(0);
            for style in styles {
                out.push_str(&format!(
                    "{:<width$}  {} - {} ({} variables)\n",
                    style.key,
                    style.name,
                    style.description,
                    style.variable_count,
                    width = width
                ));
            }
            Ok(out)
        }
        OutputFormat::Json => to_json(&styles),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(Vec::new());
            write_record(
                &mut wtr,
                ["key", "name", "description", "variables", "has_examples"],
            )?;
            for style in styles {
                let variables = style.variable_count.to_string();
                let has_examples = style.has_examples.to_string();
                write_record(
                    &mut wtr,
                    [
                        style.key.as_str(),
                        style.name.as_str(),
                        style.description.as_str(),
                        variables.as_str(),
                        has_examples.as_str(),
                    ],
                )?;
            }
            finish_csv(wtr)
        }
    }
}

fn prompts_to_text(rows: &[PromptRow<'_>]) -> String {
    let mut out = String::new();

    if let [row] = rows {
        out.push_str(&format!("{}\n", row.text));
        if let Some(negative) = row.negative {
            out.push_str(&format!("\nNegative prompt: {}\n", negative));
        }
        return out;
    }

    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("[{}] {}\n", i + 1, row.text));
        if let Some(negative) = row.negative {
            out.push_str(&format!("    Negative prompt: {}\n", negative));
        }
    }
    out
}

fn prompts_to_csv(rows: &[PromptRow<'_>]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    write_record(
        &mut wtr,
        ["index", "style", "text", "negative_prompt", "words", "characters"],
    )?;
    for (i, row) in rows.iter().enumerate() {
        let index = (i + 1).to_string();
        let words = row.words.to_string();
        let characters = row.characters.to_string();
        write_record(
            &mut wtr,
            [
                index.as_str(),
                row.style,
                row.text,
                row.negative.unwrap_or(""),
                words.as_str(),
                characters.as_str(),
            ],
        )?;
    }
    finish_csv(wtr)
}

fn to_json<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(data)
        .map_err(|e| PromptError::UserError(format!("failed to serialize output: {}", e)))?;
    json.push('\n');
    Ok(json)
}

fn write_record<'a, I>(wtr: &mut csv::Writer<Vec<u8>>, record: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    wtr.write_record(record)
        .map_err(|e| PromptError::UserError(format!("failed to write CSV: {}", e)))
}

fn finish_csv(wtr: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = wtr
        .into_inner()
        .map_err(|e| PromptError::UserError(format!("failed to write CSV: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| PromptError::UserError(format!("CSV output is not UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enhance::{EnhancedGenerator, Mood};
    use indexmap::IndexMap;

    fn result(text: &str, negative: Option<&str>) -> GenerationResult {
        GenerationResult::new(
            text.to_string(),
            "anime".to_string(),
            IndexMap::new(),
            negative.map(str::to_string),
        )
    }

    fn summary(key: &str, variables: usize) -> StyleSummary {
        StyleSummary {
            key: key.to_string(),
            name: format!("{} name", key),
            description: "a style, with a comma".to_string(),
            variable_count: variables,
            has_examples: variables > 0,
        }
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from_str("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str(" csv "), Some(OutputFormat::Csv));
        assert_eq!(OutputFormat::from_str("text"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::from_str("yaml"), None);
        assert!(matches!(
            OutputFormat::parse("yaml"),
            Err(PromptError::Validation(_))
        ));
    }

    #[test]
    fn test_single_prompt_text() {
        let out = render_prompts(&[result("a fox", Some("blurry"))], OutputFormat::Text).unwrap();
        assert_eq!(out, "a fox\n\nNegative prompt: blurry\n");

        let out = render_prompts(&[result("a fox", None)], OutputFormat::Text).unwrap();
        assert_eq!(out, "a fox\n");
    }

    #[test]
    fn test_batch_text_is_numbered() {
        let results = [result("one", None), result("two", Some("blurry"))];
        let out = render_prompts(&results, OutputFormat::Text).unwrap();
        assert_eq!(out, "[1] one\n\n[2] two\n    Negative prompt: blurry\n");
    }

    #[test]
    fn test_prompts_csv() {
        let results = [result("a fox, dark", Some("blurry")), result("a cat", None)];
        let out = render_prompts(&results, OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "index,style,text,negative_prompt,words,characters");
        assert_eq!(lines[1], "1,anime,\"a fox, dark\",blurry,3,11");
        assert_eq!(lines[2], "2,anime,a cat,,2,5");
    }

    #[test]
    fn test_prompts_json() {
        let out = render_prompts(&[result("a fox", None)], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["text"], "a fox");
        assert_eq!(value[0]["metadata"]["wordCount"], 2);
    }

    #[test]
    fn test_enhanced_csv_uses_negatives() {
        let results = EnhancedGenerator::default()
            .batch("comic", "cat", 2)
            .unwrap();
        let out = render_enhanced(&results, OutputFormat::Csv).unwrap();

        let mut reader = csv::Reader::from_reader(out.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "comic");
        assert_eq!(&rows[0][3], results[0].negatives.as_str());
        assert!(rows[1][2].contains(Mood::Peaceful.modifier()));
    }

    #[test]
    fn test_styles_csv_and_text() {
        let styles = [summary("anime", 5), summary("comic", 0)];

        let csv_out = render_styles(&styles, OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = csv_out.lines().collect();
        assert_eq!(lines[0], "key,name,description,variables,has_examples");
        assert_eq!(lines[1], "anime,anime name,\"a style, with a comma\",5,true");
        assert_eq!(lines[2], "comic,comic name,\"a style, with a comma\",0,false");

        let text_out = render_styles(&styles, OutputFormat::Text).unwrap();
        assert!(text_out.starts_with("anime  anime name - a style, with a comma (5 variables)\n"));
    }
}
