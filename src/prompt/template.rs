//! Placeholder substitution for style formulas.
//!
//! Formulas accept two placeholder syntaxes:
//!
//! - `{{name}}` - a `{{...}}` body may not contain `}`
//! - `[name]` - a `[...]` body may not contain `]`
//!
//! Both are recognized in a single scan, so a substituted value is never
//! re-scanned and one key being a substring of another cannot cause double
//! substitution.
//!
//! # Unresolved placeholders
//!
//! Rendering is fail-soft: a placeholder whose name is not in the variable
//! map is removed from the output rather than rendered literally or reported
//! as an error. The cleanup pass then tidies the commas and whitespace that
//! removal leaves behind.

use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

static REPEATED_COMMAS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*,").expect("valid regex"));
static EDGE_COMMAS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*,\s*|\s*,\s*$").expect("valid regex"));
static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Which syntax a placeholder was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderSyntax {
    /// `{{name}}`
    Braces,
    /// `[name]`
    Brackets,
}

/// A piece of a parsed formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied to the output unchanged.
    Literal(&'a str),
    /// A slot to fill. `name` is already trimmed and may be empty for a
    /// whitespace-only body, which never resolves.
    Placeholder {
        name: &'a str,
        syntax: PlaceholderSyntax,
    },
}

/// Split a formula into literal text and placeholders.
pub fn parse(template: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut pos = 0;

    while pos < template.len() {
        let rest = &template[pos..];

        match match_placeholder(rest) {
            Some((name, syntax, consumed)) => {
                if literal_start < pos {
                    segments.push(Segment::Literal(&template[literal_start..pos]));
                }
                segments.push(Segment::Placeholder {
                    name: name.trim(),
                    syntax,
                });
                pos += consumed;
                literal_start = pos;
            }
            None => {
                // Advance by one whole character to stay on a UTF-8 boundary
                pos += rest.chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    if literal_start < template.len() {
        segments.push(Segment::Literal(&template[literal_start..]));
    }

    segments
}

/// Try to match a placeholder at the start of `input`.
///
/// Returns the raw body, the syntax, and the number of bytes consumed.
fn match_placeholder(input: &str) -> Option<(&str, PlaceholderSyntax, usize)> {
    if let Some(body_and_rest) = input.strip_prefix("{{") {
        let end = body_and_rest.find('}')?;
        if end == 0 || !body_and_rest[end..].starts_with("}}") {
            return None;
        }
        return Some((&body_and_rest[..end], PlaceholderSyntax::Braces, end + 4));
    }

    if let Some(body_and_rest) = input.strip_prefix('[') {
        let end = body_and_rest.find(']')?;
        if end == 0 {
            return None;
        }
        return Some((&body_and_rest[..end], PlaceholderSyntax::Brackets, end + 2));
    }

    None
}

/// Distinct placeholder names in the order they first appear.
pub fn placeholders(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for segment in parse(template) {
        if let Segment::Placeholder { name, .. } = segment
            && !name.is_empty()
            && !names.iter().any(|n| n == name)
        {
            names.push(name.to_string());
        }
    }
    names
}

/// Render a formula by substituting variables and cleaning up the result.
///
/// Placeholders missing from `variables` are dropped.
pub fn render(template: &str, variables: &IndexMap<String, String>) -> String {
    let mut result = String::with_capacity(template.len());

    for segment in parse(template) {
        match segment {
            Segment::Literal(text) => result.push_str(text),
            Segment::Placeholder { name, .. } => {
                if let Some(value) = variables.get(name) {
                    result.push_str(value);
                }
            }
        }
    }

    cleanup(&result)
}

/// Tidy separators left behind by empty or removed placeholders.
///
/// - `, ,` collapses to `,` (repeatedly, so longer runs collapse too)
/// - leading and trailing commas are stripped with their whitespace
/// - whitespace runs become a single space
pub fn cleanup(text: &str) -> String {
    let mut current = text.to_string();
    while REPEATED_COMMAS.is_match(&current) {
        current = REPEATED_COMMAS.replace_all(&current, ",").into_owned();
    }

    let current = EDGE_COMMAS.replace_all(&current, "");
    let current = WHITESPACE_RUNS.replace_all(&current, " ");
    current.trim().to_string()
}

/// Append up to the first three quality modifiers as a trailing clause.
pub fn append_quality(text: &str, modifiers: &[String]) -> String {
    let clause = modifiers
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    match (text.is_empty(), clause.is_empty()) {
        (_, true) => text.to_string(),
        (true, false) => clause,
        (false, false) => format!("{}, {}", text, clause),
    }
}
