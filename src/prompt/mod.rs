//! Prompt generation engine.
//!
//! This module provides:
//!
//! - **Template**: single-pass `{{name}}` / `[name]` substitution with cleanup
//! - **Resolver**: fills unset variables from a style's variable spec
//! - **Generator**: orchestrates lookup, resolution, rendering, and batches
//!
//! # Formula Syntax
//!
//! ```text
//! {{subject}}, {{age}} anime character, [setting] background
//! ```
//!
//! Placeholders without a value are removed from the output.

mod generator;
mod resolver;
pub mod template;
mod types;


pub use generator::{GeneratorOptions, PromptGenerator};
pub use resolver::{FALLBACK_SUBJECT, Selection, resolve_variables};
pub use types::{GenerationConfig, GenerationResult, PromptMetadata};
