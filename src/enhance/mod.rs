//! Enhanced prompts built from canned phrase tables.
//!
//! - **Expander**: maps short or generic subjects to richer phrases
//! - **Tables**: moods, style frames, quality phrases, subject expansions
//! - **Generator**: composes enhanced prompts and mood-cycling batches

mod expander;
mod generator;
mod tables;

pub use expander::{ExpansionTable, SubjectExpander};
pub use generator::{EnhancedGenerator, EnhancedMetadata, EnhancedResult};
pub use tables::{Mood, QUALITY_MODIFIERS, STYLE_FRAMES, StyleFrame, style_frame};
