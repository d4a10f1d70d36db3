//! Filesystem utilities for perchance.
//!
//! Saved templates are written atomically so an interrupted save never
//! leaves a truncated JSON file behind.

mod atomic;

pub use atomic::atomic_write_file;
