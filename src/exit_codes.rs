//! Exit code constants for the perchance CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unknown style, missing template)
//! - 2: Validation failure (missing style/subject, bad override syntax)
//! - 3: Data failure (unreadable catalog, malformed style entry)
//! - 4: I/O failure (history, export, template files)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unknown style key, or missing template.
pub const USER_ERROR: i32 = 1;

/// Validation failure: a generation config is missing required fields.
pub const VALIDATION_FAILURE: i32 = 2;

/// Data failure: the style catalog is unreadable or a style entry is malformed.
pub const DATA_FAILURE: i32 = 3;

/// I/O failure: reading or writing local state files failed.
pub const IO_FAILURE: i32 = 4;
