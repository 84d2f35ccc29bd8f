//! Shared utility functions.
//!
//! - [`sanitize`] - Filesystem-name sanitization and relative-path checks

pub mod sanitize;

pub use sanitize::{is_safe_relative_path, sanitize_dir_name};
