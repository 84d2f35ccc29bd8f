//! Interactive menu commands and report rendering.
//!
//! Everything here is a pure function over strings and descriptors; the
//! actual terminal I/O lives in the binary, which keeps the selection and
//! display logic testable without a terminal.
//!
//! - `menu` - Parsing of menu selections into commands
//! - `render` - Human-readable listings and the final run report

pub mod menu;
pub mod render;

pub use menu::{apply_limit, parse_choice, parse_file_limit, parse_release_index, MenuChoice};
pub use render::{format_file_listing, format_release_table, format_report};
