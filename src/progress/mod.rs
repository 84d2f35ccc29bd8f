//! Progress bar functionality.
//!
//! Progress reporting is a side effect only: it never affects download
//! control flow or outcomes, and it can be disabled entirely for
//! non-interactive runs.
//!
//! - `style` - Visibility options for the bars
//! - `display` - Coordination of the batch bar and the per-file bars
//!
//! # Examples
//!
//! ```rust
//! use depfetch::progress::StyleOptions;
//!
//! // Default: batch bar plus one bar per file in flight.
//! let style = StyleOptions::default();
//! assert!(style.is_enabled());
//!
//! // Fully hidden, e.g. for tests or cron jobs.
//! assert!(!StyleOptions::hidden().is_enabled());
//! ```

pub mod display;
pub mod style;

pub use display::ProgressDisplay;
pub use style::StyleOptions;
