//! Release discovery against the Figshare and DepMap portal APIs.
//!
//! The catalog is a plain request/response client: one attempt per call, no
//! retry logic of its own. Every public operation fails soft: on a network
//! or parse error it logs a diagnostic and returns an empty list, so "no
//! releases" is always a valid, non-fatal outcome for callers.
//!
//! # Examples
//!
//! ```rust,no_run
//! use depfetch::catalog::ReleaseCatalog;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let catalog = ReleaseCatalog::new();
//! for release in catalog.list_releases().await {
//!     println!("{} ({})", release.title, release.version);
//! }
//! # }
//! ```

pub mod client;
pub mod release;

pub use client::ReleaseCatalog;
pub use release::{Release, ReleaseVersion};
