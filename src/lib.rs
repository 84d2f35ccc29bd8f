//! Depfetch discovers versioned DepMap dataset releases and downloads their
//! files asynchronously via HTTP(S).
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use depfetch::{catalog::ReleaseCatalog, downloader::DownloaderBuilder};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let catalog = ReleaseCatalog::new();
//! let releases = catalog.list_releases().await;
//!
//! if let Some(release) = releases.first() {
//!     let files = catalog.release_files(release.id).await;
//!     let downloader = DownloaderBuilder::new()
//!         .directory(PathBuf::from("depmap_data").join(release.dir_name()))
//!         .build();
//!     let report = downloader.download(&files).await;
//!     println!("{} of {} files downloaded", report.succeeded(), report.total());
//! }
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`catalog`] - Release discovery against the Figshare and DepMap portal APIs
//! - [`download`] - The `Download` descriptor and per-file/run summaries
//! - [`downloader`] - The `Downloader` and `DownloaderBuilder` orchestrating downloads
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`http`] - HTTP client construction and middleware
//! - [`progress`] - Progress bar styling and display management
//! - [`cli`] - Interactive menu commands and report rendering
//! - [`utils`] - Shared utility functions

pub mod catalog;
pub mod cli;
pub mod download;
pub mod downloader;
pub mod error;
pub mod http;
pub mod progress;
pub mod utils;

pub use catalog::{Release, ReleaseCatalog, ReleaseVersion};
pub use download::{Download, RunSummary, Status, Summary};
pub use downloader::{Downloader, DownloaderBuilder};
pub use error::{Error, Result};
pub use http::{create_http_client, HttpClientConfig};
pub use progress::StyleOptions;
pub use utils::sanitize::sanitize_dir_name;

/// User-Agent sent with every request issued by this crate.
pub const USER_AGENT: &str = concat!("depfetch/", env!("CARGO_PKG_VERSION"));
