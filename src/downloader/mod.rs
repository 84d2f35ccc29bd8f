//! Downloader module containing core downloader functionality, builder
//! pattern, and configuration.
//!
//! The downloader materializes a batch of [`Download`] descriptors into
//! files under a destination directory: bounded concurrency, per-file retry
//! with exponential backoff, idempotent skip of files already on disk, and
//! an aggregate [`RunSummary`] once every file has a terminal outcome.
//!
//! - `downloader` - Core [`Downloader`] with the fetch/retry logic
//! - `builder` - [`DownloaderBuilder`] for flexible configuration
//! - `config` - Configuration structure and callback types
//!
//! # Examples
//!
//! ```rust,no_run
//! use depfetch::download::Download;
//! use depfetch::downloader::DownloaderBuilder;
//! use std::path::PathBuf;
//!
//! # async fn example() {
//! let downloader = DownloaderBuilder::new()
//!     .directory(PathBuf::from("depmap_data/current_release"))
//!     .concurrent_downloads(4)
//!     .retries(3)
//!     .build();
//!
//! let files = vec![
//!     Download::new("https://example.com/dl/model.csv", "model.csv", 0),
//!     Download::new("https://example.com/dl/mutations.csv", "mutations.csv", 0),
//! ];
//!
//! let report = downloader.download(&files).await;
//! println!(
//!     "{} succeeded, {} failed, {} skipped",
//!     report.succeeded(),
//!     report.failed(),
//!     report.skipped()
//! );
//! # }
//! ```
//!
//! [`Download`]: crate::download::Download
//! [`RunSummary`]: crate::download::RunSummary

pub mod builder;
pub mod config;
pub mod downloader;

pub use builder::DownloaderBuilder;
pub use config::DownloadCallback;
pub use downloader::Downloader;
