//! Download module containing download-related functionality.
//!
//! This module provides the structures consumed and produced by the
//! downloader: the core [`Download`] descriptor, the per-file [`Summary`]
//! with its [`Status`], and the aggregate [`RunSummary`] for a whole batch.
//!
//! # Examples
//!
//! ## Creating a Download
//!
//! ```rust
//! use depfetch::download::Download;
//! use std::convert::TryFrom;
//!
//! // Explicit descriptor, as produced by the release catalog.
//! let download = Download::new("https://example.com/data/model.csv", "model.csv", 1024);
//!
//! // Or derive the filename from the URL.
//! let download = Download::try_from("https://example.com/data/model.csv")?;
//! assert_eq!(download.filename, "model.csv");
//! # Ok::<(), depfetch::Error>(())
//! ```
//!
//! ## Working with Download Status
//!
//! ```rust
//! use depfetch::download::{Download, Status, Summary};
//!
//! let download = Download::new("https://example.com/file.zip", "file.zip", 0);
//! let summary = Summary::new(download).with_status(Status::Success);
//!
//! match summary.status() {
//!     Status::Success => println!("download completed"),
//!     Status::Fail(msg) => println!("download failed: {}", msg),
//!     _ => println!("not finished"),
//! }
//! ```

pub mod download;
pub mod summary;

pub use download::Download;
pub use summary::{RunSummary, Status, Summary};
