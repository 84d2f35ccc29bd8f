//! HTTP module containing HTTP client functionality.
//!
//! This module centralizes construction of the HTTP client shared by the
//! catalog and the downloader: request tracing middleware, optional proxy,
//! default headers, and a per-request timeout so a single unresponsive
//! server cannot stall a whole batch.
//!
//! Note that retrying is deliberately *not* a middleware concern here: the
//! downloader owns the retry loop because a retryable failure may happen
//! after the response headers, while streaming the body to disk.
//!
//! # Examples
//!
//! ```rust
//! use depfetch::http::{create_http_client, HttpClientConfig};
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HttpClientConfig {
//!     timeout: Some(Duration::from_secs(60)),
//!     ..HttpClientConfig::default()
//! };
//! let client = create_http_client(config)?;
//! # Ok(())
//! # }
//! ```

pub mod client;

pub use client::{create_http_client, HttpClientConfig};
