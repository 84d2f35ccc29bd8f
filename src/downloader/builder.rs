//! Builder pattern implementation for creating [`Downloader`] instances.
//!
//! # Examples
//!
//! ```rust
//! use depfetch::downloader::DownloaderBuilder;
//! use std::path::PathBuf;
//! use std::time::Duration;
//!
//! let downloader = DownloaderBuilder::new()
//!     .directory(PathBuf::from("./downloads"))
//!     .concurrent_downloads(4)
//!     .retries(3)
//!     .backoff_unit(Duration::from_secs(1))
//!     .build();
//! ```
//!
//! ## Completion Callbacks
//!
//! ```rust
//! use depfetch::download::Status;
//! use depfetch::downloader::DownloaderBuilder;
//!
//! let downloader = DownloaderBuilder::new()
//!     .on_complete(|summary| match summary.status() {
//!         Status::Success => println!("[done] {}", summary.download().filename),
//!         Status::Fail(error) => println!("[failed] {} - {}", summary.download().filename, error),
//!         Status::Skipped(reason) => println!("[skipped] {} - {}", summary.download().filename, reason),
//!         _ => {}
//!     })
//!     .build();
//! ```

use super::{config::DownloaderConfig, downloader::Downloader};
use crate::download::Summary;
use crate::StyleOptions;

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use std::{path::PathBuf, sync::Arc, time::Duration};

/// A builder used to create a [`Downloader`].
///
/// ```rust
/// # fn main()  {
/// use depfetch::downloader::DownloaderBuilder;
///
/// let d = DownloaderBuilder::new().retries(5).directory("downloads".into()).build();
/// # }
/// ```
#[derive(Default)]
pub struct DownloaderBuilder {
    config: DownloaderConfig,
}

impl DownloaderBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        DownloaderBuilder::default()
    }

    /// Convenience function to hide the progress bars.
    pub fn hidden() -> Self {
        let mut builder = DownloaderBuilder::default();
        builder.config.style_options = StyleOptions::hidden();
        builder
    }

    /// Sets the directory where to store the downloads.
    pub fn directory(mut self, directory: PathBuf) -> Self {
        self.config.directory = directory;
        self
    }

    /// Set the number of attempts per download.
    pub fn retries(mut self, retries: u32) -> Self {
        self.config.retries = retries;
        self
    }

    /// Set the number of concurrent downloads.
    pub fn concurrent_downloads(mut self, concurrent_downloads: usize) -> Self {
        self.config.concurrent_downloads = concurrent_downloads;
        self
    }

    /// Set the base delay of the exponential backoff between attempts.
    ///
    /// The sleep before attempt `n + 1` is `backoff_unit * 2^n`.
    pub fn backoff_unit(mut self, backoff_unit: Duration) -> Self {
        self.config.backoff_unit = backoff_unit;
        self
    }

    /// Set a per-request timeout, covering connection and body streaming.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set which progress bars are shown.
    pub fn style_options(mut self, style_options: StyleOptions) -> Self {
        self.config.style_options = style_options;
        self
    }

    /// Set callback for when each download completes.
    ///
    /// The callback will be called immediately when each download finishes,
    /// regardless of whether other downloads are still in progress.
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Summary) + Send + Sync + 'static,
    {
        self.config.on_complete = Some(Arc::new(Box::new(callback)));
        self
    }

    /// Helper method to get or create a new HeaderMap.
    fn new_header(&self) -> HeaderMap {
        match self.config.headers {
            Some(ref h) => h.to_owned(),
            _ => HeaderMap::new(),
        }
    }

    /// Add the http headers.
    ///
    /// You need to pass in a `HeaderMap`, not a `HeaderName`.
    /// `HeaderMap` is a set of http headers.
    ///
    /// You can call `.headers()` multiple times and all `HeaderMap` will be
    /// merged into a single one.
    ///
    /// See also [`header()`].
    ///
    /// [`header()`]: DownloaderBuilder::header
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        let mut new = self.new_header();
        new.extend(headers);

        self.config.headers = Some(new);
        self
    }

    /// Add the http header
    ///
    /// # Example
    ///
    /// You can use the `.header()` chain to add multiple headers
    ///
    /// ```
    /// use reqwest::header::{self, HeaderValue};
    /// use depfetch::downloader::DownloaderBuilder;
    ///
    /// let ua = HeaderValue::from_str(depfetch::USER_AGENT).expect("Invalid UA");
    /// let auth = HeaderValue::from_str("Basic aGk6MTIzNDU2Cg==").expect("Invalid auth");
    ///
    /// let builder = DownloaderBuilder::new()
    ///     .header(header::USER_AGENT, ua)
    ///     .header(header::AUTHORIZATION, auth)
    ///     .build();
    /// ```
    ///
    /// If you need to pass in a `HeaderMap`, instead of calling `.header()`
    /// multiple times. See also [`headers()`].
    ///
    /// [`headers()`]: DownloaderBuilder::headers
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        let mut new = self.new_header();

        new.insert(name, value);

        self.config.headers = Some(new);
        self
    }

    /// Create the [`Downloader`] with the specified options.
    pub fn build(self) -> Downloader {
        Downloader::new(self.config)
    }
}
