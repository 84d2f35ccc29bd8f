//! Configuration structure and defaults for the downloader.

use crate::download::Summary;
use crate::StyleOptions;

use reqwest::header::HeaderMap;
use std::env::current_dir;
use std::sync::Arc;
use std::time::Duration;

/// Callback type for download completion events.
///
/// Called once per file with its terminal [`Summary`], as soon as that file
/// finishes; other downloads may still be in flight.
pub type DownloadCallback = Box<dyn Fn(&Summary) + Send + Sync>;

/// Configuration structure for the downloader.
#[derive(Clone)]
pub struct DownloaderConfig {
    /// Directory where to store the downloaded files.
    pub directory: std::path::PathBuf,
    /// Number of attempts per file before its failure becomes terminal.
    pub retries: u32,
    /// Number of maximum concurrent downloads.
    pub concurrent_downloads: usize,
    /// Base delay of the exponential backoff between attempts. The sleep
    /// before attempt `n + 1` is `backoff_unit * 2^n`.
    pub backoff_unit: Duration,
    /// Per-request timeout. `None` disables it; set one when servers may
    /// hang mid-response.
    pub timeout: Option<Duration>,
    /// Downloader style options.
    pub style_options: StyleOptions,
    /// Custom HTTP headers.
    pub headers: Option<HeaderMap>,
    /// Callback for when each download completes.
    pub on_complete: Option<Arc<DownloadCallback>>,
}

impl std::fmt::Debug for DownloaderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloaderConfig")
            .field("directory", &self.directory)
            .field("retries", &self.retries)
            .field("concurrent_downloads", &self.concurrent_downloads)
            .field("backoff_unit", &self.backoff_unit)
            .field("timeout", &self.timeout)
            .field("style_options", &self.style_options)
            .field("headers", &self.headers)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            directory: current_dir().unwrap_or_default(),
            retries: 3,
            concurrent_downloads: 4,
            backoff_unit: Duration::from_secs(1),
            timeout: None,
            style_options: StyleOptions::default(),
            headers: None,
            on_complete: None,
        }
    }
}
