//! Core downloader implementation with fetch logic.
//!
//! The [`Downloader`] runs each file through the same sequence: validate the
//! descriptor, skip files already on disk, then attempt the download up to
//! the configured number of times with exponential backoff in between.
//! Bodies are streamed into a `.part` scratch file that is renamed over the
//! target only on full success, so an interrupted run can never leave a
//! partial file that a later run would mistake for a finished one.

use super::config::DownloaderConfig;
use crate::download::{Download, RunSummary, Status, Summary};
use crate::error::{Error, Result};
use crate::http::{create_http_client, HttpClientConfig};
use crate::progress::display::ProgressDisplay;
use crate::utils::is_safe_relative_path;
use crate::StyleOptions;

use futures::stream::{self, StreamExt};
use indicatif::ProgressBar;
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use std::fmt;
use std::fmt::Debug;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::{
    fs,
    fs::OpenOptions,
    io::{AsyncWriteExt, BufWriter},
    time::sleep,
};
use tracing::{debug, warn};

/// Disk writes are buffered into fixed-size chunks of this many bytes.
const CHUNK_BUFFER_SIZE: usize = 8 * 1024;

/// Represents the download controller.
///
/// A downloader can be created via its builder:
///
/// ```rust
/// # fn main()  {
/// use depfetch::downloader::DownloaderBuilder;
///
/// let d = DownloaderBuilder::new().build();
/// # }
/// ```
#[derive(Clone)]
pub struct Downloader {
    config: DownloaderConfig,
}

impl Debug for Downloader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Downloader")
            .field("config", &self.config)
            .finish()
    }
}

impl Downloader {
    /// Creates a new Downloader with the given configuration.
    pub(crate) fn new(config: DownloaderConfig) -> Self {
        Self { config }
    }

    /// Gets the directory where files will be downloaded.
    pub fn directory(&self) -> &PathBuf {
        &self.config.directory
    }

    /// Gets the number of attempts per download.
    pub fn retries(&self) -> u32 {
        self.config.retries
    }

    /// Gets the number of concurrent downloads.
    pub fn concurrent_downloads(&self) -> usize {
        self.config.concurrent_downloads
    }

    /// Gets the base backoff delay between attempts.
    pub fn backoff_unit(&self) -> Duration {
        self.config.backoff_unit
    }

    /// Gets the per-request timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.config.timeout
    }

    /// Gets the custom headers.
    pub fn headers(&self) -> Option<&reqwest::header::HeaderMap> {
        self.config.headers.as_ref()
    }

    /// Gets which progress bars are shown.
    pub fn style_options(&self) -> StyleOptions {
        self.config.style_options
    }

    /// Downloads the given files and blocks until every one of them has a
    /// terminal outcome.
    ///
    /// This never fails as a whole: a file that cannot be downloaded ends up
    /// as a [`Status::Fail`] entry in the returned [`RunSummary`] without
    /// affecting its siblings.
    pub async fn download(&self, downloads: &[Download]) -> RunSummary {
        let client = create_http_client(HttpClientConfig {
            timeout: self.config.timeout,
            proxy: None,
            headers: self.config.headers.clone(),
        })
        .unwrap();

        let progress = ProgressDisplay::new(self.config.style_options, downloads.len());

        // Download the files asynchronously, one result slot per file.
        let summaries = stream::iter(downloads)
            .map(|d| self.fetch(&client, d, &progress))
            .buffer_unordered(self.config.concurrent_downloads.max(1))
            .collect::<Vec<_>>()
            .await;

        progress.finish();

        let destination = std::path::absolute(&self.config.directory)
            .unwrap_or_else(|_| self.config.directory.clone());
        RunSummary::new(destination, summaries)
    }

    /// Fetches one file and writes it to disk.
    async fn fetch(
        &self,
        client: &ClientWithMiddleware,
        download: &Download,
        progress: &ProgressDisplay,
    ) -> Summary {
        let summary = Summary::new(download.clone());

        // Invalid descriptors never reach the network.
        if download.url.is_empty() {
            return self.complete(progress, summary.fail("empty URL"));
        }
        if !is_safe_relative_path(&download.filename) {
            return self.complete(
                progress,
                summary.fail(format!("unsafe file name: {:?}", download.filename)),
            );
        }

        let output = self.config.directory.join(&download.filename);

        // A non-empty file at the destination counts as already downloaded.
        // No content verification is performed.
        if let Ok(metadata) = fs::metadata(&output).await {
            if metadata.len() > 0 {
                debug!("{} already exists, skipping", download.filename);
                return self.complete(
                    progress,
                    summary.with_size(metadata.len()).skip("file already exists"),
                );
            }
        }

        let url = match Url::parse(&download.url) {
            Ok(url) => url,
            Err(e) => {
                return self.complete(
                    progress,
                    summary.fail(format!("invalid URL \"{}\": {}", download.url, e)),
                );
            }
        };

        let attempts = self.config.retries.max(1);
        let mut attempt: u32 = 0;
        loop {
            match self.attempt(client, download, &url, &output, progress).await {
                Ok(size) => {
                    return self.complete(
                        progress,
                        summary.with_size(size).with_status(Status::Success),
                    );
                }
                Err(e) => {
                    attempt += 1;
                    if attempt >= attempts {
                        return self.complete(progress, summary.fail(e));
                    }
                    let delay = self.config.backoff_unit * (1u32 << (attempt - 1).min(16));
                    warn!(
                        "download of {} failed (attempt {}/{}), retrying in {:?}: {}",
                        download.filename, attempt, attempts, delay, e
                    );
                    sleep(delay).await;
                }
            }
        }
    }

    /// One download attempt: request, stream to a scratch file, rename into
    /// place. Any error invalidates the whole attempt and removes the
    /// scratch file.
    async fn attempt(
        &self,
        client: &ClientWithMiddleware,
        download: &Download,
        url: &Url,
        output: &Path,
        progress: &ProgressDisplay,
    ) -> Result<u64> {
        debug!("fetching {}", url);
        let res = client.get(url.clone()).send().await?;
        let res = res.error_for_status()?;

        // Size the progress bar by the catalog's expectation, falling back
        // to the response headers.
        let size_hint = if download.size > 0 {
            download.size
        } else {
            res.content_length().unwrap_or(0)
        };
        let pb = progress.create_child_progress(size_hint);

        if let Some(parent) = output.parent() {
            debug!("creating destination directory {:?}", parent);
            fs::create_dir_all(parent).await?;
        }

        let scratch = scratch_path(output);
        let outcome = match self.write_body(res, &scratch, &pb).await {
            Ok(size) => fs::rename(&scratch, output)
                .await
                .map(|_| size)
                .map_err(Error::from),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(size) => {
                progress.finish_child(pb);
                progress.increment_main();
                Ok(size)
            }
            Err(e) => {
                pb.finish_and_clear();
                // The scratch file of a failed attempt must not survive.
                let _ = fs::remove_file(&scratch).await;
                Err(e)
            }
        }
    }

    /// Stream the response body into the scratch file.
    async fn write_body(
        &self,
        res: reqwest::Response,
        scratch: &Path,
        pb: &ProgressBar,
    ) -> Result<u64> {
        debug!("creating scratch file {:?}", scratch);
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(scratch)
            .await?;
        let mut writer = BufWriter::with_capacity(CHUNK_BUFFER_SIZE, file);

        let mut written: u64 = 0;
        let mut stream = res.bytes_stream();
        while let Some(item) = stream.next().await {
            let mut chunk = item?;
            written += chunk.len() as u64;
            pb.inc(chunk.len() as u64);
            writer.write_all_buf(&mut chunk).await?;
        }
        writer.flush().await?;

        Ok(written)
    }

    /// Report a terminal per-file outcome through the completion callback.
    fn complete(&self, progress: &ProgressDisplay, summary: Summary) -> Summary {
        if !matches!(summary.status(), Status::Success) {
            // Successful fetches already advanced the bar inside `attempt`.
            progress.increment_main();
        }
        if let Some(ref callback) = self.config.on_complete {
            callback(&summary);
        }
        summary
    }
}

/// Scratch path used while a file is being written: `<filename>.part` next
/// to the final location, so the rename stays on one filesystem.
fn scratch_path(output: &Path) -> PathBuf {
    let mut name = output
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".part");
    output.with_file_name(name)
}
