//! Download result tracking and status reporting.
//!
//! A [`Summary`] records the terminal outcome of a single file, and a
//! [`RunSummary`] aggregates a whole batch: order-independent tallies by
//! status plus the destination directory the batch was written to.

use super::download::Download;
use std::path::{Path, PathBuf};

/// Download status enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Download failed with error message
    Fail(String),
    /// Download not yet started
    NotStarted,
    /// Download was skipped with reason
    Skipped(String),
    /// Download completed successfully
    Success,
}

/// Represents a [`Download`] summary.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Downloaded item.
    download: Download,
    /// Bytes written to disk, or found on disk for skipped files.
    size: u64,
    /// Status.
    status: Status,
}

impl Summary {
    /// Create a new [`Download`] [`Summary`].
    pub fn new(download: Download) -> Self {
        Self {
            download,
            size: 0,
            status: Status::NotStarted,
        }
    }

    /// Attach a status to a [`Download`] [`Summary`].
    pub fn with_status(self, status: Status) -> Self {
        Self { status, ..self }
    }

    /// Attach the number of bytes on disk.
    pub fn with_size(self, size: u64) -> Self {
        Self { size, ..self }
    }

    /// Get the summary's size.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Get a reference to the summary's download.
    pub fn download(&self) -> &Download {
        &self.download
    }

    /// Get a reference to the summary's status.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Mark the summary as failed with a message.
    pub fn fail(self, msg: impl std::fmt::Display) -> Self {
        Self {
            status: Status::Fail(format!("{}", msg)),
            ..self
        }
    }

    /// Mark the summary as skipped with a message.
    pub fn skip(self, msg: impl std::fmt::Display) -> Self {
        Self {
            status: Status::Skipped(format!("{}", msg)),
            ..self
        }
    }
}

/// Aggregate result of a batch download.
///
/// Counts are derived from the per-file summaries, so they always sum to
/// [`RunSummary::total`] no matter in which order the worker pool finished.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Absolute path of the directory the batch was written to.
    destination: PathBuf,
    /// One entry per submitted download.
    summaries: Vec<Summary>,
}

impl RunSummary {
    /// Create a new [`RunSummary`] from the collected per-file summaries.
    pub fn new(destination: PathBuf, summaries: Vec<Summary>) -> Self {
        Self {
            destination,
            summaries,
        }
    }

    /// The directory the batch was written to.
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// All per-file summaries.
    pub fn summaries(&self) -> &[Summary] {
        &self.summaries
    }

    /// Number of submitted files.
    pub fn total(&self) -> usize {
        self.summaries.len()
    }

    /// Number of files downloaded successfully.
    pub fn succeeded(&self) -> usize {
        self.count(|s| matches!(s, Status::Success))
    }

    /// Number of files that failed after exhausting retries.
    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, Status::Fail(_)))
    }

    /// Number of files skipped because they were already on disk.
    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, Status::Skipped(_)))
    }

    /// Iterate over the failed entries with their error details.
    pub fn failures(&self) -> impl Iterator<Item = (&Download, &str)> {
        self.summaries.iter().filter_map(|s| match s.status() {
            Status::Fail(detail) => Some((s.download(), detail.as_str())),
            _ => None,
        })
    }

    fn count(&self, pred: impl Fn(&Status) -> bool) -> usize {
        self.summaries
            .iter()
            .filter(|s| pred(s.status()))
            .count()
    }
}
