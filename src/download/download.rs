//! Core download descriptor.
//!
//! A [`Download`] describes one file of a dataset release: the source URL,
//! the file name used on disk, and the size advertised by the catalog.
//! Descriptors are built by the release catalog and consumed exactly once by
//! the downloader.

use crate::error::Error;

use reqwest::Url;
use std::convert::TryFrom;

/// Represents a file to be downloaded.
///
/// The `url` is kept as a plain string because catalog records may carry an
/// empty or malformed URL; the downloader validates it at fetch time and
/// reports the problem as a per-file failure instead of refusing the whole
/// batch up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// URL of the file to download. May be empty for invalid records.
    pub url: String,
    /// File name used to save the file on disk, relative to the destination
    /// directory.
    pub filename: String,
    /// Size in bytes advertised by the catalog. Zero means unknown.
    pub size: u64,
}

impl Download {
    /// Creates a new [`Download`].
    ///
    /// When using the [`Download::try_from`] conversions instead, the file
    /// name is extracted from the URL's last path segment.
    pub fn new(url: &str, filename: &str, size: u64) -> Self {
        Self {
            url: String::from(url),
            filename: String::from(filename),
            size,
        }
    }
}

impl TryFrom<&Url> for Download {
    type Error = crate::error::Error;

    fn try_from(value: &Url) -> Result<Self, Self::Error> {
        value
            .path_segments()
            .ok_or_else(|| {
                Error::InvalidUrl(format!(
                    "the url \"{}\" does not contain a valid path",
                    value
                ))
            })?
            .next_back()
            .filter(|filename| !filename.is_empty())
            .map(|filename| Download {
                url: value.to_string(),
                filename: form_urlencoded::parse(filename.as_bytes())
                    .map(|(key, val)| [key, val].concat())
                    .collect(),
                size: 0,
            })
            .ok_or_else(|| {
                Error::InvalidUrl(format!("the url \"{}\" does not contain a filename", value))
            })
    }
}

impl TryFrom<&str> for Download {
    type Error = crate::error::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Url::parse(value)
            .map_err(|e| {
                Error::InvalidUrl(format!("the url \"{}\" cannot be parsed: {}", value, e))
            })
            .and_then(|u| Download::try_from(&u))
    }
}
