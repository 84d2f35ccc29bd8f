//! Release descriptors and version-tag parsing.

use crate::utils::sanitize_dir_name;

use chrono::{DateTime, Utc};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static VERSION_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{2})Q(\d)").unwrap());

/// A release's position in the quarterly versioning scheme.
///
/// `(0, 0)` means the release title carried no parseable version tag; such
/// releases sort before every tagged one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReleaseVersion {
    /// Full year, e.g. 2024.
    pub year: u16,
    /// Quarter within the year, 1 through 4.
    pub quarter: u8,
}

impl ReleaseVersion {
    /// Parse a version tag like `24Q4` anywhere in a release title.
    ///
    /// Total and deterministic: returns the default `(0, 0)` when no tag is
    /// present, and the leftmost tag wins when several appear.
    ///
    /// ```rust
    /// use depfetch::catalog::ReleaseVersion;
    ///
    /// let v = ReleaseVersion::from_title("DepMap Public 24Q4");
    /// assert_eq!((v.year, v.quarter), (2024, 4));
    /// assert_eq!(ReleaseVersion::from_title("no tag here"), ReleaseVersion::default());
    /// ```
    pub fn from_title(title: &str) -> Self {
        match VERSION_TAG.captures(title) {
            Some(caps) => {
                // Both groups are all-digit and bounded, so the parses
                // cannot fail.
                let year: u16 = caps[1].parse().unwrap_or(0);
                let quarter: u8 = caps[2].parse().unwrap_or(0);
                Self {
                    year: 2000 + year,
                    quarter,
                }
            }
            None => Self::default(),
        }
    }

    /// Whether the title carried a parseable version tag.
    pub fn is_known(&self) -> bool {
        *self != Self::default()
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_known() {
            write!(f, "{:02}Q{}", self.year % 100, self.quarter)
        } else {
            write!(f, "unversioned")
        }
    }
}

/// A versioned, dated snapshot of the dataset as listed by the catalog.
#[derive(Debug, Clone)]
pub struct Release {
    /// Human-readable release title.
    pub title: String,
    /// Catalog article identifier.
    pub id: u64,
    /// Web page of the release.
    pub url: String,
    /// Publication timestamp, if the catalog provided one.
    pub published: Option<DateTime<Utc>>,
    /// Version tag parsed from the title.
    pub version: ReleaseVersion,
}

impl Release {
    /// Filesystem-safe directory name derived from the release title.
    pub fn dir_name(&self) -> String {
        sanitize_dir_name(&self.title)
    }
}

/// Sort releases newest first.
///
/// The sort is stable, so releases with equal versions (including all the
/// unversioned ones) keep their catalog order.
pub fn sort_newest_first(releases: &mut [Release]) {
    releases.sort_by(|a, b| b.version.cmp(&a.version));
}
