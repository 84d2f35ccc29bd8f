//! Error handling for the depfetch library.
//!
//! All fallible internals funnel into the [`Error`] enum. The public
//! surfaces deliberately do not propagate most of these: the catalog fails
//! soft (empty result plus a logged diagnostic) and the downloader converts
//! every failure into a per-file [`Status::Fail`] entry.
//!
//! [`Status::Fail`]: crate::download::Status::Fail

use std::io;
use thiserror::Error;

/// Errors that can happen when using depfetch.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from the underlying URL parser or the expected URL format.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// I/O Error.
    #[error("I/O error")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Error from the Reqwest library.
    #[error("HTTP error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    /// Error raised by the HTTP middleware stack.
    #[error("HTTP middleware error")]
    Middleware {
        #[from]
        source: reqwest_middleware::Error,
    },

    /// The portal file listing could not be parsed as CSV.
    #[error("file listing error")]
    Csv {
        #[from]
        source: csv::Error,
    },
}

/// Result type alias for operations that can fail with a depfetch [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
