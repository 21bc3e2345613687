//! Error types for the export pipeline and server client.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the library.
#[derive(Debug, Error)]
pub enum Error {
    /// An export file could not be written.
    #[error("failed to write export file {}", .path.display())]
    WriteExport {
        /// Destination that failed.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An HTTP request failed before a usable response arrived.
    #[error("request to {url} failed")]
    Http {
        /// Requested URL.
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("server returned HTTP {status} for {url}")]
    Status {
        /// Requested URL.
        url: String,
        /// Response status code.
        status: u16,
    },

    /// The response body was not the expected shape.
    #[error("unexpected response from {url}")]
    BadResponse {
        /// Requested URL.
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server base URL could not be joined with an endpoint path.
    #[error("invalid server URL")]
    BadUrl(#[from] url::ParseError),
}

/// Library result alias.
pub type Result<T> = std::result::Result<T, Error>;
