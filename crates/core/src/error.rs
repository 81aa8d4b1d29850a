//! Error types for glimpse operations.
//!
//! All failures surface as a single [`GlimpseError`]. The viewer only needs
//! to know which broad family a failure belongs to, so every variant maps to
//! an [`ErrorKind`].
//!
//! # Example
//!
//! ```rust
//! use glimpse_core::{ErrorKind, GlimpseError};
//!
//! let err = GlimpseError::InvalidUrl("empty host".to_string());
//! assert_eq!(err.kind(), ErrorKind::Fetch);
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fetching and extraction.
#[derive(Error, Debug)]
pub enum GlimpseError {
    /// HTTP transport errors from reqwest.
    ///
    /// Covers DNS failures, refused connections, TLS problems and body
    /// read failures.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// Request timeout.
    ///
    /// Only possible when a timeout was configured; the default is unbounded.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// The URL could not be parsed after normalization.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The document could not be turned into a tree.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// Local input file is missing.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Reading local input failed.
    #[error("Failed to read input: {0}")]
    ReadError(#[from] std::io::Error),
}

/// Broad family of a [`GlimpseError`].
///
/// The viewer reports fetch failures on the status line and parse failures in
/// place of page content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Fetch,
    Parse,
    Io,
}

impl GlimpseError {
    /// Returns the family this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            #[cfg(feature = "fetch")]
            GlimpseError::HttpError(_) => ErrorKind::Fetch,
            GlimpseError::Status { .. } | GlimpseError::Timeout { .. } | GlimpseError::InvalidUrl(_) => {
                ErrorKind::Fetch
            }
            GlimpseError::HtmlParseError(_) => ErrorKind::Parse,
            GlimpseError::FileNotFound(_) | GlimpseError::ReadError(_) => ErrorKind::Io,
        }
    }
}

/// Result type alias for GlimpseError.
pub type Result<T> = std::result::Result<T, GlimpseError>;
