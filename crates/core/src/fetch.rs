//! Content fetching from URLs, files, and stdin.
//!
//! The viewer only ever calls [`fetch_url`]. The file and stdin readers back
//! the non-interactive dump mode of the command line tool.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use crate::{GlimpseError, Result};

/// HTTP client configuration for fetching web pages.
///
/// Both settings default to `None`, which leaves the client defaults in place:
/// no request timeout and no custom headers.
#[derive(Debug, Clone, Default)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: Option<u64>,
    /// Custom User-Agent string.
    pub user_agent: Option<String>,
}

/// Fetches a page and returns the full response body as text.
///
/// One GET request, no retries. Redirects follow the client default policy.
/// Non-success status codes are reported as [`GlimpseError::Status`]. The
/// response is consumed or dropped on every path, which releases the
/// connection.
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| GlimpseError::InvalidUrl(format!("{url}: {e}")))?;

    let mut builder = Client::builder();
    if let Some(secs) = config.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder.build().map_err(GlimpseError::HttpError)?;

    let mut request = client.get(parsed_url);
    if let Some(user_agent) = &config.user_agent {
        request = request.header(reqwest::header::USER_AGENT, user_agent);
    }

    debug!(%url, timeout = ?config.timeout, "sending request");
    let response = request.send().await.map_err(|e| map_transport_error(e, config))?;

    let status = response.status();
    if !status.is_success() {
        return Err(GlimpseError::Status { status: status.as_u16(), url: response.url().to_string() });
    }

    let content = response.text().await.map_err(|e| map_transport_error(e, config))?;
    info!(%url, status = status.as_u16(), bytes = content.len(), "fetched page");

    Ok(content)
}

fn map_transport_error(err: reqwest::Error, config: &FetchConfig) -> GlimpseError {
    match config.timeout {
        Some(timeout) if err.is_timeout() => GlimpseError::Timeout { timeout },
        _ => GlimpseError::HttpError(err),
    }
}

/// Reads HTML content from a local file.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(GlimpseError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(GlimpseError::from)
    }
}

/// Reads HTML content from standard input until EOF.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(GlimpseError::from)?;

    Ok(buffer)
}
