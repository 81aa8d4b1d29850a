//! Browsing session state.
//!
//! [`Browser`] is the context object a viewer owns and passes around. It holds
//! the display buffer, the current URL, the load history and the status line,
//! and runs the normalize → fetch → extract pipeline on [`Browser::load`].
//!
//! # Example
//!
//! ```rust,no_run
//! use glimpse_core::{Browser, FetchConfig};
//!
//! # async fn example() {
//! let mut browser = Browser::new(FetchConfig::default());
//! if browser.load("example.com").await.is_ok() {
//!     println!("{}", browser.display());
//! }
//! println!("{}", browser.status());
//! # }
//! ```

use tracing::{info, warn};

use crate::extract::extract;
use crate::fetch::{FetchConfig, fetch_url};
use crate::history::History;
use crate::normalize::normalize_url;
use crate::{ErrorKind, Result};

/// Status line text while a request is in flight.
pub const LOADING_STATUS: &str = "Loading...";

/// One viewer session.
#[derive(Debug, Default)]
pub struct Browser {
    config: FetchConfig,
    display: String,
    current_url: Option<String>,
    history: History,
    status: String,
}

impl Browser {
    pub fn new(config: FetchConfig) -> Self {
        Self { config, ..Default::default() }
    }

    /// Loads a page into the session.
    ///
    /// The input is normalized for the request only. On success the display
    /// buffer is replaced, the input as typed becomes current and is appended
    /// to the history, and the status reads `Loaded: <input>`.
    ///
    /// On a fetch failure only the status line changes. On a parse failure
    /// the display shows the parse error instead of content, but neither the
    /// current URL nor the history is touched. The error is returned in both
    /// cases so callers can react to it.
    pub async fn load(&mut self, input: &str) -> Result<()> {
        let url = normalize_url(input);
        self.status = LOADING_STATUS.to_string();

        let fetched = fetch_url(&url, &self.config).await;
        self.finish_load(input.to_string(), fetched)
    }

    /// Applies the outcome of a fetch to the session.
    pub fn finish_load(&mut self, url: String, fetched: Result<String>) -> Result<()> {
        let outcome = fetched.and_then(|body| extract(&body));

        match outcome {
            Ok(page) => {
                info!(%url, blocks = page.blocks.len(), "page loaded");
                self.display = page.to_display();
                self.status = format!("Loaded: {url}");
                self.history.push(url.clone());
                self.current_url = Some(url);
                Ok(())
            }
            Err(err) => {
                warn!(%url, error = %err, "page load failed");
                if err.kind() == ErrorKind::Parse {
                    self.display = format!("Error parsing HTML: {err}");
                }
                self.status = format!("Error: {err}");
                Err(err)
            }
        }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// The display buffer: the styled text of the last loaded page.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn current_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Overrides the status line, e.g. with a usage hint.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }
}
