#[cfg(feature = "fetch")]
pub mod browser;
pub mod error;
pub mod extract;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod history;
pub mod normalize;
pub mod parse;

#[cfg(feature = "fetch")]
pub use browser::{Browser, LOADING_STATUS};
pub use error::{ErrorKind, GlimpseError, Result};
pub use extract::{Block, Page, extract, extract_page, inner_text, render};
#[cfg(feature = "fetch")]
pub use fetch::{FetchConfig, fetch_file, fetch_stdin, fetch_url};
pub use history::History;
pub use normalize::{has_scheme, normalize_url};
pub use parse::Document;
