//! URL normalization.

const HTTP: &str = "http://";
const HTTPS: &str = "https://";

/// Ensures a user-typed address carries an explicit scheme.
///
/// Inputs already starting with `http://` or `https://` come back unchanged;
/// anything else gets `https://` prepended. No trimming or host validation
/// happens here, a bad host is reported later by the fetcher.
///
/// ```rust
/// use glimpse_core::normalize_url;
///
/// assert_eq!(normalize_url("example.com/about"), "https://example.com/about");
/// assert_eq!(normalize_url("http://example.com"), "http://example.com");
/// ```
pub fn normalize_url(input: &str) -> String {
    if has_scheme(input) { input.to_string() } else { format!("{HTTPS}{input}") }
}

/// Whether the input starts with one of the two accepted scheme prefixes.
pub fn has_scheme(input: &str) -> bool {
    input.starts_with(HTTP) || input.starts_with(HTTPS)
}
