//! HTML parsing.
//!
//! [`Document`] wraps scraper's HTML5 tree. The tree builder is lenient: it
//! recovers from malformed markup instead of failing, and the recovered
//! problems are kept for logging.
//!
//! # Example
//!
//! ```rust
//! use glimpse_core::Document;
//!
//! let doc = Document::parse("<html><head><title>Test</title></head><body><p>Hi</p></body></html>").unwrap();
//! assert_eq!(doc.root().value().name(), "html");
//! ```

use scraper::{ElementRef, Html};
use tracing::debug;

use crate::Result;

/// A parsed HTML document.
///
/// Lives only for the duration of one extraction.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GlimpseError::HtmlParseError`] if no document tree
    /// could be built. With an HTML5 tree builder this is not expected for any
    /// string input.
    pub fn parse(html: &str) -> Result<Self> {
        let html = Html::parse_document(html);

        if !html.errors.is_empty() {
            debug!(recovered = html.errors.len(), "parser recovered from malformed markup");
        }

        Ok(Self { html })
    }

    /// Gets the underlying scraper document.
    pub fn html(&self) -> &Html {
        &self.html
    }

    /// The `<html>` root element. The tree builder always creates one.
    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    /// Problems the parser recovered from.
    pub fn parse_errors(&self) -> impl Iterator<Item = &str> {
        self.html.errors.iter().map(|e| &**e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HTML: &str = r#"
        <!DOCTYPE html>
        <html lang="en">
        <head>
            <meta charset="UTF-8">
            <title>Test Page</title>
        </head>
        <body>
            <h1>Heading</h1>
            <p>Paragraph</p>
        </body>
        </html>
    "#;

    #[test]
    fn test_parse_document() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        assert_eq!(doc.root().value().name(), "html");
    }

    #[test]
    fn test_parse_fragment_gets_full_tree() {
        let doc = Document::parse("<p>loose").unwrap();
        let names: Vec<_> = doc.root().descendants().filter_map(ElementRef::wrap).map(|e| e.value().name()).collect();
        assert_eq!(names, vec!["html", "head", "body", "p"]);
    }

    #[test]
    fn test_parse_malformed_recovers() {
        let doc = Document::parse("<html><body><p>unclosed <b>bold</p></i></body>").unwrap();
        assert!(doc.parse_errors().count() > 0);
        assert!(doc.html().root_element().text().collect::<String>().contains("bold"));
    }

    #[test]
    fn test_parse_empty_input() {
        let doc = Document::parse("").unwrap();
        assert_eq!(doc.root().value().name(), "html");
    }
}
