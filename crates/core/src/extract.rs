//! Reduction of a parsed document to its title, headings and paragraphs.
//!
//! The walk is a single pre-order pass over the tree. A sticky `in_body` flag
//! gates headings and paragraphs: it is raised at `<body>` and never lowered.
//! The HTML5 tree builder reparents anything that follows `</body>` back into
//! the body, so in practice the flag covers exactly the body subtree.
//!
//! # Example
//!
//! ```rust
//! use glimpse_core::{Block, extract};
//!
//! let page = extract("<title>T</title><h1>Hello <b>World</b></h1><p>text</p>").unwrap();
//! assert_eq!(page.title, "T");
//! assert_eq!(page.blocks[0], Block::Heading { level: 1, text: "Hello World".to_string() });
//! assert_eq!(page.blocks[1], Block::Paragraph("text".to_string()));
//! ```

use owo_colors::OwoColorize;
use scraper::ElementRef;
use tracing::debug;

use crate::Result;
use crate::parse::Document;

/// One piece of visible body content, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `h1`..`h6`, with its flattened inner text.
    Heading { level: u8, text: String },
    /// `p`, with its flattened inner text.
    Paragraph(String),
}

impl Block {
    /// The flattened text of the block.
    pub fn text(&self) -> &str {
        match self {
            Block::Heading { text, .. } | Block::Paragraph(text) => text,
        }
    }
}

/// The extracted page: document title plus body blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    /// Inner text of the last `<title>` seen, empty if there was none.
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Page {
    /// Renders the page for the terminal viewer.
    ///
    /// The title line is green and bold, headings are yellow and bold, and
    /// paragraphs carry no styling. Styling is emitted as ANSI SGR sequences.
    pub fn to_display(&self) -> String {
        self.compose(true)
    }

    /// Same layout as [`Page::to_display`] without any escape sequences.
    pub fn to_plain(&self) -> String {
        self.compose(false)
    }

    fn compose(&self, styled: bool) -> String {
        let mut out = String::new();

        let title_line = format!("Title: {}", self.title);
        if styled {
            out.push_str(&title_line.green().bold().to_string());
        } else {
            out.push_str(&title_line);
        }
        out.push_str("\n\n");

        for block in &self.blocks {
            out.push('\n');
            match block {
                Block::Heading { text, .. } if styled => out.push_str(&text.yellow().bold().to_string()),
                other => out.push_str(other.text()),
            }
            out.push('\n');
        }

        out
    }
}

/// Parses `html` and extracts its [`Page`].
pub fn extract(html: &str) -> Result<Page> {
    let doc = Document::parse(html)?;
    Ok(extract_page(&doc))
}

/// Parses `html` and returns the styled display string in one step.
pub fn render(html: &str) -> Result<String> {
    extract(html).map(|page| page.to_display())
}

/// Walks an already parsed document.
pub fn extract_page(doc: &Document) -> Page {
    let mut page = Page::default();
    let mut in_body = false;

    // descendants() is an iterative pre-order walk, deep documents cannot
    // exhaust the stack.
    for node in doc.root().descendants() {
        let Some(element) = ElementRef::wrap(node) else {
            continue;
        };

        match element.value().name() {
            "title" => page.title = inner_text(element),
            "body" => in_body = true,
            name @ ("h1" | "h2" | "h3" | "h4" | "h5" | "h6") if in_body => {
                page.blocks.push(Block::Heading { level: heading_level(name), text: inner_text(element) });
            }
            "p" if in_body => page.blocks.push(Block::Paragraph(inner_text(element))),
            _ => {}
        }
    }

    debug!(title = %page.title, blocks = page.blocks.len(), "extracted page");
    page
}

/// All descendant text nodes concatenated in document order, then trimmed.
pub fn inner_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn heading_level(name: &str) -> u8 {
    name.as_bytes().get(1).map_or(1, |digit| digit - b'0')
}
