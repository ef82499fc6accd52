//! Inline markdown for alert text.
//!
//! Supports the subset used by alert bodies: `**bold**`, `[label](url)` links,
//! and backslash escapes of `\ * [ ] ( )`. Unclosed markup is rendered literally.
//!
//! # Example
//!
//! ```
//! use alertkit_core::{Color, Font, TextAlignment};
//! use alertkit_markup::{parse_markdown, MarkdownAttributeSet, MarkdownAttributes};
//!
//! let body = MarkdownAttributeSet::new(Font::regular(13.0), Color::BLACK);
//! let bold = MarkdownAttributeSet::new(Font::semibold(13.0), Color::BLACK);
//! let attributes = MarkdownAttributes::new(body, bold, body);
//! let text = parse_markdown("Win **Premium**", &attributes, TextAlignment::Center);
//! assert_eq!(text.runs().len(), 2);
//! ```

mod lexer;

use std::fmt;

pub use lexer::{tokenize, Inline, ESCAPABLE};

use alertkit_core::{AttributedText, Color, Font, TextAlignment, TextAttributes};

/// Font and color for one class of run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkdownAttributeSet {
    pub font: Font,
    pub color: Color,
}

impl MarkdownAttributeSet {
    pub fn new(font: Font, color: Color) -> Self {
        Self { font, color }
    }
}

/// Style rules for body, bold, and link runs.
#[derive(Clone, Copy)]
pub struct MarkdownAttributes {
    pub body: MarkdownAttributeSet,
    pub bold: MarkdownAttributeSet,
    pub link: MarkdownAttributeSet,
    /// Maps a link target to the value stored on the run; `None` leaves the run inert.
    pub link_attribute: fn(&str) -> Option<String>,
}

impl MarkdownAttributes {
    /// Style rules whose links are rendered but not active.
    pub fn new(body: MarkdownAttributeSet, bold: MarkdownAttributeSet, link: MarkdownAttributeSet) -> Self {
        Self {
            body,
            bold,
            link,
            link_attribute: |_| None,
        }
    }

    pub fn with_link_attribute(mut self, link_attribute: fn(&str) -> Option<String>) -> Self {
        self.link_attribute = link_attribute;
        self
    }
}

impl fmt::Debug for MarkdownAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkdownAttributes")
            .field("body", &self.body)
            .field("bold", &self.bold)
            .field("link", &self.link)
            .finish_non_exhaustive()
    }
}

/// Parse inline markdown into attributed text.
pub fn parse_markdown(text: &str, attributes: &MarkdownAttributes, alignment: TextAlignment) -> AttributedText {
    let mut result = AttributedText::empty(alignment);
    let run = |set: &MarkdownAttributeSet| TextAttributes::new(set.font, set.color);

    for item in tokenize(text) {
        match item {
            Inline::Text(s) => result.push(s, run(&attributes.body)),
            Inline::Bold(s) => result.push(s, run(&attributes.bold)),
            Inline::Link { label, url } => {
                let mut link = run(&attributes.link);
                link.link = (attributes.link_attribute)(url);
                result.push(label, link);
            }
        }
    }

    result
}
