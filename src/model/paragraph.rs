//! Paragraph and text-level types.

use super::{ParagraphStyle, TextStyle};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A paragraph of text content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    /// Inline elements in the paragraph
    #[serde(default)]
    pub elements: Vec<ParagraphElement>,

    /// Paragraph style
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraph_style: Option<ParagraphStyle>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with plain text. A terminating newline is added
    /// when missing, as every paragraph in the service model ends with one.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut text = text.into();
        if !text.ends_with('\n') {
            text.push('\n');
        }
        let mut p = Self::new();
        p.add_run(TextRun::new(text));
        p
    }

    /// Create a heading paragraph.
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        Self::with_text(text).with_style(NamedStyle::Heading(level))
    }

    /// Set the named style and return self.
    pub fn with_style(mut self, style: NamedStyle) -> Self {
        self.paragraph_style
            .get_or_insert_with(ParagraphStyle::default)
            .named_style_type = Some(style);
        self
    }

    /// Add a styled text run.
    pub fn add_run(&mut self, run: TextRun) {
        self.elements.push(ParagraphElement {
            text_run: Some(run),
            ..Default::default()
        });
    }

    /// Text runs in order, skipping non-text elements.
    pub fn runs(&self) -> impl Iterator<Item = &TextRun> {
        self.elements.iter().filter_map(|e| e.text_run.as_ref())
    }

    /// Raw concatenation of every run, including the terminating newline.
    pub fn text(&self) -> String {
        self.runs().map(|r| r.content.as_str()).collect()
    }

    /// Concatenated run text with surrounding whitespace trimmed.
    pub fn plain_text(&self) -> String {
        self.text().trim().to_string()
    }

    /// The named style, if any.
    pub fn named_style(&self) -> Option<&NamedStyle> {
        self.paragraph_style
            .as_ref()
            .and_then(|s| s.named_style_type.as_ref())
    }

    /// Heading level (1-6) or None for any other style.
    pub fn heading_level(&self) -> Option<u8> {
        match self.named_style() {
            Some(NamedStyle::Heading(level)) if (1..=6).contains(level) => Some(*level),
            _ => None,
        }
    }

    /// Check if this is a heading.
    pub fn is_heading(&self) -> bool {
        self.heading_level().is_some()
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.text().trim().is_empty()
    }
}

/// An inline element of a paragraph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphElement {
    /// First index covered
    #[serde(default)]
    pub start_index: i64,

    /// First index not covered
    #[serde(default)]
    pub end_index: i64,

    /// Text content, absent for inline objects, page breaks and the like
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_run: Option<TextRun>,
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    /// The text content
    #[serde(default)]
    pub content: String,

    /// Text styling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
}

impl TextRun {
    /// Create a new text run with default style.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            text_style: None,
        }
    }

    /// Create a text run with the given style.
    pub fn styled(content: impl Into<String>, style: TextStyle) -> Self {
        Self {
            content: content.into(),
            text_style: Some(style),
        }
    }

    /// Create a bold text run.
    pub fn bold(content: impl Into<String>) -> Self {
        Self::styled(content, TextStyle::bold())
    }

    /// Create an italic text run.
    pub fn italic(content: impl Into<String>) -> Self {
        Self::styled(content, TextStyle::italic())
    }

    /// Create a hyperlinked text run.
    pub fn link(content: impl Into<String>, url: impl Into<String>) -> Self {
        Self::styled(content, TextStyle::link(url))
    }

    /// Style of this run, or the empty style.
    pub fn style(&self) -> TextStyle {
        self.text_style.clone().unwrap_or_default()
    }
}

/// Paragraph-level named style tag.
///
/// Unknown tags are kept verbatim so they pass through to the service
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NamedStyle {
    /// `NORMAL_TEXT`
    NormalText,
    /// `TITLE`
    Title,
    /// `SUBTITLE`
    Subtitle,
    /// `HEADING_<n>`
    Heading(u8),
    /// Any other tag
    Other(String),
}

impl From<String> for NamedStyle {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "NORMAL_TEXT" => NamedStyle::NormalText,
            "TITLE" => NamedStyle::Title,
            "SUBTITLE" => NamedStyle::Subtitle,
            _ => match tag.strip_prefix("HEADING_").map(str::parse::<u8>) {
                Some(Ok(level)) => NamedStyle::Heading(level),
                _ => NamedStyle::Other(tag),
            },
        }
    }
}

impl From<&str> for NamedStyle {
    fn from(tag: &str) -> Self {
        NamedStyle::from(tag.to_string())
    }
}

impl From<NamedStyle> for String {
    fn from(style: NamedStyle) -> Self {
        style.to_string()
    }
}

impl fmt::Display for NamedStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamedStyle::NormalText => f.write_str("NORMAL_TEXT"),
            NamedStyle::Title => f.write_str("TITLE"),
            NamedStyle::Subtitle => f.write_str("SUBTITLE"),
            NamedStyle::Heading(level) => write!(f, "HEADING_{}", level),
            NamedStyle::Other(tag) => f.write_str(tag),
        }
    }
}
