//! Heading-based document structure.
//!
//! Sections are a read-only projection recomputed from each fetched
//! document; nothing here mutates or caches it.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::index::Range;
use crate::model::{Block, Document, NamedStyle};

/// A heading and its index range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Heading text, trimmed
    pub title: String,

    /// Heading level (1-6)
    pub level: u8,

    /// Start of the heading paragraph
    pub start_index: i64,

    /// End of the heading paragraph (exclusive)
    pub end_index: i64,
}

impl Section {
    /// Range of the heading paragraph itself.
    pub fn range(&self) -> Range {
        Range::new(self.start_index, self.end_index)
    }
}

/// Every heading paragraph of the body, in document order.
pub fn sections(doc: &Document) -> Vec<Section> {
    let mut sections = Vec::new();

    for element in doc.elements() {
        let Block::Paragraph(para) = element.block() else {
            continue;
        };

        match para.heading_level() {
            Some(level) => sections.push(Section {
                title: para.plain_text(),
                level,
                start_index: element.start_index,
                end_index: element.end_index,
            }),
            None => {
                if let Some(NamedStyle::Heading(level)) = para.named_style() {
                    log::warn!(
                        "Ignoring heading with unsupported level {} at index {}",
                        level,
                        element.start_index
                    );
                }
            }
        }
    }

    sections
}

/// First section whose title equals `name`, ignoring case.
pub fn find_section(doc: &Document, name: &str) -> Option<Section> {
    sections(doc)
        .into_iter()
        .find(|s| equal_fold(&s.title, name))
}

/// Unicode case-insensitive equality. Final sigma folds with sigma.
fn equal_fold(a: &str, b: &str) -> bool {
    fn fold(s: &str) -> impl Iterator<Item = char> + '_ {
        s.chars()
            .flat_map(char::to_lowercase)
            .map(|c| if c == 'ς' { 'σ' } else { c })
    }
    fold(a).eq(fold(b))
}

/// Like [`find_section`], but reports a missing section as an error.
pub fn require_section(doc: &Document, name: &str) -> Result<Section> {
    find_section(doc, name).ok_or_else(|| Error::SectionNotFound(name.to_string()))
}

/// Content owned by `section`: from the end of its heading up to the next
/// heading of the same or higher rank, or to the end of the body. The
/// body's final newline is never included. `None` when the section has no
/// content.
pub fn section_body(doc: &Document, section: &Section) -> Option<Range> {
    let end = sections(doc)
        .into_iter()
        .filter(|s| s.start_index > section.start_index && s.level <= section.level)
        .map(|s| s.start_index)
        .next()
        .unwrap_or_else(|| doc.end_index() - 1);

    (end > section.end_index).then(|| Range::new(section.end_index, end))
}
