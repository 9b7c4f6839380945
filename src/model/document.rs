//! Document-level types.

use super::{Paragraph, Table, TableCell, TableRow};
use crate::index::{rune_length, FIRST_INDEX};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A document as returned by the document service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Service-assigned document id
    #[serde(default)]
    pub document_id: String,

    /// Document title
    #[serde(default)]
    pub title: String,

    /// Revision the snapshot was taken at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision_id: Option<String>,

    /// How suggestions are shown in this snapshot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions_view_mode: Option<String>,

    /// Main body content
    #[serde(default)]
    pub body: Body,

    /// Headers keyed by segment id
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, Header>,

    /// Footers keyed by segment id
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub footers: BTreeMap<String, Footer>,

    /// Document-wide style (default header/footer ids)
    #[serde(default)]
    pub document_style: DocumentStyle,
}

impl Document {
    /// Create a new empty document.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Body elements in document order.
    pub fn elements(&self) -> &[StructuralElement] {
        &self.body.content
    }

    /// Total length of the body: the last element's end index.
    pub fn end_index(&self) -> i64 {
        self.body
            .content
            .last()
            .map(|e| e.end_index)
            .unwrap_or(FIRST_INDEX)
            .max(FIRST_INDEX)
    }

    /// Check if the body has no content elements.
    pub fn is_empty(&self) -> bool {
        self.body.content.is_empty()
    }

    /// Append a paragraph, assigning its index range after the current end.
    pub fn push_paragraph(&mut self, paragraph: Paragraph) {
        let start = self.end_index();
        let end = start + rune_length(&paragraph.text());
        self.body
            .content
            .push(StructuralElement::paragraph(start, end, paragraph));
    }

    /// Append a table of plain-text cells, assigning index ranges the way the
    /// service lays them out: one unit opening the table, one per row, one
    /// per cell, the cell paragraphs, and one closing unit.
    pub fn push_table<R, C>(&mut self, rows: R)
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let start = self.end_index();
        let mut cursor = start + 1;
        let mut table_rows = Vec::new();

        for row in rows {
            let row_start = cursor;
            cursor += 1;
            let mut cells = Vec::new();
            for text in row {
                let cell_start = cursor;
                cursor += 1;
                let paragraph = Paragraph::with_text(text);
                let para_end = cursor + rune_length(&paragraph.text());
                let content = vec![StructuralElement::paragraph(cursor, para_end, paragraph)];
                cursor = para_end;
                cells.push(TableCell {
                    start_index: cell_start,
                    end_index: cursor,
                    content,
                    table_cell_style: None,
                });
            }
            table_rows.push(TableRow {
                start_index: row_start,
                end_index: cursor,
                table_cells: cells,
            });
        }

        let table = Table::from_rows(table_rows);
        self.body
            .content
            .push(StructuralElement::table(start, cursor + 1, table));
    }

    /// Find the table whose element starts at `start_index`.
    pub fn table_at(&self, start_index: i64) -> Option<&Table> {
        self.body
            .content
            .iter()
            .filter(|e| e.start_index == start_index)
            .find_map(|e| e.table.as_ref())
    }

    /// Id of the default header, if the document has one.
    pub fn default_header_id(&self) -> Option<&str> {
        self.document_style
            .default_header_id
            .as_deref()
            .or_else(|| self.headers.keys().next().map(String::as_str))
    }

    /// Id of the default footer, if the document has one.
    pub fn default_footer_id(&self) -> Option<&str> {
        self.document_style
            .default_footer_id
            .as_deref()
            .or_else(|| self.footers.keys().next().map(String::as_str))
    }
}

/// Document body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    /// Top-level elements in document order
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}

/// A header segment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    /// Segment id
    #[serde(default)]
    pub header_id: String,

    /// Header content
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}

/// A footer segment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    /// Segment id
    #[serde(default)]
    pub footer_id: String,

    /// Footer content
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}

/// Document-wide style settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentStyle {
    /// Id of the default header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_header_id: Option<String>,

    /// Id of the default footer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_footer_id: Option<String>,
}

/// A body element with its index range.
///
/// The service sets exactly one content field per element. Kinds other than
/// paragraphs and tables (section breaks, tables of contents) keep both
/// fields empty and are skipped by every reader.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuralElement {
    /// First index covered (absent on the leading section break)
    #[serde(default)]
    pub start_index: i64,

    /// First index not covered
    #[serde(default)]
    pub end_index: i64,

    /// Paragraph content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraph: Option<Paragraph>,

    /// Table content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<Table>,
}

/// Borrowed view of what a structural element holds.
#[derive(Debug, Clone, Copy)]
pub enum Block<'a> {
    /// A paragraph
    Paragraph(&'a Paragraph),
    /// A table
    Table(&'a Table),
    /// Anything else (section break, table of contents, ...)
    Other,
}

impl StructuralElement {
    /// Create a paragraph element.
    pub fn paragraph(start_index: i64, end_index: i64, paragraph: Paragraph) -> Self {
        Self {
            start_index,
            end_index,
            paragraph: Some(paragraph),
            table: None,
        }
    }

    /// Create a table element.
    pub fn table(start_index: i64, end_index: i64, table: Table) -> Self {
        Self {
            start_index,
            end_index,
            paragraph: None,
            table: Some(table),
        }
    }

    /// What this element holds.
    pub fn block(&self) -> Block<'_> {
        match (&self.paragraph, &self.table) {
            (Some(p), _) => Block::Paragraph(p),
            (None, Some(t)) => Block::Table(t),
            (None, None) => Block::Other,
        }
    }
}
