//! Edit operations and batch replies.
//!
//! An [`EditOperation`] serializes to one entry of the service's batch
//! request (`{"insertText": {...}}` and so on). A batch is a plain
//! `Vec<EditOperation>` applied in order.

use crate::index::{Location, Range};
use crate::model::{
    Alignment, Dimension, NamedStyle, OptionalColor, ParagraphStyle, Size, TableCellStyle,
    TextStyle,
};
use serde::{Deserialize, Serialize};

/// One positional edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EditOperation {
    /// Insert literal text at a location.
    InsertText(InsertText),
    /// Delete a half-open range.
    #[serde(rename = "deleteContentRange")]
    DeleteRange(DeleteRange),
    /// Set named style or alignment on the paragraphs overlapping a range.
    #[serde(rename = "updateParagraphStyle")]
    SetParagraphStyle(SetParagraphStyle),
    /// Set character style on a range.
    #[serde(rename = "updateTextStyle")]
    SetTextStyle(SetTextStyle),
    /// Set style on a table cell.
    #[serde(rename = "updateTableCellStyle")]
    SetTableCellStyle(SetTableCellStyle),
    /// Insert an empty table.
    #[serde(rename = "insertTable")]
    CreateTable(CreateTable),
    /// Insert an image by URI.
    InsertInlineImage(InsertInlineImage),
    /// Turn paragraphs into list items.
    CreateParagraphBullets(CreateParagraphBullets),
    /// Remove list formatting from paragraphs.
    DeleteParagraphBullets(DeleteParagraphBullets),
    /// Create the default header.
    CreateHeader(CreateSegment),
    /// Create the default footer.
    CreateFooter(CreateSegment),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertText {
    pub location: Location,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRange {
    pub range: Range,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetParagraphStyle {
    pub range: Range,
    pub paragraph_style: ParagraphStyle,
    pub fields: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetTextStyle {
    pub range: Range,
    pub text_style: TextStyle,
    pub fields: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetTableCellStyle {
    pub table_range: TableRange,
    pub table_cell_style: TableCellStyle,
    pub fields: String,
}

/// A rectangular block of cells anchored at a table's start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRange {
    pub table_cell_location: TableCellLocation,
    pub row_span: u32,
    pub column_span: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCellLocation {
    pub table_start_location: Location,
    pub row_index: u32,
    pub column_index: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTable {
    pub location: Location,
    pub rows: u32,
    pub columns: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertInlineImage {
    pub location: Location,
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_size: Option<Size>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateParagraphBullets {
    pub range: Range,
    pub bullet_preset: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteParagraphBullets {
    pub range: Range,
}

/// Header/footer creation. Only the default segment type is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSegment {
    #[serde(rename = "type")]
    pub kind: String,
}

impl Default for CreateSegment {
    fn default() -> Self {
        Self {
            kind: "DEFAULT".to_string(),
        }
    }
}

impl EditOperation {
    /// Insert `text` at a body index.
    pub fn insert_text(index: i64, text: impl Into<String>) -> Self {
        Self::insert_text_at(Location::new(index), text)
    }

    /// Insert `text` at an arbitrary location.
    pub fn insert_text_at(location: Location, text: impl Into<String>) -> Self {
        EditOperation::InsertText(InsertText {
            location,
            text: text.into(),
        })
    }

    /// Delete `range`.
    pub fn delete_range(range: Range) -> Self {
        EditOperation::DeleteRange(DeleteRange { range })
    }

    /// Apply a named paragraph style over `range`.
    pub fn named_style(range: Range, style: NamedStyle) -> Self {
        Self::paragraph_style(range, ParagraphStyle::named(style))
    }

    /// Apply a heading style over `range`.
    pub fn heading(range: Range, level: u8) -> Self {
        Self::named_style(range, NamedStyle::Heading(level))
    }

    /// Align the paragraphs overlapping `range`.
    pub fn align(range: Range, alignment: Alignment) -> Self {
        Self::paragraph_style(range, ParagraphStyle::aligned(alignment))
    }

    /// Apply a paragraph style; the field mask is derived from what is set.
    pub fn paragraph_style(range: Range, style: ParagraphStyle) -> Self {
        let fields = style.field_mask();
        EditOperation::SetParagraphStyle(SetParagraphStyle {
            range,
            paragraph_style: style,
            fields,
        })
    }

    /// Apply a text style; the field mask is derived from what is set.
    pub fn text_style(range: Range, style: TextStyle) -> Self {
        let fields = style.field_mask();
        EditOperation::SetTextStyle(SetTextStyle {
            range,
            text_style: style,
            fields,
        })
    }

    /// Set the background of a single cell.
    pub fn cell_background(
        table_start: i64,
        row: u32,
        column: u32,
        color: OptionalColor,
    ) -> Self {
        let style = TableCellStyle {
            background_color: Some(color),
        };
        let fields = style.field_mask();
        EditOperation::SetTableCellStyle(SetTableCellStyle {
            table_range: TableRange {
                table_cell_location: TableCellLocation {
                    table_start_location: Location::new(table_start),
                    row_index: row,
                    column_index: column,
                },
                row_span: 1,
                column_span: 1,
            },
            table_cell_style: style,
            fields,
        })
    }

    /// Insert an empty `rows` x `columns` table.
    pub fn create_table(index: i64, rows: u32, columns: u32) -> Self {
        EditOperation::CreateTable(CreateTable {
            location: Location::new(index),
            rows,
            columns,
        })
    }

    /// Insert an image, optionally sized in points.
    pub fn inline_image(index: i64, uri: impl Into<String>, size: Option<(f64, f64)>) -> Self {
        EditOperation::InsertInlineImage(InsertInlineImage {
            location: Location::new(index),
            uri: uri.into(),
            object_size: size.map(|(width, height)| Size {
                height: Dimension::points(height),
                width: Dimension::points(width),
            }),
        })
    }

    /// Bullet or number the paragraphs overlapping `range`.
    pub fn create_bullets(range: Range, preset: impl Into<String>) -> Self {
        EditOperation::CreateParagraphBullets(CreateParagraphBullets {
            range,
            bullet_preset: preset.into(),
        })
    }

    /// Remove list formatting from the paragraphs overlapping `range`.
    pub fn delete_bullets(range: Range) -> Self {
        EditOperation::DeleteParagraphBullets(DeleteParagraphBullets { range })
    }

    pub fn create_header() -> Self {
        EditOperation::CreateHeader(CreateSegment::default())
    }

    pub fn create_footer() -> Self {
        EditOperation::CreateFooter(CreateSegment::default())
    }

    /// Range addressed by this operation, when it addresses one.
    pub fn range(&self) -> Option<&Range> {
        match self {
            EditOperation::DeleteRange(op) => Some(&op.range),
            EditOperation::SetParagraphStyle(op) => Some(&op.range),
            EditOperation::SetTextStyle(op) => Some(&op.range),
            EditOperation::CreateParagraphBullets(op) => Some(&op.range),
            EditOperation::DeleteParagraphBullets(op) => Some(&op.range),
            _ => None,
        }
    }

    /// Text inserted by this operation, if it is an insertion.
    pub fn inserted_text(&self) -> Option<&str> {
        match self {
            EditOperation::InsertText(op) => Some(&op.text),
            _ => None,
        }
    }
}

/// Body of a batch request.
#[derive(Debug, Clone, Serialize)]
pub struct BatchRequest<'a> {
    pub requests: &'a [EditOperation],
}

/// Reply to an applied batch, one entry per operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReply {
    #[serde(default)]
    pub document_id: String,

    #[serde(default)]
    pub replies: Vec<Reply>,
}

impl BatchReply {
    /// Id of a header created by this batch.
    pub fn created_header_id(&self) -> Option<&str> {
        self.replies
            .iter()
            .find_map(|r| r.create_header.as_ref())
            .map(|h| h.header_id.as_str())
    }

    /// Id of a footer created by this batch.
    pub fn created_footer_id(&self) -> Option<&str> {
        self.replies
            .iter()
            .find_map(|r| r.create_footer.as_ref())
            .map(|f| f.footer_id.as_str())
    }
}

/// Per-operation reply. Only replies carrying ids are modelled; the service
/// sends `{}` for the rest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_header: Option<CreatedHeader>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_footer: Option<CreatedFooter>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedHeader {
    #[serde(default)]
    pub header_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedFooter {
    #[serde(default)]
    pub footer_id: String,
}
