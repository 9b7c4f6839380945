//! Table types.

use super::{Block, StructuralElement, TableCellStyle};
use serde::{Deserialize, Serialize};

/// A table structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Row count reported by the service
    #[serde(default)]
    pub rows: i64,

    /// Column count reported by the service
    #[serde(default)]
    pub columns: i64,

    /// Rows in the table
    #[serde(default)]
    pub table_rows: Vec<TableRow>,
}

impl Table {
    /// Create a table from rows, deriving the reported dimensions.
    pub fn from_rows(table_rows: Vec<TableRow>) -> Self {
        let columns = table_rows
            .first()
            .map(|r| r.table_cells.len())
            .unwrap_or(0);
        Self {
            rows: table_rows.len() as i64,
            columns: columns as i64,
            table_rows,
        }
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.table_rows.len()
    }

    /// Get the number of columns (based on first row).
    pub fn column_count(&self) -> usize {
        self.table_rows
            .first()
            .map(|r| r.table_cells.len())
            .unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.table_rows.is_empty()
    }

    /// Get a cell by row and column.
    pub fn cell(&self, row: usize, column: usize) -> Option<&TableCell> {
        self.table_rows.get(row)?.table_cells.get(column)
    }
}

/// A table row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    /// First index covered
    #[serde(default)]
    pub start_index: i64,

    /// First index not covered
    #[serde(default)]
    pub end_index: i64,

    /// Cells in the row
    #[serde(default)]
    pub table_cells: Vec<TableCell>,
}

/// A table cell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    /// First index covered
    #[serde(default)]
    pub start_index: i64,

    /// First index not covered
    #[serde(default)]
    pub end_index: i64,

    /// Cell content (usually a single paragraph)
    #[serde(default)]
    pub content: Vec<StructuralElement>,

    /// Cell style
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_cell_style: Option<TableCellStyle>,
}

impl TableCell {
    /// Trimmed concatenation of the cell's paragraph text, newlines folded
    /// to spaces. Styling is not reproduced.
    pub fn plain_text(&self) -> String {
        let text: String = self
            .content
            .iter()
            .filter_map(|e| match e.block() {
                Block::Paragraph(p) => Some(p.plain_text()),
                _ => None,
            })
            .collect();
        text.replace('\n', " ").trim().to_string()
    }

    /// Start of the first content element and end of the last one.
    pub fn content_bounds(&self) -> Option<(i64, i64)> {
        let first = self.content.first()?;
        let last = self.content.last()?;
        Some((first.start_index, last.end_index))
    }

    /// Check if the cell is empty.
    pub fn is_empty(&self) -> bool {
        self.plain_text().is_empty()
    }
}
