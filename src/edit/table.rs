//! Table insertion and cell edits.

use crate::color::require_color;
use crate::error::{Error, Result};
use crate::index::Range;
use crate::model::{Document, TableCell};
use crate::ops::EditOperation;

/// Insert an empty `rows` x `columns` table at `index`.
pub fn insert_table(index: i64, rows: u32, columns: u32) -> Result<Vec<EditOperation>> {
    if rows == 0 || columns == 0 {
        return Err(Error::InvalidTableSize { rows, columns });
    }
    Range::checked(index, index + 1)?;
    Ok(vec![EditOperation::create_table(index, rows, columns)])
}

/// Set the background colour of one cell of the table starting at
/// `table_start`.
pub fn style_table_cell(
    doc: &Document,
    table_start: i64,
    row: u32,
    column: u32,
    background: &str,
) -> Result<Vec<EditOperation>> {
    locate_cell(doc, table_start, row, column)?;
    let color = require_color(background)?;
    Ok(vec![EditOperation::cell_background(
        table_start,
        row,
        column,
        color,
    )])
}

/// Replace the text of one cell.
///
/// The cell's final newline is kept, so an already empty cell only gets the
/// insertion.
pub fn replace_table_cell(
    doc: &Document,
    table_start: i64,
    row: u32,
    column: u32,
    text: &str,
) -> Result<Vec<EditOperation>> {
    let cell = locate_cell(doc, table_start, row, column)?;
    let (start, end) = cell
        .content_bounds()
        .unwrap_or((cell.start_index + 1, cell.start_index + 2));

    let mut batch = Vec::new();
    if end - 1 > start {
        batch.push(EditOperation::delete_range(Range::new(start, end - 1)));
    }
    if !text.is_empty() {
        batch.push(EditOperation::insert_text(start, text));
    }
    Ok(batch)
}

fn locate_cell(doc: &Document, table_start: i64, row: u32, column: u32) -> Result<&TableCell> {
    let table = doc
        .table_at(table_start)
        .ok_or(Error::TableNotFound(table_start))?;

    let (row, column) = (row as usize, column as usize);
    let out_of_bounds = || Error::CellOutOfBounds {
        row,
        column,
        rows: table.row_count(),
        columns: table.column_count(),
    };

    if row >= table.row_count() || column >= table.column_count() {
        return Err(out_of_bounds());
    }
    table.cell(row, column).ok_or_else(out_of_bounds)
}
