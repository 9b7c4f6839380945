//! Body content replacement and insertion.

use crate::compile::MarkdownCompiler;
use crate::error::Result;
use crate::index::{Range, FIRST_INDEX};
use crate::model::Document;
use crate::ops::EditOperation;
use crate::structure::{require_section, section_body};

/// Replace the whole body with `markdown`.
///
/// The body's final newline cannot be deleted, so the deletion covers
/// `[1, end - 1)` and is skipped when that range is empty.
pub fn replace_body(doc: &Document, markdown: &str) -> Vec<EditOperation> {
    let mut batch = Vec::new();
    let end = doc.end_index();
    if end - 1 > FIRST_INDEX {
        batch.push(EditOperation::delete_range(Range::new(FIRST_INDEX, end - 1)));
    }
    batch.extend(MarkdownCompiler::new(FIRST_INDEX).compile(markdown).operations);
    batch
}

/// Insert `text` as its own paragraph right after the heading `section`.
///
/// A heading that ends the body is followed only by the segment end, where
/// nothing can be inserted, so the text goes before its newline instead.
pub fn insert_after_section(doc: &Document, section: &str, text: &str) -> Result<Vec<EditOperation>> {
    let section = require_section(doc, section)?;
    let at = if ends_body(doc, section.end_index) {
        section.end_index - 1
    } else {
        section.end_index
    };
    Ok(vec![EditOperation::insert_text(at, format!("\n{}\n", text))])
}

/// Replace the content under the heading `section` with `markdown`, keeping
/// the heading itself.
pub fn replace_section(doc: &Document, section: &str, markdown: &str) -> Result<Vec<EditOperation>> {
    let section = require_section(doc, section)?;

    let mut batch = Vec::new();
    if let Some(body) = section_body(doc, &section) {
        batch.push(EditOperation::delete_range(body));
    } else if ends_body(doc, section.end_index) {
        // Split off an empty paragraph after the heading to write into
        batch.push(EditOperation::insert_text(section.end_index - 1, "\n"));
    }
    // Deleting after the heading leaves its end index unchanged
    batch.extend(
        MarkdownCompiler::new(section.end_index)
            .compile(markdown)
            .operations,
    );
    Ok(batch)
}

fn ends_body(doc: &Document, index: i64) -> bool {
    index >= doc.end_index()
}

/// Delete `[start, end)`.
pub fn delete_range(start: i64, end: i64) -> Result<Vec<EditOperation>> {
    Ok(vec![EditOperation::delete_range(Range::checked(start, end)?)])
}

/// Insert an image by URI. A size is attached only when both dimensions are
/// positive.
pub fn insert_image(
    index: i64,
    uri: &str,
    width: Option<f64>,
    height: Option<f64>,
) -> Result<Vec<EditOperation>> {
    // Validates the index the same way as a one-unit range
    Range::checked(index, index + 1)?;

    let size = match (width, height) {
        (Some(w), Some(h)) if w > 0.0 && h > 0.0 => Some((w, h)),
        _ => None,
    };
    Ok(vec![EditOperation::inline_image(index, uri, size)])
}
