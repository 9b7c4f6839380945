//! Character, paragraph and list formatting.

use crate::color::require_color;
use crate::error::{Error, Result};
use crate::index::Range;
use crate::model::{Alignment, Dimension, TextStyle};
use crate::ops::EditOperation;

/// Character formatting requested for a range.
///
/// Only options that are set end up in the update; `false` means "leave
/// alone", not "turn off".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFormat {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,

    /// Foreground colour as `RRGGBB` or `#RRGGBB`
    pub color: Option<String>,

    /// Font size in points; non-positive sizes are ignored
    pub size: Option<f64>,
}

impl TextFormat {
    /// Whether no option is set.
    pub fn is_empty(&self) -> bool {
        !self.bold
            && !self.italic
            && !self.underline
            && self.color.is_none()
            && self.font_size().is_none()
    }

    fn font_size(&self) -> Option<f64> {
        self.size.filter(|size| *size > 0.0)
    }

    /// Convert to a service text style, parsing the colour.
    pub fn to_text_style(&self) -> Result<TextStyle> {
        let foreground_color = self.color.as_deref().map(require_color).transpose()?;

        Ok(TextStyle {
            bold: self.bold.then_some(true),
            italic: self.italic.then_some(true),
            underline: self.underline.then_some(true),
            foreground_color,
            font_size: self.font_size().map(Dimension::points),
            link: None,
        })
    }
}

/// List flavour for [`create_list`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet,
    Numbered,
}

impl ListKind {
    /// Service preset name.
    pub fn preset(self) -> &'static str {
        match self {
            ListKind::Bullet => "BULLET_DISC_CIRCLE_SQUARE",
            ListKind::Numbered => "NUMBERED_DECIMAL_ALPHA_ROMAN",
        }
    }
}

/// Apply character formatting to `[start, end)`.
pub fn format_text(start: i64, end: i64, format: &TextFormat) -> Result<Vec<EditOperation>> {
    let range = Range::checked(start, end)?;
    if format.is_empty() {
        return Err(Error::NoFormatting);
    }
    let style = format.to_text_style()?;
    Ok(vec![EditOperation::text_style(range, style)])
}

/// Align the paragraphs overlapping `[start, end)`.
pub fn align_paragraph(start: i64, end: i64, alignment: &str) -> Result<Vec<EditOperation>> {
    let range = Range::checked(start, end)?;
    let alignment: Alignment = alignment.parse()?;
    Ok(vec![EditOperation::align(range, alignment)])
}

/// Turn the paragraphs overlapping `[start, end)` into list items.
pub fn create_list(start: i64, end: i64, kind: ListKind) -> Result<Vec<EditOperation>> {
    let range = Range::checked(start, end)?;
    Ok(vec![EditOperation::create_bullets(range, kind.preset())])
}

/// Remove list formatting from `[start, end)`.
pub fn remove_list(start: i64, end: i64) -> Result<Vec<EditOperation>> {
    let range = Range::checked(start, end)?;
    Ok(vec![EditOperation::delete_bullets(range)])
}
