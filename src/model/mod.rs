//! Structured document model.
//!
//! These types mirror the JSON returned by the document service so a fetched
//! document deserializes directly. Every field the service may omit has a
//! default, and readers treat missing styling as "no styling applied".

mod document;
mod paragraph;
mod style;
mod table;

pub use document::{Block, Body, Document, DocumentStyle, Footer, Header, StructuralElement};
pub use paragraph::{NamedStyle, Paragraph, ParagraphElement, TextRun};
pub use style::{
    Alignment, Color, Dimension, Link, OptionalColor, ParagraphStyle, RgbColor, Size,
    TableCellStyle, TextStyle,
};
pub use table::{Table, TableCell, TableRow};
