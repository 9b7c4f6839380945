//! Edit-batch builders.
//!
//! Each builder validates its arguments (and, where needed, the already
//! fetched document) and returns the complete batch, or an error before any
//! operation exists. Builders never talk to the document service.

mod content;
mod formatting;
mod segment;
mod table;

pub use content::{delete_range, insert_after_section, insert_image, replace_body, replace_section};
pub use formatting::{align_paragraph, create_list, format_text, remove_list, ListKind, TextFormat};
pub use segment::{footer_text, header_text, SegmentKind};
pub use table::{insert_table, replace_table_cell, style_table_cell};
