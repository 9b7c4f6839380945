//! # docsmd
//!
//! Translate between Markdown and Google Docs documents.
//!
//! Reading renders a fetched document tree as Markdown. Writing compiles
//! Markdown into a batch of positional edit operations (insert text, set
//! paragraph style, set text style) that a document service applies in
//! order.
//!
//! ## Quick Start
//!
//! ```
//! use docsmd::{compile, parse_document, render::to_markdown, RenderOptions};
//!
//! fn main() -> docsmd::Result<()> {
//!     let doc = parse_document(r#"{"title": "Notes", "body": {"content": []}}"#)?;
//!     assert_eq!(to_markdown(&doc, &RenderOptions::default()), "# Notes\n\n");
//!
//!     let ops = compile("# Hello\n**bold**", 1);
//!     assert_eq!(ops.len(), 4);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Renderer**: headings, bold/italic/link runs and tables to Markdown
//! - **Compiler**: headings and emphasis to edit operations, code-point indexed
//! - **Structure**: heading outline and section lookup
//! - **Editing**: validated edit batches applied through a [`DocumentService`]

pub mod color;
pub mod compile;
pub mod edit;
pub mod editor;
pub mod error;
pub mod index;
pub mod model;
pub mod ops;
pub mod render;
pub mod service;
pub mod structure;

// Re-export commonly used types
pub use compile::{compile, CompiledMarkdown, MarkdownCompiler};
pub use edit::{ListKind, SegmentKind, TextFormat};
pub use editor::{DocumentInfo, Editor, SegmentOutcome};
pub use error::{Error, Result};
pub use index::{rune_length, Location, Range, FIRST_INDEX};
pub use model::{
    Alignment, Block, Document, NamedStyle, Paragraph, ParagraphStyle, StructuralElement, Table,
    TableCell, TableRow, TextRun, TextStyle,
};
pub use ops::{BatchReply, EditOperation};
pub use render::{JsonFormat, RenderOptions};
pub use service::DocumentService;
pub use structure::{find_section, sections, Section};

/// Parse a document from the service's JSON representation.
///
/// # Example
///
/// ```
/// use docsmd::parse_document;
///
/// let doc = parse_document(r#"{"documentId": "abc", "title": "T"}"#).unwrap();
/// assert_eq!(doc.document_id, "abc");
/// ```
pub fn parse_document(json: &str) -> Result<Document> {
    let doc: Document = serde_json::from_str(json)?;
    log::debug!(
        "Parsed document {:?} with {} elements",
        doc.title,
        doc.elements().len()
    );
    Ok(doc)
}

/// Render a document given as service JSON straight to Markdown.
///
/// # Example
///
/// ```
/// use docsmd::{json_to_markdown, RenderOptions};
///
/// let md = json_to_markdown(r#"{"title": "T"}"#, &RenderOptions::new().with_title(false)).unwrap();
/// assert!(md.is_empty());
/// ```
pub fn json_to_markdown(json: &str, options: &RenderOptions) -> Result<String> {
    let doc = parse_document(json)?;
    Ok(render::to_markdown(&doc, options))
}

/// Compile Markdown and serialize the batch as a service request body.
///
/// # Example
///
/// ```
/// use docsmd::{markdown_to_request, JsonFormat};
///
/// let body = markdown_to_request("Hi", 1, JsonFormat::Compact).unwrap();
/// assert!(body.starts_with(r#"{"requests":[{"insertText""#));
/// ```
pub fn markdown_to_request(markdown: &str, start_index: i64, format: JsonFormat) -> Result<String> {
    let operations = compile(markdown, start_index);
    let request = ops::BatchRequest {
        requests: &operations,
    };
    render::to_json(&request, format)
}
