//! Document commands.
//!
//! Each command fetches what it needs, builds the full batch locally, and
//! only then applies it. Validation failures therefore never reach the
//! service, and a command either applies its whole batch or nothing.

use serde::{Deserialize, Serialize};

use crate::edit::{self, ListKind, SegmentKind, TextFormat};
use crate::error::{Error, Result};
use crate::model::Document;
use crate::ops::{BatchReply, EditOperation};
use crate::render::{to_markdown, RenderOptions};
use crate::service::DocumentService;
use crate::structure::{sections, Section};

/// Summary metadata of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInfo {
    pub document_id: String,
    pub title: String,
    pub revision_id: Option<String>,
    pub suggestions_view_mode: Option<String>,
}

impl From<&Document> for DocumentInfo {
    fn from(doc: &Document) -> Self {
        Self {
            document_id: doc.document_id.clone(),
            title: doc.title.clone(),
            revision_id: doc.revision_id.clone(),
            suggestions_view_mode: doc.suggestions_view_mode.clone(),
        }
    }
}

/// Result of writing header or footer text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentOutcome {
    /// Id of the segment written to
    pub segment_id: String,

    /// Whether the segment had to be created first
    pub created: bool,
}

/// Runs commands against a [`DocumentService`].
pub struct Editor<S> {
    service: S,
}

impl<S: DocumentService> Editor<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// The underlying service.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Create an empty document, optionally filed into a folder.
    pub fn create(&self, title: &str, folder_id: Option<&str>) -> Result<Document> {
        let doc = self.service.create_document(title)?;
        log::debug!("Created document {} ({:?})", doc.document_id, doc.title);
        if let Some(folder_id) = folder_id {
            self.service.add_to_folder(&doc.document_id, folder_id)?;
            log::debug!("Added {} to folder {}", doc.document_id, folder_id);
        }
        Ok(doc)
    }

    /// Copy a document under a new title.
    pub fn copy(&self, document_id: &str, title: &str, folder_id: Option<&str>) -> Result<Document> {
        let doc = self.service.copy_document(document_id, title, folder_id)?;
        log::debug!("Copied {} to {} ({:?})", document_id, doc.document_id, doc.title);
        Ok(doc)
    }

    /// Fetch a document.
    pub fn fetch(&self, document_id: &str) -> Result<Document> {
        let doc = self.service.fetch_document(document_id)?;
        log::debug!(
            "Fetched document {} with {} elements, end index {}",
            document_id,
            doc.elements().len(),
            doc.end_index()
        );
        Ok(doc)
    }

    pub fn info(&self, document_id: &str) -> Result<DocumentInfo> {
        let doc = self.fetch(document_id)?;
        Ok(DocumentInfo::from(&doc))
    }

    /// Render a document as Markdown.
    pub fn read(&self, document_id: &str, options: &RenderOptions) -> Result<String> {
        let doc = self.fetch(document_id)?;
        Ok(to_markdown(&doc, options))
    }

    /// Heading outline of a document.
    pub fn structure(&self, document_id: &str) -> Result<Vec<Section>> {
        let doc = self.fetch(document_id)?;
        Ok(sections(&doc))
    }

    /// Replace the whole body with Markdown. Returns the number of
    /// operations applied.
    pub fn set_markdown(&self, document_id: &str, markdown: &str) -> Result<usize> {
        let doc = self.fetch(document_id)?;
        self.apply(document_id, edit::replace_body(&doc, markdown))
    }

    /// Replace the content of a section with Markdown.
    pub fn update_section(&self, document_id: &str, section: &str, markdown: &str) -> Result<usize> {
        let doc = self.fetch(document_id)?;
        self.apply(document_id, edit::replace_section(&doc, section, markdown)?)
    }

    /// Insert a paragraph right after a section heading.
    pub fn insert_after(&self, document_id: &str, section: &str, text: &str) -> Result<usize> {
        let doc = self.fetch(document_id)?;
        self.apply(document_id, edit::insert_after_section(&doc, section, text)?)
    }

    pub fn delete_text(&self, document_id: &str, start: i64, end: i64) -> Result<usize> {
        self.apply(document_id, edit::delete_range(start, end)?)
    }

    pub fn format_text(
        &self,
        document_id: &str,
        start: i64,
        end: i64,
        format: &TextFormat,
    ) -> Result<usize> {
        self.apply(document_id, edit::format_text(start, end, format)?)
    }

    pub fn align_paragraph(
        &self,
        document_id: &str,
        start: i64,
        end: i64,
        alignment: &str,
    ) -> Result<usize> {
        self.apply(document_id, edit::align_paragraph(start, end, alignment)?)
    }

    pub fn create_list(&self, document_id: &str, start: i64, end: i64, kind: ListKind) -> Result<usize> {
        self.apply(document_id, edit::create_list(start, end, kind)?)
    }

    pub fn remove_list(&self, document_id: &str, start: i64, end: i64) -> Result<usize> {
        self.apply(document_id, edit::remove_list(start, end)?)
    }

    pub fn insert_table(&self, document_id: &str, index: i64, rows: u32, columns: u32) -> Result<usize> {
        self.apply(document_id, edit::insert_table(index, rows, columns)?)
    }

    pub fn style_table_cell(
        &self,
        document_id: &str,
        table_start: i64,
        row: u32,
        column: u32,
        background: &str,
    ) -> Result<usize> {
        let doc = self.fetch(document_id)?;
        let batch = edit::style_table_cell(&doc, table_start, row, column, background)?;
        self.apply(document_id, batch)
    }

    pub fn update_table_cell(
        &self,
        document_id: &str,
        table_start: i64,
        row: u32,
        column: u32,
        text: &str,
    ) -> Result<usize> {
        let doc = self.fetch(document_id)?;
        let batch = edit::replace_table_cell(&doc, table_start, row, column, text)?;
        self.apply(document_id, batch)
    }

    pub fn insert_image(
        &self,
        document_id: &str,
        index: i64,
        uri: &str,
        width: Option<f64>,
        height: Option<f64>,
    ) -> Result<usize> {
        self.apply(document_id, edit::insert_image(index, uri, width, height)?)
    }

    /// Write text into the default header, creating it when missing.
    pub fn set_header(&self, document_id: &str, text: &str) -> Result<SegmentOutcome> {
        self.set_segment_text(document_id, SegmentKind::Header, text)
    }

    /// Write text into the default footer, creating it when missing.
    pub fn set_footer(&self, document_id: &str, text: &str) -> Result<SegmentOutcome> {
        self.set_segment_text(document_id, SegmentKind::Footer, text)
    }

    fn set_segment_text(
        &self,
        document_id: &str,
        kind: SegmentKind,
        text: &str,
    ) -> Result<SegmentOutcome> {
        let doc = self.fetch(document_id)?;

        let (segment_id, created) = match kind.existing_id(&doc) {
            Some(id) => (id.to_string(), false),
            None => {
                let reply = self.send(document_id, &[kind.create()])?;
                let id = kind.created_id(&reply).ok_or_else(|| {
                    Error::Service(format!("Reply did not include the new {} id", kind))
                })?;
                log::debug!("Created {} {}", kind, id);
                (id.to_string(), true)
            }
        };

        let batch = match kind {
            SegmentKind::Header => edit::header_text(&segment_id, text),
            SegmentKind::Footer => edit::footer_text(&segment_id, text),
        };
        self.apply(document_id, batch)?;

        Ok(SegmentOutcome {
            segment_id,
            created,
        })
    }

    /// Apply a batch unless it is empty; returns its length.
    fn apply(&self, document_id: &str, batch: Vec<EditOperation>) -> Result<usize> {
        if batch.is_empty() {
            log::debug!("Nothing to apply to {}", document_id);
            return Ok(0);
        }
        self.send(document_id, &batch)?;
        Ok(batch.len())
    }

    fn send(&self, document_id: &str, batch: &[EditOperation]) -> Result<BatchReply> {
        log::debug!("Applying {} operations to {}", batch.len(), document_id);
        self.service.apply_operations(document_id, batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Paragraph;
    use std::cell::RefCell;

    struct FixedService {
        doc: Document,
        batches: RefCell<Vec<Vec<EditOperation>>>,
    }

    impl DocumentService for FixedService {
        fn fetch_document(&self, _document_id: &str) -> Result<Document> {
            Ok(self.doc.clone())
        }

        fn apply_operations(&self, _document_id: &str, operations: &[EditOperation]) -> Result<BatchReply> {
            self.batches.borrow_mut().push(operations.to_vec());
            Ok(BatchReply::default())
        }

        fn create_document(&self, title: &str) -> Result<Document> {
            Ok(Document::new(title))
        }

        fn copy_document(
            &self,
            _document_id: &str,
            title: &str,
            _folder_id: Option<&str>,
        ) -> Result<Document> {
            Ok(Document::new(title))
        }

        fn add_to_folder(&self, document_id: &str, _folder_id: &str) -> Result<()> {
            Err(Error::Service(format!("HTTP 403: {}", document_id)))
        }
    }

    fn editor() -> Editor<FixedService> {
        let mut doc = Document::new("Doc");
        doc.document_id = "doc-1".to_string();
        doc.push_paragraph(Paragraph::heading("Intro", 1));
        Editor::new(FixedService {
            doc,
            batches: RefCell::new(Vec::new()),
        })
    }

    #[test]
    fn test_info_projection() {
        let info = editor().info("doc-1").unwrap();
        assert_eq!(info.document_id, "doc-1");
        assert_eq!(info.title, "Doc");
        assert_eq!(info.revision_id, None);
    }

    #[test]
    fn test_validation_error_sends_nothing() {
        let editor = editor();
        assert!(editor.update_section("doc-1", "Missing", "x").is_err());
        assert!(editor.service().batches.borrow().is_empty());
    }

    #[test]
    fn test_create_reports_folder_failure() {
        let editor = editor();
        assert!(editor.create("Plain", None).is_ok());
        assert!(matches!(
            editor.create("Filed", Some("folder-1")),
            Err(Error::Service(_))
        ));
    }

    #[test]
    fn test_header_creation_requires_reply_id() {
        let editor = editor();
        let err = editor.set_header("doc-1", "Title").unwrap_err();
        assert!(matches!(err, Error::Service(_)));
        assert_eq!(editor.service().batches.borrow().len(), 1);
    }
}
