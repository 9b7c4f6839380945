//! Document service seam.
//!
//! The core never performs I/O itself. Everything that reads or writes a
//! remote document goes through a [`DocumentService`], which the CLI backs
//! with an HTTP client and tests back with an in-memory recorder.

use crate::error::Result;
use crate::model::Document;
use crate::ops::{BatchReply, EditOperation};

/// Remote document store.
pub trait DocumentService {
    /// Fetch the current state of a document.
    fn fetch_document(&self, document_id: &str) -> Result<Document>;

    /// Apply `operations` as one batch, in order.
    ///
    /// Callers never pass an empty batch.
    fn apply_operations(&self, document_id: &str, operations: &[EditOperation])
        -> Result<BatchReply>;

    /// Create an empty document titled `title`.
    fn create_document(&self, title: &str) -> Result<Document>;

    /// Copy a document under a new title, placing the copy in `folder_id`
    /// when given. The returned document carries the new id and title.
    fn copy_document(&self, document_id: &str, title: &str, folder_id: Option<&str>)
        -> Result<Document>;

    /// Add a document to a folder.
    fn add_to_folder(&self, document_id: &str, folder_id: &str) -> Result<()>;
}

impl<S: DocumentService + ?Sized> DocumentService for &S {
    fn fetch_document(&self, document_id: &str) -> Result<Document> {
        (**self).fetch_document(document_id)
    }

    fn apply_operations(
        &self,
        document_id: &str,
        operations: &[EditOperation],
    ) -> Result<BatchReply> {
        (**self).apply_operations(document_id, operations)
    }

    fn create_document(&self, title: &str) -> Result<Document> {
        (**self).create_document(title)
    }

    fn copy_document(
        &self,
        document_id: &str,
        title: &str,
        folder_id: Option<&str>,
    ) -> Result<Document> {
        (**self).copy_document(document_id, title, folder_id)
    }

    fn add_to_folder(&self, document_id: &str, folder_id: &str) -> Result<()> {
        (**self).add_to_folder(document_id, folder_id)
    }
}
