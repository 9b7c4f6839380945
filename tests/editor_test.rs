//! Integration tests for document commands against a recording service.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use docsmd::model::Paragraph;
use docsmd::ops::{BatchReply, CreatedFooter, Reply};
use docsmd::{
    Document, DocumentService, EditOperation, Editor, Error, ListKind, Location, Range,
    RenderOptions, Result, TextFormat,
};

/// In-memory service that serves a fixed document and records batches.
struct RecordingService {
    doc: Document,
    fetches: Cell<usize>,
    batches: RefCell<Vec<Vec<EditOperation>>>,
    replies: RefCell<VecDeque<BatchReply>>,
    drive_calls: RefCell<Vec<String>>,
    fail_apply: bool,
}

impl RecordingService {
    fn new(doc: Document) -> Self {
        Self {
            doc,
            fetches: Cell::new(0),
            batches: RefCell::new(Vec::new()),
            replies: RefCell::new(VecDeque::new()),
            drive_calls: RefCell::new(Vec::new()),
            fail_apply: false,
        }
    }

    fn with_reply(self, reply: BatchReply) -> Self {
        self.replies.borrow_mut().push_back(reply);
        self
    }

    fn batches(&self) -> Vec<Vec<EditOperation>> {
        self.batches.borrow().clone()
    }

    fn drive_calls(&self) -> Vec<String> {
        self.drive_calls.borrow().clone()
    }
}

impl DocumentService for RecordingService {
    fn fetch_document(&self, document_id: &str) -> Result<Document> {
        self.fetches.set(self.fetches.get() + 1);
        if document_id != self.doc.document_id {
            return Err(Error::Service(format!("HTTP 404: {}", document_id)));
        }
        Ok(self.doc.clone())
    }

    fn apply_operations(&self, _document_id: &str, operations: &[EditOperation]) -> Result<BatchReply> {
        assert!(!operations.is_empty(), "empty batch sent");
        if self.fail_apply {
            return Err(Error::Service("HTTP 400: invalid request".to_string()));
        }
        self.batches.borrow_mut().push(operations.to_vec());
        Ok(self.replies.borrow_mut().pop_front().unwrap_or_default())
    }

    fn create_document(&self, title: &str) -> Result<Document> {
        let mut doc = Document::new(title);
        doc.document_id = "new-doc".to_string();
        Ok(doc)
    }

    fn copy_document(&self, document_id: &str, title: &str, folder_id: Option<&str>) -> Result<Document> {
        if document_id != self.doc.document_id {
            return Err(Error::Service(format!("HTTP 404: {}", document_id)));
        }
        self.drive_calls.borrow_mut().push(format!(
            "copy {} {:?} {}",
            document_id,
            title,
            folder_id.unwrap_or("-")
        ));
        let mut doc = Document::new(title);
        doc.document_id = "copy-doc".to_string();
        Ok(doc)
    }

    fn add_to_folder(&self, document_id: &str, folder_id: &str) -> Result<()> {
        self.drive_calls
            .borrow_mut()
            .push(format!("file {} {}", document_id, folder_id));
        Ok(())
    }
}

/// Heading "Intro" [1, 7), body "Hello" [7, 13), heading "Data" [13, 18),
/// 2x2 table [18, ..).
fn sample() -> Document {
    let mut doc = Document::new("Sample");
    doc.document_id = "doc-1".to_string();
    doc.push_paragraph(Paragraph::heading("Intro", 1));
    doc.push_paragraph(Paragraph::with_text("Hello"));
    doc.push_paragraph(Paragraph::heading("Data", 1));
    doc.push_table([["k", "v"], ["a", "1"]]);
    doc.push_paragraph(Paragraph::with_text(""));
    doc
}

fn editor() -> Editor<RecordingService> {
    Editor::new(RecordingService::new(sample()))
}

#[test]
fn test_read_renders_markdown() {
    let editor = editor();
    let md = editor.read("doc-1", &RenderOptions::default()).unwrap();
    assert!(md.starts_with("# Sample\n\n# Intro\n\nHello\n\n# Data\n\n| k | v |"));
    assert!(editor.service().batches().is_empty());
}

#[test]
fn test_structure_lists_headings() {
    let sections = editor().structure("doc-1").unwrap();
    let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Intro", "Data"]);
}

#[test]
fn test_set_markdown_applies_one_batch() {
    let editor = editor();
    let count = editor.set_markdown("doc-1", "# New\nBody").unwrap();

    let batches = editor.service().batches();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].len(), count);
    assert!(matches!(batches[0][0], EditOperation::DeleteRange(_)));
    assert_eq!(batches[0][1], EditOperation::insert_text(1, "New\n"));
}

#[test]
fn test_update_section_replaces_body_only() {
    let editor = editor();
    editor.update_section("doc-1", "intro", "Bye").unwrap();

    let batch = &editor.service().batches()[0];
    assert_eq!(batch[0], EditOperation::delete_range(Range::new(7, 13)));
    assert_eq!(batch[1], EditOperation::insert_text(7, "Bye\n"));
}

#[test]
fn test_missing_section_sends_nothing() {
    let editor = editor();
    let err = editor.insert_after("doc-1", "Outro", "x").unwrap_err();
    assert!(matches!(err, Error::SectionNotFound(ref name) if name == "Outro"));
    assert!(editor.service().batches().is_empty());
}

#[test]
fn test_argument_errors_skip_fetch_and_apply() {
    let editor = editor();

    assert!(matches!(
        editor.delete_text("doc-1", 10, 2),
        Err(Error::InvalidRange { .. })
    ));
    assert!(matches!(
        editor.format_text("doc-1", 1, 5, &TextFormat::default()),
        Err(Error::NoFormatting)
    ));
    assert!(matches!(
        editor.align_paragraph("doc-1", 1, 5, "left"),
        Err(Error::InvalidAlignment(_))
    ));
    assert!(matches!(
        editor.insert_table("doc-1", 1, 0, 2),
        Err(Error::InvalidTableSize { .. })
    ));

    assert_eq!(editor.service().fetches.get(), 0);
    assert!(editor.service().batches().is_empty());
}

#[test]
fn test_range_commands_skip_fetch() {
    let editor = editor();
    editor.create_list("doc-1", 7, 13, ListKind::Bullet).unwrap();
    editor.remove_list("doc-1", 7, 13).unwrap();

    assert_eq!(editor.service().fetches.get(), 0);
    assert_eq!(
        editor.service().batches(),
        vec![
            vec![EditOperation::create_bullets(
                Range::new(7, 13),
                "BULLET_DISC_CIRCLE_SQUARE"
            )],
            vec![EditOperation::delete_bullets(Range::new(7, 13))],
        ]
    );
}

#[test]
fn test_table_cell_commands() {
    let editor = editor();

    editor.style_table_cell("doc-1", 18, 0, 1, "#336699").unwrap();
    assert!(matches!(
        editor.style_table_cell("doc-1", 18, 0, 2, "#336699"),
        Err(Error::CellOutOfBounds { column: 2, columns: 2, .. })
    ));
    assert!(matches!(
        editor.update_table_cell("doc-1", 13, 0, 0, "x"),
        Err(Error::TableNotFound(13))
    ));

    assert_eq!(editor.service().batches().len(), 1);
}

#[test]
fn test_header_written_into_existing_segment() {
    let mut doc = sample();
    doc.document_style.default_header_id = Some("kix.h1".to_string());
    let editor = Editor::new(RecordingService::new(doc));

    let outcome = editor.set_header("doc-1", "Confidential").unwrap();
    assert_eq!(outcome.segment_id, "kix.h1");
    assert!(!outcome.created);

    assert_eq!(
        editor.service().batches(),
        vec![vec![EditOperation::insert_text_at(
            Location::in_segment(0, "kix.h1"),
            "Confidential"
        )]]
    );
}

#[test]
fn test_footer_created_then_written() {
    let reply = BatchReply {
        document_id: "doc-1".to_string(),
        replies: vec![Reply {
            create_footer: Some(CreatedFooter {
                footer_id: "kix.f9".to_string(),
            }),
            ..Default::default()
        }],
    };
    let editor = Editor::new(RecordingService::new(sample()).with_reply(reply));

    let outcome = editor.set_footer("doc-1", "Page").unwrap();
    assert_eq!(outcome.segment_id, "kix.f9");
    assert!(outcome.created);

    let batches = editor.service().batches();
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0], vec![EditOperation::create_footer()]);
    assert_eq!(
        batches[1],
        vec![EditOperation::insert_text_at(
            Location::in_segment(0, "kix.f9"),
            "Page"
        )]
    );
}

#[test]
fn test_service_errors_propagate() {
    let err = editor().info("other").unwrap_err();
    assert!(err.to_string().contains("404"));

    let mut service = RecordingService::new(sample());
    service.fail_apply = true;
    let editor = Editor::new(service);
    let err = editor.insert_image("doc-1", 5, "https://x.test/a.png", None, None).unwrap_err();
    assert!(matches!(err, Error::Service(_)));
}

#[test]
fn test_create_returns_new_document() {
    let editor = editor();
    let doc = editor.create("Fresh", None).unwrap();
    assert_eq!(doc.title, "Fresh");
    assert_eq!(doc.document_id, "new-doc");
    assert!(editor.service().drive_calls().is_empty());
}

#[test]
fn test_create_in_folder_files_the_new_document() {
    let editor = editor();
    let doc = editor.create("Fresh", Some("folder-9")).unwrap();
    assert_eq!(editor.service().drive_calls(), vec!["file new-doc folder-9"]);
    assert_eq!(doc.document_id, "new-doc");
}

#[test]
fn test_copy_passes_title_and_folder() {
    let editor = editor();

    let copy = editor.copy("doc-1", "Sample v2", Some("folder-9")).unwrap();
    assert_eq!(copy.document_id, "copy-doc");
    assert_eq!(copy.title, "Sample v2");

    editor.copy("doc-1", "Loose copy", None).unwrap();
    assert_eq!(
        editor.service().drive_calls(),
        vec![
            "copy doc-1 \"Sample v2\" folder-9",
            "copy doc-1 \"Loose copy\" -",
        ]
    );

    // Copying never touches the document body
    assert_eq!(editor.service().fetches.get(), 0);
    assert!(editor.service().batches().is_empty());

    let err = editor.copy("missing", "x", None).unwrap_err();
    assert!(err.to_string().contains("404"));
}
