//! Header and footer text.

use std::fmt;

use crate::index::Location;
use crate::model::Document;
use crate::ops::{BatchReply, EditOperation};

/// A page segment outside the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Header,
    Footer,
}

impl SegmentKind {
    /// Id of the document's existing default segment of this kind.
    pub fn existing_id(self, doc: &Document) -> Option<&str> {
        match self {
            SegmentKind::Header => doc.default_header_id(),
            SegmentKind::Footer => doc.default_footer_id(),
        }
    }

    /// Operation creating the default segment of this kind.
    pub fn create(self) -> EditOperation {
        match self {
            SegmentKind::Header => EditOperation::create_header(),
            SegmentKind::Footer => EditOperation::create_footer(),
        }
    }

    /// Id of a segment of this kind created by `reply`.
    pub fn created_id(self, reply: &BatchReply) -> Option<&str> {
        match self {
            SegmentKind::Header => reply.created_header_id(),
            SegmentKind::Footer => reply.created_footer_id(),
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentKind::Header => f.write_str("header"),
            SegmentKind::Footer => f.write_str("footer"),
        }
    }
}

/// Insert `text` at the start of header `segment_id`.
pub fn header_text(segment_id: &str, text: &str) -> Vec<EditOperation> {
    segment_text(segment_id, text)
}

/// Insert `text` at the start of footer `segment_id`.
pub fn footer_text(segment_id: &str, text: &str) -> Vec<EditOperation> {
    segment_text(segment_id, text)
}

fn segment_text(segment_id: &str, text: &str) -> Vec<EditOperation> {
    if text.is_empty() {
        return Vec::new();
    }
    vec![EditOperation::insert_text_at(
        Location::in_segment(0, segment_id),
        text,
    )]
}
