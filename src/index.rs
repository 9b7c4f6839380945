//! Character addressing used by the document service.
//!
//! One index unit is one Unicode code point. Index 0 is reserved, so the
//! first addressable position of a document body is 1. Ranges are half-open.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// First addressable index of a document body.
pub const FIRST_INDEX: i64 = 1;

/// Length of `text` in index units (code points, not bytes).
pub fn rune_length(text: &str) -> i64 {
    text.chars().count() as i64
}

/// A single position, optionally inside a header/footer segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Index within the segment
    pub index: i64,

    /// Header/footer id; body when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment_id: Option<String>,
}

impl Location {
    /// A position in the document body.
    pub fn new(index: i64) -> Self {
        Self {
            index,
            segment_id: None,
        }
    }

    /// A position inside a header or footer segment.
    pub fn in_segment(index: i64, segment_id: impl Into<String>) -> Self {
        Self {
            index,
            segment_id: Some(segment_id.into()),
        }
    }
}

/// Half-open range `[start_index, end_index)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    /// First index covered
    pub start_index: i64,

    /// First index not covered
    pub end_index: i64,

    /// Header/footer id; body when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment_id: Option<String>,
}

impl Range {
    /// Create a body range without validation.
    pub fn new(start_index: i64, end_index: i64) -> Self {
        Self {
            start_index,
            end_index,
            segment_id: None,
        }
    }

    /// Create a body range from user input, rejecting empty or reversed
    /// ranges and ranges touching the reserved index 0.
    pub fn checked(start_index: i64, end_index: i64) -> Result<Self> {
        if start_index < FIRST_INDEX || start_index >= end_index {
            return Err(Error::InvalidRange {
                start: start_index,
                end: end_index,
            });
        }
        Ok(Self::new(start_index, end_index))
    }

    /// Number of index units covered.
    pub fn len(&self) -> i64 {
        (self.end_index - self.start_index).max(0)
    }

    /// Whether the range covers nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `index` falls inside the range.
    pub fn contains(&self, index: i64) -> bool {
        index >= self.start_index && index < self.end_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rune_length_counts_code_points() {
        assert_eq!(rune_length(""), 0);
        assert_eq!(rune_length("abc"), 3);
        assert_eq!(rune_length("é"), 1);
        assert_eq!(rune_length("🎉"), 1);
        assert_eq!(rune_length("日本語"), 3);
    }

    #[test]
    fn test_range_checked() {
        assert!(Range::checked(1, 5).is_ok());
        assert!(matches!(
            Range::checked(5, 5),
            Err(Error::InvalidRange { start: 5, end: 5 })
        ));
        assert!(Range::checked(6, 2).is_err());
        assert!(Range::checked(0, 3).is_err());
    }

    #[test]
    fn test_range_len_and_contains() {
        let range = Range::new(3, 7);
        assert_eq!(range.len(), 4);
        assert!(!range.is_empty());
        assert!(range.contains(3));
        assert!(range.contains(6));
        assert!(!range.contains(7));
        assert!(Range::new(4, 4).is_empty());
    }

    #[test]
    fn test_location_serializes_segment_only_when_set() {
        let body = serde_json::to_string(&Location::new(4)).unwrap();
        assert_eq!(body, r#"{"index":4}"#);

        let header = serde_json::to_string(&Location::in_segment(0, "kix.h1")).unwrap();
        assert_eq!(header, r#"{"index":0,"segmentId":"kix.h1"}"#);
    }
}
