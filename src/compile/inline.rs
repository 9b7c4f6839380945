//! Inline emphasis parsing.
//!
//! Two strictly sequential stages: bold markers are matched and stripped
//! first, then italic markers are matched against the bold-stripped text.
//! Each span is addressed in the coordinate space of the text produced by
//! its own stage. Overlapping or interleaved markers are not reconciled.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::index::rune_length;

static BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*|__([^_]+)__").expect("bold pattern is valid"));

static ITALIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*([^*]+)\*|_([^_]+)_").expect("italic pattern is valid"));

/// Emphasis kind produced by the inline pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Bold,
    Italic,
}

/// A styled span in line-local index units, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledSpan {
    pub emphasis: Emphasis,
    pub start: i64,
    pub end: i64,
}

/// A line with its emphasis markers removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineMarkup {
    /// Text with markers stripped
    pub text: String,

    /// Bold spans first, then italic spans, each in match order
    pub spans: Vec<StyledSpan>,
}

/// Strip `**bold**`/`__bold__` then `*italic*`/`_italic_` markers from a line.
pub fn parse_inline(line: &str) -> InlineMarkup {
    let mut spans = Vec::new();
    let bold_stripped = strip_stage(line, &BOLD, Emphasis::Bold, &mut spans);
    let text = strip_stage(&bold_stripped, &ITALIC, Emphasis::Italic, &mut spans);
    InlineMarkup { text, spans }
}

/// Replace every match of `pattern` with its content, recording where the
/// content lands in the stripped output.
fn strip_stage(
    text: &str,
    pattern: &Regex,
    emphasis: Emphasis,
    spans: &mut Vec<StyledSpan>,
) -> String {
    let mut stripped = String::with_capacity(text.len());
    let mut stripped_len = 0;
    let mut last = 0;

    for caps in pattern.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let content = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str())
            .unwrap_or_default();

        let before = &text[last..whole.start()];
        stripped.push_str(before);
        stripped_len += rune_length(before);

        let content_len = rune_length(content);
        spans.push(StyledSpan {
            emphasis,
            start: stripped_len,
            end: stripped_len + content_len,
        });

        stripped.push_str(content);
        stripped_len += content_len;
        last = whole.end();
    }

    stripped.push_str(&text[last..]);
    stripped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(emphasis: Emphasis, start: i64, end: i64) -> StyledSpan {
        StyledSpan {
            emphasis,
            start,
            end,
        }
    }

    #[test]
    fn test_plain_text_untouched() {
        let markup = parse_inline("nothing to see");
        assert_eq!(markup.text, "nothing to see");
        assert!(markup.spans.is_empty());
    }

    #[test]
    fn test_bold_offsets_use_stripped_coordinates() {
        let markup = parse_inline("a **b** c **dd**");
        assert_eq!(markup.text, "a b c dd");
        assert_eq!(
            markup.spans,
            vec![span(Emphasis::Bold, 2, 3), span(Emphasis::Bold, 6, 8)]
        );
    }

    #[test]
    fn test_italic_after_bold() {
        let markup = parse_inline("**bold** and *italic*");
        assert_eq!(markup.text, "bold and italic");
        assert_eq!(
            markup.spans,
            vec![span(Emphasis::Bold, 0, 4), span(Emphasis::Italic, 9, 15)]
        );
    }

    #[test]
    fn test_underscore_variants() {
        let markup = parse_inline("__strong__ _soft_");
        assert_eq!(markup.text, "strong soft");
        assert_eq!(
            markup.spans,
            vec![span(Emphasis::Bold, 0, 6), span(Emphasis::Italic, 7, 11)]
        );
    }

    #[test]
    fn test_unpaired_marker_is_literal() {
        let markup = parse_inline("5 * 3 = 15");
        assert_eq!(markup.text, "5 * 3 = 15");
        assert!(markup.spans.is_empty());
    }

    #[test]
    fn test_multibyte_offsets() {
        let markup = parse_inline("né **ü** *🎉*");
        assert_eq!(markup.text, "né ü 🎉");
        assert_eq!(
            markup.spans,
            vec![span(Emphasis::Bold, 3, 4), span(Emphasis::Italic, 5, 6)]
        );
    }

    #[test]
    fn test_bold_spans_are_not_shifted_by_italic_stage() {
        // Italic markers before a bold span shift the final text, but the
        // bold span keeps its bold-stage coordinates.
        let markup = parse_inline("*a* **b**");
        assert_eq!(markup.text, "a b");
        assert_eq!(
            markup.spans,
            vec![span(Emphasis::Bold, 4, 5), span(Emphasis::Italic, 0, 1)]
        );
    }

    #[test]
    fn test_interleaved_markers_follow_two_stage_matching() {
        // Bold stage finds no `**x**` span without an inner `*`; the italic
        // stage then pairs single stars left to right.
        let markup = parse_inline("*a**b*c**");
        assert_eq!(markup.text, "abc**");
        assert_eq!(
            markup.spans,
            vec![span(Emphasis::Italic, 0, 1), span(Emphasis::Italic, 1, 2)]
        );
    }
}
