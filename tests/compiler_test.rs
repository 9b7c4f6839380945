//! Integration tests for the Markdown compiler.

use docsmd::ops::{InsertText, SetParagraphStyle, SetTextStyle};
use docsmd::{compile, EditOperation, MarkdownCompiler, NamedStyle, Range};

/// Flatten a batch into comparable tuples.
fn describe(ops: &[EditOperation]) -> Vec<String> {
    ops.iter()
        .map(|op| match op {
            EditOperation::InsertText(InsertText { location, text }) => {
                format!("insert {} {:?}", location.index, text)
            }
            EditOperation::SetParagraphStyle(SetParagraphStyle {
                range,
                paragraph_style,
                ..
            }) => format!(
                "paragraph [{}, {}) {}",
                range.start_index,
                range.end_index,
                paragraph_style
                    .named_style_type
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_default()
            ),
            EditOperation::SetTextStyle(SetTextStyle { range, fields, .. }) => {
                format!("text [{}, {}) {}", range.start_index, range.end_index, fields)
            }
            other => format!("{:?}", other),
        })
        .collect()
}

#[test]
fn test_mixed_document() {
    let md = "# Title\n\nIntro with **bold** text.\n## Part *one*\n_quiet_ end";
    let ops = compile(md, 1);

    assert_eq!(
        describe(&ops),
        vec![
            "insert 1 \"Title\\n\"",
            "paragraph [1, 7) HEADING_1",
            "insert 7 \"\\n\"",
            "insert 8 \"Intro with bold text.\\n\"",
            "text [19, 23) bold",
            "insert 30 \"Part *one*\\n\"",
            "paragraph [30, 41) HEADING_2",
            "insert 41 \"quiet end\\n\"",
            "text [41, 46) italic",
        ]
    );
}

#[test]
fn test_style_ranges_lie_inside_their_insertion() {
    let md = "**a** *b* __c__ _d_\n# h\nplain **x**";
    let compiled = MarkdownCompiler::new(3).compile(md);

    let mut inserted: Vec<Range> = Vec::new();
    for op in &compiled.operations {
        match op {
            EditOperation::InsertText(InsertText { location, text }) => {
                let end = location.index + docsmd::rune_length(text);
                inserted.push(Range::new(location.index, end));
            }
            other => {
                let range = other.range().expect("style operations carry a range");
                let last = inserted.last().expect("style follows an insertion");
                assert!(range.start_index >= last.start_index);
                assert!(range.end_index <= last.end_index);
            }
        }
    }

    // Insertions are contiguous from the start index
    for pair in inserted.windows(2) {
        assert_eq!(pair[0].end_index, pair[1].start_index);
    }
    assert_eq!(inserted.first().map(|r| r.start_index), Some(3));
    assert_eq!(inserted.last().map(|r| r.end_index), Some(compiled.end_index));
}

#[test]
fn test_underscore_bold_and_star_italic_in_one_line() {
    let ops = compile("__strong__ then *soft*", 1);
    assert_eq!(
        describe(&ops),
        vec![
            "insert 1 \"strong then soft\\n\"",
            "text [1, 7) bold",
            "text [13, 17) italic",
        ]
    );
}

#[test]
fn test_heading_text_is_literal() {
    // Emphasis markers are not parsed inside headings
    let ops = compile("## **Loud**", 1);
    assert_eq!(
        describe(&ops),
        vec!["insert 1 \"**Loud**\\n\"", "paragraph [1, 10) HEADING_2"]
    );
}

#[test]
fn test_index_advances_by_code_points() {
    let compiled = MarkdownCompiler::new(1).compile("日本語 **強調**");
    assert_eq!(
        describe(&compiled.operations),
        vec!["insert 1 \"日本語 強調\\n\"", "text [5, 7) bold"]
    );
    assert_eq!(compiled.end_index, 8);
}

#[test]
fn test_hash_only_line_is_empty_heading() {
    let ops = compile("###", 1);
    assert_eq!(
        ops,
        vec![
            EditOperation::insert_text(1, "\n"),
            EditOperation::named_style(Range::new(1, 2), NamedStyle::Heading(3)),
        ]
    );
}
