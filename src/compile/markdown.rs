//! Markdown to edit-operation compilation.

use crate::index::{rune_length, Range};
use crate::model::TextStyle;
use crate::ops::EditOperation;

use super::inline::{parse_inline, Emphasis};

/// Compile Markdown into operations that insert it at `start_index`.
pub fn compile(markdown: &str, start_index: i64) -> Vec<EditOperation> {
    MarkdownCompiler::new(start_index).compile(markdown).operations
}

/// Operations produced for one Markdown input.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledMarkdown {
    /// Operations in application order
    pub operations: Vec<EditOperation>,

    /// Index the first insertion targets
    pub start_index: i64,

    /// Index just past the last inserted character
    pub end_index: i64,
}

impl CompiledMarkdown {
    /// Number of index units the batch inserts.
    pub fn length(&self) -> i64 {
        self.end_index - self.start_index
    }

    /// Text the batch inserts, in order.
    pub fn inserted_text(&self) -> String {
        self.operations
            .iter()
            .filter_map(EditOperation::inserted_text)
            .collect()
    }
}

/// Line-oriented Markdown compiler.
///
/// The compiler owns the running cursor: every insertion lands at the cursor
/// and advances it by the inserted length, and every style range is computed
/// from the cursor before that advance. Nothing is read back from the
/// document while compiling.
pub struct MarkdownCompiler {
    start_index: i64,
    cursor: i64,
    operations: Vec<EditOperation>,
}

impl MarkdownCompiler {
    /// Create a compiler whose first insertion targets `start_index`.
    pub fn new(start_index: i64) -> Self {
        Self {
            start_index,
            cursor: start_index,
            operations: Vec::new(),
        }
    }

    /// Compile every line of `markdown`.
    ///
    /// Lines are split on `\n` and trimmed, so a trailing newline produces a
    /// final blank line.
    pub fn compile(mut self, markdown: &str) -> CompiledMarkdown {
        let mut lines = 0usize;
        for line in markdown.split('\n') {
            self.compile_line(line.trim());
            lines += 1;
        }

        log::debug!(
            "Compiled {} lines into {} operations spanning [{}, {})",
            lines,
            self.operations.len(),
            self.start_index,
            self.cursor
        );

        CompiledMarkdown {
            operations: self.operations,
            start_index: self.start_index,
            end_index: self.cursor,
        }
    }

    fn compile_line(&mut self, line: &str) {
        if line.is_empty() {
            self.push_blank();
        } else if line.starts_with('#') {
            self.push_heading(line);
        } else {
            self.push_paragraph(line);
        }
    }

    fn push_blank(&mut self) {
        self.operations
            .push(EditOperation::insert_text(self.cursor, "\n"));
        self.cursor += 1;
    }

    fn push_heading(&mut self, line: &str) {
        let hashes = line.chars().take_while(|&c| c == '#').count();
        let text = line[hashes..].trim();
        let level = u8::try_from(hashes).unwrap_or(u8::MAX);
        let len = rune_length(text) + 1;

        self.operations
            .push(EditOperation::insert_text(self.cursor, format!("{}\n", text)));
        self.operations.push(EditOperation::heading(
            Range::new(self.cursor, self.cursor + len),
            level,
        ));
        self.cursor += len;
    }

    fn push_paragraph(&mut self, line: &str) {
        let markup = parse_inline(line);

        self.operations.push(EditOperation::insert_text(
            self.cursor,
            format!("{}\n", markup.text),
        ));
        for span in &markup.spans {
            let style = match span.emphasis {
                Emphasis::Bold => TextStyle::bold(),
                Emphasis::Italic => TextStyle::italic(),
            };
            let range = Range::new(self.cursor + span.start, self.cursor + span.end);
            self.operations.push(EditOperation::text_style(range, style));
        }

        self.cursor += rune_length(&markup.text) + 1;
    }
}
