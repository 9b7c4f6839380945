//! Markdown rendering for structured documents.

use crate::model::{Block, Document, Paragraph, Table, TextRun};

use super::RenderOptions;

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> String {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Markdown renderer.
///
/// Rendering is lossy: headings drop inline styling, table cells keep plain
/// text only, and list formatting is not reflected.
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to Markdown.
    pub fn render(&self, doc: &Document) -> String {
        let mut output = String::new();

        if self.options.include_title {
            output.push_str(&format!("# {}\n\n", doc.title));
        }

        for element in doc.elements() {
            match element.block() {
                Block::Paragraph(p) => self.render_paragraph(&mut output, p),
                Block::Table(t) => self.render_table(&mut output, t),
                Block::Other => {}
            }
        }

        output
    }

    fn render_paragraph(&self, output: &mut String, para: &Paragraph) {
        if let Some(level) = para.heading_level() {
            output.push_str(&"#".repeat(level as usize));
            output.push(' ');
            output.push_str(&para.plain_text());
            output.push_str("\n\n");
            return;
        }

        let mut text = String::new();
        for run in para.runs() {
            text.push_str(&render_run(run));
        }

        if text.trim().is_empty() {
            return;
        }
        output.push_str(text.trim_end_matches('\n'));
        output.push_str("\n\n");
    }

    fn render_table(&self, output: &mut String, table: &Table) {
        if table.is_empty() {
            return;
        }

        for (i, row) in table.table_rows.iter().enumerate() {
            output.push('|');
            for cell in &row.table_cells {
                output.push_str(&format!(" {} |", cell.plain_text()));
            }
            output.push('\n');

            // Row 0 is always treated as the header
            if i == 0 {
                output.push('|');
                for _ in &row.table_cells {
                    output.push_str(" --- |");
                }
                output.push('\n');
            }
        }

        output.push('\n');
    }
}

/// Wrap a run in Markdown markers: bold, then italic around that, then the
/// link around both. Each wrap trims the text it encloses.
fn render_run(run: &TextRun) -> String {
    let style = run.style();
    if run.content.trim().is_empty() {
        // Markers around nothing would render as a stray `****`
        return run.content.clone();
    }

    let mut result = run.content.clone();
    if style.is_bold() {
        result = format!("**{}**", result.trim());
    }
    if style.is_italic() {
        result = format!("*{}*", result.trim());
    }
    if let Some(url) = style.link_url() {
        result = format!("[{}]({})", result.trim(), url);
    }
    result
}
