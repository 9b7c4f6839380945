//! Markdown to edit-operation compiler.
//!
//! Recognised syntax is deliberately small: blank lines, `#` headings, and
//! `**bold**`/`__bold__` plus `*italic*`/`_italic_` emphasis. Everything else,
//! including tables, links, images and list markers, is inserted as literal
//! text.

mod inline;
mod markdown;

pub use inline::{parse_inline, Emphasis, InlineMarkup, StyledSpan};
pub use markdown::{compile, CompiledMarkdown, MarkdownCompiler};
