//! Markdown to HTML conversion for static site generation.
//!
//! The pipeline runs documents through [`blocks`], text runs through
//! [`inline`], and serializes the resulting [`html`] tree. [`page`] and
//! [`io`] turn that into a directory of generated pages.

pub mod blocks;
pub mod convert;
pub mod html;
pub mod inline;
pub mod io;
pub mod page;

// Re-export key types for easier usage
pub use blocks::{BlockType, MarkdownError, markdown_to_html, markdown_to_html_node};
pub use convert::{span_to_html_node, text_to_children};
pub use html::{HtmlNode, StructureError, render};
pub use inline::{FormatError, Span, SpanKind, tokenize};
pub use io::IoError;
pub use page::{PageError, extract_title, generate_page, generate_pages_recursive};
