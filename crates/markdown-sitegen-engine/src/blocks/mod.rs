//! # Block Parsing
//!
//! Splits a document into top-level blocks and converts each into an
//! [`HtmlNode`](crate::html::HtmlNode), tokenizing the text runs inside.
//!
//! ## Phases
//!
//! 1. **Grouping** (`builder`): `BlockBuilder` walks the lines, closing a
//!    block at each blank line. Fenced code is a raw zone: blank lines inside
//!    a fence do not end it.
//! 2. **Classification** (`classify`): `block_to_block_type` looks at one
//!    block's markers.
//! 3. **Conversion** (`to_html`): `markdown_to_html_node` wraps every block
//!    in its element under a single `div`.
//!
//! ## Modules
//!
//! - **`types`**: `BlockType`
//! - **`kinds`**: block types with owned delimiters (Heading, CodeFence,
//!   BlockQuote, UnorderedList, OrderedList)

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod to_html;
pub mod types;

pub use builder::{BlockBuilder, markdown_to_blocks};
pub use classify::block_to_block_type;
pub use to_html::{MarkdownError, block_to_html_node, markdown_to_html, markdown_to_html_node};
pub use types::BlockType;
