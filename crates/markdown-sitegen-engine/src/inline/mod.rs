//! # Inline Parsing
//!
//! Splits a single text run (a paragraph line, a heading, a list item) into
//! typed [`Span`]s.
//!
//! ## Pipeline
//!
//! The run enters as one plain span and passes through five stages, each
//! re-examining only spans that are still plain:
//!
//! 1. `**` → Bold
//! 2. `*` → Italic
//! 3. `` ` `` → Code
//! 4. `![alt](url)` → Image
//! 5. `[text](url)` → Link
//!
//! ## Modules
//!
//! - **`types`**: `Span` and `SpanKind`
//! - **`kinds`**: delimiter constants and the image/link patterns
//! - **`splitter`**: `split_delimiter()` for stages 1–3
//! - **`extract`**: `extract_images()` / `extract_links()` for stages 4–5
//! - **`parser`**: `tokenize()` main entry point
//!
//! Delimiters do not nest: `***x***` is not bold-italic.

pub mod error;
pub mod extract;
pub mod kinds;
pub mod parser;
pub mod splitter;
pub mod types;

pub use error::FormatError;
pub use extract::{extract_images, extract_links};
pub use parser::tokenize;
pub use splitter::split_delimiter;
pub use types::{Span, SpanKind};
