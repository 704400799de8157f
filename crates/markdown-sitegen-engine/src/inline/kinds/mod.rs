//! # Inline Kinds
//!
//! Inline constructs that own their syntax.
//!
//! ## Types
//!
//! - **`Emphasis`**: `BOLD = "**"`, `ITALIC = "*"`
//! - **`CodeSpan`**: `TICK = "`"`
//! - **`ImageLink`**: compiled `![alt](url)` / `[alt](url)` patterns
//!
//! ## Design Principle
//!
//! All delimiter constants and patterns live here, not scattered in parser
//! code. The tokenizer never hardcodes `**` or `` ` ``.

pub mod code_span;
pub mod emphasis;
pub mod image_link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use image_link::{ImageLink, Target};
