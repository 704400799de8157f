//! Block types that own their syntax.
//!
//! Classification and the builder call into these; neither hardcodes `#`,
//! `>` or fence strings.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind};
pub use heading::Heading;
pub use list::{OrderedList, UnorderedList};
