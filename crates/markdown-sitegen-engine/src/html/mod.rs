//! # HTML Node Tree
//!
//! A minimal tagged tree that serializes to an HTML fragment.
//!
//! - **`node`**: `HtmlNode` (Leaf / Parent) with ordered `Attributes`
//! - **`render`**: `render()` / `HtmlNode::to_html()`
//!
//! Values and attribute values are written verbatim. Callers that need
//! escaping (e.g. code block bodies) escape before building the node.

pub mod error;
pub mod node;
pub mod render;

pub use error::StructureError;
pub use node::{Attributes, HtmlNode, LeafNode, ParentNode};
pub use render::{attributes_to_html, render};
