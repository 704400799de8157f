/// A node tree that cannot be serialized.
///
/// Signals a bug in whatever built the tree, never malformed user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    #[error("Invalid HTML: leaf node has no value")]
    NoValue,
    #[error("Invalid HTML: parent node has no tag")]
    NoTag,
    #[error("Invalid HTML: parent node has no children")]
    NoChildren,
}
