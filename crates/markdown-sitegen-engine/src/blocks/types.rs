/// The kind of a top-level block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    /// Default when no other block opener matches.
    Paragraph,
    /// `#` through `######`.
    Heading { level: u8 },
    /// A fenced code block (``` or ~~~).
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `* ` or `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, … in order.
    OrderedList,
}
