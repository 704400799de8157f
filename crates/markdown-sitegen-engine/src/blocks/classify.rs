use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockType,
};

/// Classifies a block produced by [`markdown_to_blocks`](super::markdown_to_blocks).
///
/// Headings and fences are recognized from the block's opening, so a fence
/// left open at the end of input is still code. Quotes and lists need every
/// line to carry the marker, otherwise the block is a paragraph.
pub fn block_to_block_type(block: &str) -> BlockType {
    if let Some((level, _)) = Heading::parse(block) {
        return BlockType::Heading { level };
    }
    if CodeFence::fenced(block).is_some() {
        return BlockType::Code;
    }

    let lines: Vec<&str> = block.lines().collect();
    if lines.is_empty() {
        return BlockType::Paragraph;
    }
    if lines.iter().all(|line| BlockQuote::is_quote_line(line)) {
        return BlockType::Quote;
    }
    if lines.iter().all(|line| UnorderedList::item(line).is_some()) {
        return BlockType::UnorderedList;
    }
    if lines
        .iter()
        .enumerate()
        .all(|(i, line)| OrderedList::item(line, i + 1).is_some())
    {
        return BlockType::OrderedList;
    }
    BlockType::Paragraph
}
