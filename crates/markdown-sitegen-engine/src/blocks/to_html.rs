use crate::{
    convert::text_to_children,
    html::{HtmlNode, StructureError},
    inline::FormatError,
};

use super::{
    builder::markdown_to_blocks,
    classify::block_to_block_type,
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockType,
};

/// A document that could not be converted to HTML.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkdownError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Structure(#[from] StructureError),
}

/// Converts a whole document into a `div` holding one node per block.
///
/// # Errors
/// The first block whose inline markup fails to tokenize aborts the
/// document.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, MarkdownError> {
    let children = markdown_to_blocks(markdown)
        .iter()
        .map(|block| block_to_html_node(block))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent("div", children))
}

/// Converts and renders a whole document.
pub fn markdown_to_html(markdown: &str) -> Result<String, MarkdownError> {
    Ok(markdown_to_html_node(markdown)?.to_html()?)
}

/// Converts one block into its HTML element.
pub fn block_to_html_node(block: &str) -> Result<HtmlNode, FormatError> {
    let node = match block_to_block_type(block) {
        BlockType::Paragraph => HtmlNode::parent("p", text_to_children(&join_lines(block.lines()))?),
        BlockType::Heading { level } => {
            let text = Heading::parse(block).map_or(block, |(_, text)| text);
            HtmlNode::parent(format!("h{level}"), text_to_children(&join_lines(text.lines()))?)
        }
        BlockType::Code => code_to_html_node(block),
        BlockType::Quote => {
            let text = join_lines(block.lines().map(BlockQuote::strip_prefixes));
            HtmlNode::parent("blockquote", text_to_children(&text)?)
        }
        BlockType::UnorderedList => {
            let items = block.lines().filter_map(UnorderedList::item);
            HtmlNode::parent("ul", list_items(items)?)
        }
        BlockType::OrderedList => {
            let items = block
                .lines()
                .enumerate()
                .filter_map(|(i, line)| OrderedList::item(line, i + 1));
            HtmlNode::parent("ol", list_items(items)?)
        }
    };
    Ok(node)
}

/// `<pre><code>` with the fenced body escaped; code is never tokenized.
fn code_to_html_node(block: &str) -> HtmlNode {
    let body = html_escape::encode_text(CodeFence::body(block)).into_owned();
    let mut code = HtmlNode::leaf("code", body);
    if let Some(info) = CodeFence::info(block) {
        code = code.with_attribute("class", format!("language-{info}"));
    }
    HtmlNode::parent("pre", vec![code])
}

fn list_items<'a>(items: impl Iterator<Item = &'a str>) -> Result<Vec<HtmlNode>, FormatError> {
    items
        .map(|item| Ok(HtmlNode::parent("li", text_to_children(item)?)))
        .collect()
}

/// Trims each line and joins the non-empty ones with single spaces.
fn join_lines<'a>(lines: impl Iterator<Item = &'a str>) -> String {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
