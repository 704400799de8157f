//! Mapping from inline [`Span`]s to [`HtmlNode`]s.

use crate::{
    html::HtmlNode,
    inline::{FormatError, Span, SpanKind, tokenize},
};

/// Converts one span into the leaf that displays it.
///
/// Images become an empty `img` leaf carrying `src` then `alt`.
pub fn span_to_html_node(span: Span) -> HtmlNode {
    let Span { kind, text, url } = span;
    match kind {
        SpanKind::Plain => HtmlNode::text(text),
        SpanKind::Bold => HtmlNode::leaf("b", text),
        SpanKind::Italic => HtmlNode::leaf("i", text),
        SpanKind::Code => HtmlNode::leaf("code", text),
        SpanKind::Link => HtmlNode::leaf("a", text).with_attribute("href", url.unwrap_or_default()),
        SpanKind::Image => HtmlNode::leaf("img", "")
            .with_attribute("src", url.unwrap_or_default())
            .with_attribute("alt", text),
    }
}

/// Tokenizes `text` and converts every span, in order.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, FormatError> {
    Ok(tokenize(text)?.into_iter().map(span_to_html_node).collect())
}
