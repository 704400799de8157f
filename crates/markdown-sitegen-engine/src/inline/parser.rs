use super::{
    error::FormatError,
    extract::{extract_images, extract_links},
    kinds::{CodeSpan, Emphasis},
    splitter::split_delimiter,
    types::{Span, SpanKind},
};

/// Tokenizes one text run into a sequence of [`Span`]s.
///
/// # Precedence
/// Bold, italic and code are split in that order, then images, then links.
/// Each pass only looks at spans still plain after the previous ones, so
/// backticks inside a bold run stay literal text of that run.
///
/// # Errors
/// [`FormatError`] if any delimiter is left unclosed.
pub fn tokenize(text: &str) -> Result<Vec<Span>, FormatError> {
    let spans = vec![Span::plain(text)];
    let spans = split_delimiter(spans, Emphasis::BOLD, SpanKind::Bold)?;
    let spans = split_delimiter(spans, Emphasis::ITALIC, SpanKind::Italic)?;
    let spans = split_delimiter(spans, CodeSpan::TICK, SpanKind::Code)?;
    let spans = extract_images(spans);
    Ok(extract_links(spans))
}
