use super::{
    error::FormatError,
    types::{Span, SpanKind},
};

/// Splits every plain span in `spans` on `delimiter`.
///
/// Sections at odd positions become spans of `kind`, the rest stay plain.
/// Empty sections are dropped and non-plain spans pass through untouched.
///
/// # Errors
/// [`FormatError::Unclosed`] if any plain span holds an odd number of
/// delimiters, [`FormatError::EmptyDelimiter`] for `""`.
pub fn split_delimiter(
    spans: Vec<Span>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<Span>, FormatError> {
    if delimiter.is_empty() {
        return Err(FormatError::EmptyDelimiter);
    }

    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let sections: Vec<&str> = span.text.split(delimiter).collect();
        if sections.len() % 2 == 0 {
            return Err(FormatError::Unclosed {
                delimiter: delimiter.to_string(),
            });
        }

        out.extend(
            sections
                .into_iter()
                .enumerate()
                .filter(|(_, section)| !section.is_empty())
                .map(|(i, section)| {
                    let section_kind = if i % 2 == 0 { SpanKind::Plain } else { kind };
                    Span::new(section_kind, section)
                }),
        );
    }
    Ok(out)
}
