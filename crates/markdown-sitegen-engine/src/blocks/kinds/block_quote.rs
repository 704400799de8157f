/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn is_quote_line(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Strips every `>` prefix from a line, with one optional space after
    /// each, returning the remaining content.
    ///
    /// Handles `> text`, `>> nested` and `> > spaced nested` alike; nesting
    /// is flattened.
    pub fn strip_prefixes(line: &str) -> &str {
        let mut rest = line;
        while let Some(after) = rest.trim_start_matches(' ').strip_prefix(Self::PREFIX) {
            rest = after.strip_prefix(' ').unwrap_or(after);
        }
        rest
    }
}
