use std::sync::LazyLock;

use regex::Regex;

use crate::inline::types::SpanKind;

// `alt` excludes brackets and `url` excludes parentheses, so neither
// construct can contain a nested one.
static IMAGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid image regex")
});
static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid link regex"));

/// Which bracketed construct an extraction pass looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Image,
    Link,
}

/// A `[alt](url)` occurrence found in a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageLink<'t> {
    pub target: Target,
    pub alt: &'t str,
    pub url: &'t str,
}

impl Target {
    /// Prefix that turns a link into an image.
    pub const IMAGE_MARKER: char = '!';

    /// Span kind emitted for a match of this target.
    pub fn span_kind(self) -> SpanKind {
        match self {
            Target::Image => SpanKind::Image,
            Target::Link => SpanKind::Link,
        }
    }

    /// Finds the leftmost occurrence of this target in `text`.
    ///
    /// Links never match image syntax: a `[alt](url)` candidate directly
    /// after `!` is skipped and the scan resumes one byte past the
    /// candidate's opening bracket.
    pub fn find_first(self, text: &str) -> Option<ImageLink<'_>> {
        match self {
            Target::Image => IMAGE_PATTERN
                .captures(text)
                .map(|caps| self.match_of(&caps)),
            Target::Link => {
                let mut from = 0;
                while let Some(caps) = LINK_PATTERN.captures_at(text, from) {
                    let whole = caps.get(0)?;
                    if text[..whole.start()].ends_with(Self::IMAGE_MARKER) {
                        from = whole.start() + 1;
                        continue;
                    }
                    return Some(self.match_of(&caps));
                }
                None
            }
        }
    }

    fn match_of<'t>(self, caps: &regex::Captures<'t>) -> ImageLink<'t> {
        ImageLink {
            target: self,
            alt: caps.get(1).map_or("", |m| m.as_str()),
            url: caps.get(2).map_or("", |m| m.as_str()),
        }
    }
}

impl ImageLink<'_> {
    /// Rebuilds the Markdown source of this occurrence.
    pub fn literal(&self) -> String {
        match self.target {
            Target::Image => format!("{}[{}]({})", Target::IMAGE_MARKER, self.alt, self.url),
            Target::Link => format!("[{}]({})", self.alt, self.url),
        }
    }
}
