/// The markup kind of an inline [`Span`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Text outside any inline construct.
    Plain,
    /// `**bold**`
    Bold,
    /// `*italic*`
    Italic,
    /// `` `code` ``
    Code,
    /// `![alt](url)`
    Image,
    /// `[text](url)`
    Link,
}

/// An inline fragment of a text run, tagged with its markup kind.
///
/// Images and links carry their target in `url`; every other kind leaves it
/// `None`. Spans own their text: each tokenizer stage consumes the sequence
/// it is given and returns a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub kind: SpanKind,
    pub text: String,
    pub url: Option<String>,
}

impl Span {
    /// Creates a span of `kind` without a URL.
    pub fn new(kind: SpanKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            url: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Plain, text)
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Bold, text)
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Italic, text)
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Code, text)
    }

    /// An image span; `alt` becomes the span text.
    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Image,
            text: alt.into(),
            url: Some(url.into()),
        }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Link,
            text: text.into(),
            url: Some(url.into()),
        }
    }

    /// Returns true for spans later stages may still split.
    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}
