use super::{kinds::Target, types::Span};

/// Splits `![alt](url)` images out of every plain span.
pub fn extract_images(spans: Vec<Span>) -> Vec<Span> {
    extract(spans, Target::Image)
}

/// Splits `[text](url)` links out of every plain span. Image syntax is left
/// alone, so run [`extract_images`] first.
pub fn extract_links(spans: Vec<Span>) -> Vec<Span> {
    extract(spans, Target::Link)
}

fn extract(spans: Vec<Span>, target: Target) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if span.is_plain() {
            extract_from_text(&span.text, target, &mut out);
        } else {
            out.push(span);
        }
    }
    out
}

/// Consumes `text` front to back, pushing the plain text before each match
/// followed by the match itself.
fn extract_from_text(text: &str, target: Target, out: &mut Vec<Span>) {
    let mut remaining = text;
    loop {
        let Some(found) = target.find_first(remaining) else {
            if !remaining.is_empty() {
                out.push(Span::plain(remaining));
            }
            return;
        };

        let literal = found.literal();
        if literal.is_empty() {
            return;
        }
        // The literal is split at its first occurrence, which may sit before
        // the match itself when the same text also appears as an image.
        let Some((before, after)) = remaining.split_once(literal.as_str()) else {
            out.push(Span::plain(remaining));
            return;
        };

        if !before.is_empty() {
            out.push(Span::plain(before));
        }
        out.push(Span {
            kind: target.span_kind(),
            text: found.alt.to_string(),
            url: Some(found.url.to_string()),
        });
        remaining = after;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inline::types::SpanKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn split_images() {
        let spans = vec![Span::plain(
            "This is text with an ![image](https://i.imgur.com/zjjcJKZ.png) and another ![second image](https://i.imgur.com/3elNhQu.png)",
        )];
        assert_eq!(
            extract_images(spans),
            vec![
                Span::plain("This is text with an "),
                Span::image("image", "https://i.imgur.com/zjjcJKZ.png"),
                Span::plain(" and another "),
                Span::image("second image", "https://i.imgur.com/3elNhQu.png"),
            ]
        );
    }

    #[test]
    fn split_links() {
        let spans = vec![Span::plain(
            "This is text with a [link](https://boot.dev) and [another link](https://blog.boot.dev) with text that follows",
        )];
        assert_eq!(
            extract_links(spans),
            vec![
                Span::plain("This is text with a "),
                Span::link("link", "https://boot.dev"),
                Span::plain(" and "),
                Span::link("another link", "https://blog.boot.dev"),
                Span::plain(" with text that follows"),
            ]
        );
    }

    #[test]
    fn image_only() {
        let spans = vec![Span::plain("![image](https://www.example.COM/IMAGE.PNG)")];
        assert_eq!(
            extract_images(spans),
            vec![Span::image("image", "https://www.example.COM/IMAGE.PNG")]
        );
    }

    #[test]
    fn links_ignore_images() {
        let spans = vec![Span::plain("![a](u)")];
        assert_eq!(extract_links(spans), vec![Span::plain("![a](u)")]);
    }

    #[test]
    fn images_ignore_links() {
        let spans = vec![Span::plain("see [a](u)")];
        assert_eq!(extract_images(spans), vec![Span::plain("see [a](u)")]);
    }

    #[test]
    fn text_without_matches_is_unchanged() {
        let spans = vec![Span::plain("nothing to see [here] (really)")];
        assert_eq!(extract_links(spans.clone()), spans);
    }

    #[test]
    fn typed_spans_pass_through() {
        let spans = vec![Span::code("[a](u)"), Span::plain("[b](v)")];
        assert_eq!(
            extract_links(spans),
            vec![Span::code("[a](u)"), Span::link("b", "v")]
        );
    }

    #[test]
    fn empty_plain_span_disappears() {
        assert!(extract_links(vec![Span::plain("")]).is_empty());
    }

    #[test]
    fn repeated_link_text() {
        let spans = vec![Span::plain("[a](u)[a](u)")];
        assert_eq!(
            extract_links(spans),
            vec![Span::link("a", "u"), Span::link("a", "u")]
        );
    }

    #[test]
    fn link_literal_shared_with_image_splits_at_first_occurrence() {
        let spans = vec![Span::plain("![a](u) and [a](u)")];
        assert_eq!(
            extract_links(spans),
            vec![
                Span::plain("!"),
                Span::link("a", "u"),
                Span::plain(" and "),
                Span::link("a", "u"),
            ]
        );
    }

    #[test]
    fn kinds_match_target() {
        let out = extract_images(vec![Span::plain("![x](y)")]);
        assert_eq!(out[0].kind, SpanKind::Image);
        let out = extract_links(vec![Span::plain("[x](y)")]);
        assert_eq!(out[0].kind, SpanKind::Link);
    }
}
