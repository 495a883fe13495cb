//! Inline builder
//!
//! Only seven inline kinds have a node. Text, strong, emphasis and inline code become spans
//! carrying their plain text, so anything nested inside them collapses to text. Everything
//! outside the seven is dropped.

use super::{Context, Diagnostic};
use crate::parse::{ParseInline, PlainText, STRIKETHROUGH_DELIMITER};
use crate::tree::{Children, Image, Inline, Link, Paragraph, Span};

/// Build a paragraph around a run of inlines.
pub fn build_paragraph(content: &[ParseInline], cx: &mut Context) -> Paragraph {
    let id = cx.next_id();
    Paragraph {
        id,
        children: build_inlines(content, cx).into(),
    }
}

pub fn build_inlines(nodes: &[ParseInline], cx: &mut Context) -> Children<Inline> {
    nodes
        .iter()
        .filter_map(|node| build_inline(node, cx))
        .collect()
}

/// Build one inline node, or `None` when its kind is dropped.
pub fn build_inline(node: &ParseInline, cx: &mut Context) -> Option<Inline> {
    let inline = match node {
        ParseInline::Text { text } => Inline::Text(span(cx, text.clone())),
        ParseInline::Strong { .. } => Inline::Strong(span(cx, node.plain_text())),
        ParseInline::Emphasis { .. } => Inline::Italic(span(cx, node.plain_text())),
        ParseInline::Code { literal } => Inline::InlineCode(span(cx, literal.clone())),
        ParseInline::Strikethrough { .. } => {
            Inline::Strikethrough(span(cx, strip_delimiters(&node.plain_text())))
        }
        ParseInline::Link { destination, .. } => Inline::Link(Link {
            id: cx.next_id(),
            text: node.plain_text(),
            destination: destination.clone(),
        }),
        ParseInline::Image { source, title, .. } => Inline::Image(Image {
            id: cx.next_id(),
            text: title.clone().unwrap_or_else(|| node.plain_text()),
            source: source.clone(),
        }),
        ParseInline::Other { name, .. } => {
            cx.report(Diagnostic::InlineDrop { kind: name.clone() });
            return None;
        }
    };
    Some(inline)
}

fn span(cx: &mut Context, text: String) -> Span {
    Span {
        id: cx.next_id(),
        text,
    }
}

/// Strip one leading and one trailing strikethrough delimiter.
pub fn strip_delimiters(raw: &str) -> String {
    let inner = raw.strip_prefix(STRIKETHROUGH_DELIMITER).unwrap_or(raw);
    let inner = inner
        .strip_suffix(STRIKETHROUGH_DELIMITER)
        .unwrap_or(inner);
    inner.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::Options;
    use crate::tree::{Node, NodeKind};

    fn build(nodes: &[ParseInline]) -> (Vec<Inline>, Vec<Diagnostic>) {
        let mut cx = Context::new(Options::default());
        let inlines = build_inlines(nodes, &mut cx).into_vec();
        (inlines, cx.into_diagnostics())
    }

    #[test]
    fn strikethrough_loses_exactly_one_delimiter_each_side() {
        let (inlines, _) = build(&[ParseInline::Strikethrough {
            children: vec![ParseInline::text("deleted")],
        }]);
        assert_eq!(inlines[0].kind(), NodeKind::Strikethrough);
        assert_eq!(inlines[0].text(), "deleted");
    }

    #[test]
    fn strip_delimiters_only_touches_the_ends() {
        assert_eq!(strip_delimiters("~deleted~"), "deleted");
        assert_eq!(strip_delimiters("~~x~~"), "~x~");
        assert_eq!(strip_delimiters("plain"), "plain");
        assert_eq!(strip_delimiters("~"), "");
    }

    #[test]
    fn strong_collapses_nested_link_to_text() {
        let (inlines, diagnostics) = build(&[ParseInline::Strong {
            children: vec![
                ParseInline::text("read "),
                ParseInline::Link {
                    destination: Some("https://example.com".to_string()),
                    title: None,
                    children: vec![ParseInline::text("this")],
                },
            ],
        }]);
        assert_eq!(inlines.len(), 1);
        assert_eq!(inlines[0].kind(), NodeKind::Strong);
        assert_eq!(inlines[0].text(), "read this");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn emphasis_becomes_italic_and_code_keeps_literal() {
        let (inlines, _) = build(&[
            ParseInline::Emphasis {
                children: vec![ParseInline::text("soft")],
            },
            ParseInline::Code {
                literal: "let x".to_string(),
            },
        ]);
        assert_eq!(inlines[0].kind(), NodeKind::Italic);
        assert_eq!(inlines[1].kind(), NodeKind::InlineCode);
        assert_eq!(inlines[1].text(), "let x");
    }

    #[test]
    fn link_destination_is_optional() {
        let (inlines, _) = build(&[ParseInline::Link {
            destination: None,
            title: Some("ignored".to_string()),
            children: vec![ParseInline::text("anchor")],
        }]);
        match &inlines[0] {
            Inline::Link(link) => {
                assert_eq!(link.text, "anchor");
                assert_eq!(link.destination, None);
            }
            other => panic!("Expected link, got {other:?}"),
        }
    }

    #[test]
    fn image_prefers_title_over_alt_text() {
        let (inlines, _) = build(&[
            ParseInline::Image {
                source: Some("a.png".to_string()),
                title: Some("Title".to_string()),
                children: vec![ParseInline::text("alt")],
            },
            ParseInline::Image {
                source: None,
                title: None,
                children: vec![ParseInline::text("alt")],
            },
        ]);
        let texts: Vec<_> = inlines.iter().map(Inline::text).collect();
        assert_eq!(texts, vec!["Title", "alt"]);
        match &inlines[1] {
            Inline::Image(image) => assert_eq!(image.source, None),
            other => panic!("Expected image, got {other:?}"),
        }
    }

    #[test]
    fn unknown_inlines_are_dropped_and_reported() {
        let (inlines, diagnostics) = build(&[
            ParseInline::text("a"),
            ParseInline::Other {
                name: "softbreak".to_string(),
                text: " ".to_string(),
            },
            ParseInline::text("b"),
        ]);
        let texts: Vec<_> = inlines.iter().map(Inline::text).collect();
        assert_eq!(texts, vec!["a", "b"]);
        assert_eq!(
            diagnostics,
            vec![Diagnostic::InlineDrop {
                kind: "softbreak".to_string()
            }]
        );
    }
}
