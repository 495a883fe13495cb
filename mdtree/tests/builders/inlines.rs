use crate::common::{convert, only_block};
use mdtree::build::Diagnostic;
use mdtree::tree::{Block, Inline, Node, NodeKind, Paragraph};

fn paragraph(conversion: &mdtree::Conversion) -> &Paragraph {
    match only_block(conversion) {
        Block::Paragraph(paragraph) => paragraph,
        other => panic!("expected paragraph, got {other:?}"),
    }
}

#[test]
fn spans_carry_their_plain_text() {
    let conversion = convert("a **b** *c* `d` ~~e~~\n");
    let paragraph = paragraph(&conversion);

    let spans: Vec<(NodeKind, &str)> = paragraph
        .children
        .iter()
        .map(|inline| (inline.kind(), inline.text()))
        .collect();
    assert_eq!(
        spans,
        vec![
            (NodeKind::Text, "a "),
            (NodeKind::Strong, "b"),
            (NodeKind::Text, " "),
            (NodeKind::Italic, "c"),
            (NodeKind::Text, " "),
            (NodeKind::InlineCode, "d"),
            (NodeKind::Text, " "),
            (NodeKind::Strikethrough, "e"),
        ]
    );
}

#[test]
fn nested_formatting_collapses_into_one_span() {
    let conversion = convert("**bold *and italic***\n");
    let paragraph = paragraph(&conversion);

    assert_eq!(paragraph.children.len(), 1);
    assert_eq!(paragraph.children[0].kind(), NodeKind::Strong);
    assert_eq!(paragraph.children[0].text(), "bold and italic");
}

#[test]
fn links_keep_destination() {
    let conversion = convert("see [the docs](https://example.com \"Docs\")\n");
    let paragraph = paragraph(&conversion);

    match &paragraph.children[1] {
        Inline::Link(link) => {
            assert_eq!(link.text, "the docs");
            assert_eq!(link.destination.as_deref(), Some("https://example.com"));
        }
        other => panic!("expected link, got {other:?}"),
    }
}

#[test]
fn images_prefer_title_over_alt_text() {
    let conversion = convert("![alt](a.png \"Title\") ![only alt](b.png)\n");
    let paragraph = paragraph(&conversion);

    let images: Vec<(&str, Option<&str>)> = paragraph
        .children
        .iter()
        .filter_map(|inline| match inline {
            Inline::Image(image) => Some((image.text.as_str(), image.source.as_deref())),
            _ => None,
        })
        .collect();
    assert_eq!(
        images,
        vec![("Title", Some("a.png")), ("only alt", Some("b.png"))]
    );
}

#[test]
fn soft_breaks_and_raw_html_are_dropped() {
    let conversion = convert("one\ntwo <b>x</b>\n");
    let paragraph = paragraph(&conversion);

    assert!(paragraph
        .children
        .iter()
        .all(|inline| inline.kind() == NodeKind::Text));
    assert_eq!(paragraph.text(), "onetwo x");
    assert_eq!(
        conversion.diagnostics,
        vec![
            Diagnostic::InlineDrop {
                kind: "softbreak".to_string()
            },
            Diagnostic::InlineDrop {
                kind: "html_inline".to_string()
            },
            Diagnostic::InlineDrop {
                kind: "html_inline".to_string()
            },
        ]
    );
}

#[test]
fn paragraph_children_can_be_filtered_after_build() {
    let conversion = convert("a **b** c **d**\n");
    let mut paragraph = paragraph(&conversion).clone();

    assert_eq!(paragraph.children.all_of(NodeKind::Strong).len(), 2);
    assert_eq!(paragraph.children.remove_all(NodeKind::Strong), 2);
    assert_eq!(paragraph.text(), "a  c ");
}
