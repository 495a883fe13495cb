use crate::common::{convert, convert_trimming, kinds, only_block};
use mdtree::build::{CodeTrim, Diagnostic};
use mdtree::tree::{Block, Node, NodeKind};

#[test]
fn headings_keep_level_and_flatten_inline_text() {
    let conversion = convert("# Hello *world*\n\n###### Six\n");

    let levels: Vec<(u8, &str)> = conversion
        .root
        .children
        .iter()
        .map(|block| match block {
            Block::Heading(heading) => (heading.level, heading.text.as_str()),
            other => panic!("expected heading, got {other:?}"),
        })
        .collect();
    assert_eq!(levels, vec![(1, "Hello world"), (6, "Six")]);
}

#[test]
fn fenced_code_keeps_language_and_loses_closing_newline() {
    let conversion = convert("```rust\nfn main() {}\n```\n");

    match only_block(&conversion) {
        Block::CodeBlock(code) => {
            assert_eq!(code.language.as_deref(), Some("rust"));
            assert_eq!(code.code, "fn main() {}");
        }
        other => panic!("expected code block, got {other:?}"),
    }
}

#[test]
fn indented_code_has_no_language() {
    let conversion = convert("    a\n    b\n");

    match only_block(&conversion) {
        Block::CodeBlock(code) => {
            assert_eq!(code.language, None);
            assert_eq!(code.code, "a\nb");
        }
        other => panic!("expected code block, got {other:?}"),
    }
}

#[test]
fn trailing_spaces_before_the_newline_depend_on_trim_mode() {
    let source = "```\nfoo   \n```\n";

    let reference = convert_trimming(source, CodeTrim::Reference);
    let corrected = convert_trimming(source, CodeTrim::TrailingWhitespace);

    match (only_block(&reference), only_block(&corrected)) {
        (Block::CodeBlock(reference), Block::CodeBlock(corrected)) => {
            assert_eq!(reference.code, "foo   ");
            assert_eq!(corrected.code, "foo");
        }
        other => panic!("expected code blocks, got {other:?}"),
    }
}

#[test]
fn block_quotes_recurse_and_take_their_id_first() {
    let conversion = convert("> quoted\n>\n> - item\n");

    let quote = match only_block(&conversion) {
        Block::BlockQuote(quote) => quote,
        other => panic!("expected block quote, got {other:?}"),
    };
    let child_kinds: Vec<NodeKind> = quote.children.iter().map(Node::kind).collect();
    assert_eq!(child_kinds, vec![NodeKind::Paragraph, NodeKind::List]);
    assert!(quote.children.iter().all(|child| child.id() > quote.id));
}

#[test]
fn unknown_blocks_fall_through_without_a_trace() {
    let conversion = convert("before\n\n***\n\nafter\n");

    assert_eq!(
        kinds(&conversion.root),
        vec![
            NodeKind::Root,
            NodeKind::Paragraph,
            NodeKind::Text,
            NodeKind::Paragraph,
            NodeKind::Text,
        ]
    );
    assert_eq!(
        conversion.diagnostics,
        vec![Diagnostic::BlockFallthrough {
            kind: "thematic_break".to_string()
        }]
    );
}

#[test]
fn front_matter_is_reported_and_skipped() {
    let conversion = convert("---\ntitle: x\n---\n\nBody\n");

    assert_eq!(conversion.root.children.len(), 1);
    assert_eq!(conversion.root.children[0].kind(), NodeKind::Paragraph);
    assert_eq!(conversion.diagnostics.len(), 1);
}

#[test]
fn ids_follow_construction_order() {
    let conversion = convert("# A\n\nB\n");
    let mut ids = Vec::new();
    mdtree::tree::walk(&conversion.root, |node| ids.push(node.id().index()));
    assert_eq!(ids, vec![0, 1, 2, 3]);
}
