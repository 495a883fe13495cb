//! Shared helpers for the integration tests.

use mdtree::build::{CodeTrim, ListLayout, Options};
use mdtree::tree::{walk, Block, NodeKind, Root};
use mdtree::{from_markdown, Conversion};

pub fn convert(source: &str) -> Conversion {
    from_markdown(source, &Options::default())
}

pub fn convert_nested(source: &str) -> Conversion {
    let options = Options {
        list_layout: ListLayout::Nested,
        ..Options::default()
    };
    from_markdown(source, &options)
}

pub fn convert_trimming(source: &str, code_trim: CodeTrim) -> Conversion {
    let options = Options {
        code_trim,
        ..Options::default()
    };
    from_markdown(source, &options)
}

/// The single top-level block of a one-block document.
pub fn only_block(conversion: &Conversion) -> &Block {
    assert_eq!(
        conversion.root.children.len(),
        1,
        "expected one block, got {:?}",
        conversion.root.children
    );
    &conversion.root.children[0]
}

/// Kinds of every node, in walk order.
pub fn kinds(root: &Root) -> Vec<NodeKind> {
    let mut kinds = Vec::new();
    walk(root, |node| kinds.push(node.kind()));
    kinds
}
