use crate::common::{convert, convert_nested, only_block};
use mdtree::build::Diagnostic;
use mdtree::tree::{Block, List, ListEntry, ListType, Node, NodeKind};

fn list(conversion: &mdtree::Conversion) -> &List {
    match only_block(conversion) {
        Block::List(list) => list,
        other => panic!("expected list, got {other:?}"),
    }
}

fn entry_summary(list: &List) -> Vec<String> {
    list.children
        .iter()
        .map(|entry| match entry {
            ListEntry::Item(item) => format!("item {}", item.paragraph.text()),
            ListEntry::List(sublist) => format!("list depth {}", sublist.depth),
        })
        .collect()
}

#[test]
fn sublists_follow_their_item_by_default() {
    let conversion = convert("- A\n  1. B\n- C\n");
    let list = list(&conversion);

    assert_eq!(list.list_type, ListType::Unordered);
    assert_eq!(list.depth, 0);
    assert_eq!(
        entry_summary(list),
        vec!["item A", "list depth 1", "item C"]
    );
    match &list.children[1] {
        ListEntry::List(sublist) => {
            assert_eq!(sublist.list_type, ListType::Ordered);
            assert_eq!(entry_summary(sublist), vec!["item B"]);
        }
        other => panic!("expected sublist, got {other:?}"),
    }
    assert!(list.items().all(|item| item.children.is_empty()));
}

#[test]
fn nested_layout_hangs_sublists_under_their_item() {
    let conversion = convert_nested("- A\n  1. B\n- C\n");
    let list = list(&conversion);

    assert_eq!(entry_summary(list), vec!["item A", "item C"]);
    let owner = list.items().next().expect("first item");
    assert_eq!(owner.children.len(), 1);
    assert_eq!(owner.children[0].depth, 1);
    assert_eq!(owner.children[0].list_type, ListType::Ordered);
}

#[test]
fn nested_layout_without_a_leading_paragraph_stays_flat() {
    let conversion = convert_nested("- - inner\n");
    let list = list(&conversion);

    assert_eq!(entry_summary(list), vec!["list depth 1"]);
}

#[test]
fn depth_grows_by_one_per_level() {
    let conversion = convert("- a\n  - b\n    - c\n");
    let mut depths = Vec::new();
    mdtree::tree::walk(&conversion.root, |node| {
        if let mdtree::tree::NodeRef::List(list) = node {
            depths.push(list.depth);
        }
    });
    // The top-level list is reached as a block, only sublists show up as lists.
    assert_eq!(depths, vec![1, 2]);
    assert_eq!(list(&conversion).depth, 0);
}

#[test]
fn every_item_paragraph_becomes_its_own_item() {
    let conversion = convert("- one\n\n  two\n- three\n");
    let list = list(&conversion);

    assert_eq!(
        entry_summary(list),
        vec!["item one", "item two", "item three"]
    );
    let ids: Vec<usize> = list.children.iter().map(|e| e.id().index()).collect();
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn other_item_children_are_dropped_and_reported() {
    let conversion = convert("- a\n\n  > quoted\n");
    let list = list(&conversion);

    assert_eq!(entry_summary(list), vec!["item a"]);
    assert!(list
        .children
        .iter()
        .all(|entry| entry.kind() == NodeKind::ListItem));
    assert_eq!(
        conversion.diagnostics,
        vec![Diagnostic::ListChildDrop {
            kind: "block_quote".to_string(),
            depth: 0
        }]
    );
}
