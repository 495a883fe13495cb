//! List builder
//!
//! Every paragraph directly under a source item becomes a [`ListItem`] of its own, appended to
//! the list. A nested list is built one level deeper and, with the default flattened layout,
//! appended to the same list right after the item it followed:
//!
//!     - A            List(depth 0)
//!       1. B           ├─ ListItem "A"
//!                      └─ List(depth 1, ordered)
//!                           └─ ListItem "B"
//!
//! Renderers must not assume a sublist is a child of the preceding item. With
//! [`ListLayout::Nested`] the sublist goes under that item instead.
//!
//! Any other child of a source item (code block, quote, heading, table, ...) is dropped and
//! reported as [`Diagnostic::ListChildDrop`]. It is not handed to a deeper list build, which
//! would only produce an empty sublist for a block that is not a list.

use super::inline::build_paragraph;
use super::{Context, Diagnostic, ListLayout};
use crate::parse::{ParseBlock, ParseList};
use crate::tree::{Children, List, ListEntry, ListItem, ListType};

/// Build a list at the given depth (0 for a document-level list).
pub fn build_list(list: &ParseList, depth: usize, cx: &mut Context) -> List {
    let id = cx.next_id();
    let list_type = if list.ordered {
        ListType::Ordered
    } else {
        ListType::Unordered
    };

    let nest = cx.options().list_layout == ListLayout::Nested;
    let mut children = Children::new();
    for item in &list.items {
        // The latest ListItem of this source item, held back so it can still take sublists.
        let mut pending: Option<ListItem> = None;

        for child in &item.children {
            match child {
                ParseBlock::Paragraph { content } => {
                    flush(&mut children, &mut pending);
                    let item_id = cx.next_id();
                    pending = Some(ListItem {
                        id: item_id,
                        paragraph: build_paragraph(content, cx),
                        children: Children::new(),
                    });
                }
                ParseBlock::List(sublist) => {
                    let nested = build_list(sublist, depth + 1, cx);
                    if nest {
                        if let Some(owner) = pending.as_mut() {
                            owner.children.push(nested);
                            continue;
                        }
                    }
                    flush(&mut children, &mut pending);
                    children.push(ListEntry::List(nested));
                }
                other => cx.report(Diagnostic::ListChildDrop {
                    kind: other.kind_name().to_string(),
                    depth,
                }),
            }
        }
        flush(&mut children, &mut pending);
    }

    List {
        id,
        list_type,
        depth,
        children,
    }
}

fn flush(children: &mut Children<ListEntry>, pending: &mut Option<ListItem>) {
    if let Some(item) = pending.take() {
        children.push(ListEntry::Item(item));
    }
}
