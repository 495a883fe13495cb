use crate::common::{convert, only_block};
use mdtree::parse::Alignment;
use mdtree::tree::{Block, NodeKind, Table};
use std::rc::Rc;

const SOURCE: &str = "| a | b |\n| :- | -: |\n| 1 | **2** |\n| 3 | 4 |\n";

fn table(conversion: &mdtree::Conversion) -> &Table {
    match only_block(conversion) {
        Block::Table(table) => table,
        other => panic!("expected table, got {other:?}"),
    }
}

#[test]
fn header_and_body_are_split() {
    let conversion = convert(SOURCE);
    let table = table(&conversion);

    let headers: Vec<String> = table.headers.iter().map(|p| p.text()).collect();
    assert_eq!(headers, vec!["a", "b"]);
    assert_eq!(table.body.len(), 2);
    assert_eq!(table.alignments, vec![Alignment::Left, Alignment::Right]);
}

#[test]
fn flat_children_share_body_cells() {
    let conversion = convert(SOURCE);
    let table = table(&conversion);

    assert_eq!(table.children.len(), table.cell_count());
    let mut flat = table.children.iter();
    for row in &table.body {
        for cell in row {
            let shared = flat.next().expect("flat cell");
            assert!(Rc::ptr_eq(cell, shared));
        }
    }
    assert!(flat.next().is_none());
}

#[test]
fn cells_keep_inline_formatting() {
    let conversion = convert(SOURCE);
    let table = table(&conversion);

    let cell = &table.body[0][1];
    assert_eq!(cell.children.len(), 1);
    assert_eq!(cell.children[0].text(), "2");
    assert!(cell.children.first_of(NodeKind::Strong).is_some());
}

#[test]
fn header_ids_come_before_body_ids() {
    let conversion = convert(SOURCE);
    let table = table(&conversion);

    let last_header = table.headers.iter().map(|p| p.id).max().expect("headers");
    let first_cell = table.children.iter().map(|p| p.id).min().expect("cells");
    assert!(table.id < last_header);
    assert!(last_header < first_cell);
}
