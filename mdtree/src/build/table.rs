//! Table builder
//!
//! Header cells become paragraphs in column order. Body cells become paragraphs shared between
//! two views: `body[row][column]` and the flat `children` sequence in row-major order.

use super::inline::build_paragraph;
use super::Context;
use crate::parse::ParseTable;
use crate::tree::{Children, Table};
use std::rc::Rc;

pub fn build_table(table: &ParseTable, cx: &mut Context) -> Table {
    let id = cx.next_id();
    let headers = table
        .head
        .iter()
        .map(|cell| build_paragraph(&cell.content, cx))
        .collect();

    let mut body = Vec::with_capacity(table.rows.len());
    let mut children = Children::new();
    for row in &table.rows {
        let mut cells = Vec::with_capacity(row.len());
        for cell in row {
            let paragraph = Rc::new(build_paragraph(&cell.content, cx));
            children.push(Rc::clone(&paragraph));
            cells.push(paragraph);
        }
        body.push(cells);
    }

    Table {
        id,
        alignments: table.alignments.clone(),
        headers,
        body,
        children,
    }
}
