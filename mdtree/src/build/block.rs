//! Block builder
//!
//! Dispatches each block node to its producer. Block quotes recurse into a fresh traversal of
//! their children; block kinds without a node are traversed in place.

use super::inline::build_paragraph;
use super::list::build_list;
use super::table::build_table;
use super::{CodeTrim, Context, Diagnostic};
use crate::parse::{ParseBlock, PlainText};
use crate::tree::{Block, BlockQuote, CodeBlock, Heading};

/// Build a sequence of block nodes.
pub fn build_blocks(nodes: &[ParseBlock], cx: &mut Context) -> Vec<Block> {
    let mut blocks = Vec::with_capacity(nodes.len());
    for node in nodes {
        blocks.extend(build_block(node, cx));
    }
    blocks
}

/// Build the blocks produced by one parse node: exactly one for every handled kind, any
/// number for a pass-through container.
pub fn build_block(node: &ParseBlock, cx: &mut Context) -> Vec<Block> {
    log::trace!("building {}", node.kind_name());

    let block = match node {
        ParseBlock::Heading { level, content } => Block::Heading(Heading {
            id: cx.next_id(),
            level: *level,
            text: content.plain_text(),
        }),

        ParseBlock::Paragraph { content } => Block::Paragraph(build_paragraph(content, cx)),

        ParseBlock::CodeBlock { info, literal } => Block::CodeBlock(CodeBlock {
            id: cx.next_id(),
            language: if info.is_empty() {
                None
            } else {
                Some(info.clone())
            },
            code: trim_code(literal, cx.options().code_trim),
        }),

        ParseBlock::List(list) => Block::List(build_list(list, 0, cx)),

        ParseBlock::Table(table) => Block::Table(build_table(table, cx)),

        ParseBlock::BlockQuote { children } => {
            let id = cx.next_id();
            Block::BlockQuote(BlockQuote {
                id,
                children: build_blocks(children, cx).into(),
            })
        }

        ParseBlock::Other { name, children } => {
            cx.report(Diagnostic::BlockFallthrough { kind: name.clone() });
            return build_blocks(children, cx);
        }
    };

    vec![block]
}

/// Trim the tail of a code block's content.
pub fn trim_code(code: &str, mode: CodeTrim) -> String {
    match mode {
        CodeTrim::Reference => {
            let trailing_spaces = code.chars().rev().take_while(|c| *c == ' ').count();
            let keep = code.chars().count().saturating_sub(trailing_spaces + 1);
            code.chars().take(keep).collect()
        }
        CodeTrim::TrailingWhitespace => code.trim_end().to_string(),
    }
}
