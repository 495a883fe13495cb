//! Input parse tree
//!
//! The tree the builders consume. It is the boundary to the markdown grammar: whatever parser
//! is used, its output is lowered into these closed enums first (see [`markdown`] for the
//! lowering of the comrak AST).
//!
//! Block kinds:  Heading, Paragraph, CodeBlock, List, BlockQuote, Table
//! Inline kinds: Text, Strong, Emphasis, Strikethrough, Link, Code, Image
//!
//! Kinds outside those sets survive as `Other` nodes carrying the parser's name for them, so
//! that the builders can decide what to do with them (pass-through for blocks, drop for
//! inlines) and report it.
//!
//! Every text-bearing node exposes a plain-text projection through [`PlainText`].

pub mod markdown;

use serde::Serialize;

/// A parsed document: the ordered block children of the document node.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ParseDocument {
    pub children: Vec<ParseBlock>,
}

/// A block-level parse node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum ParseBlock {
    Heading {
        level: u8,
        content: Vec<ParseInline>,
    },
    Paragraph {
        content: Vec<ParseInline>,
    },
    CodeBlock {
        info: String,
        literal: String,
    },
    List(ParseList),
    BlockQuote {
        children: Vec<ParseBlock>,
    },
    Table(ParseTable),
    /// A block kind the semantic tree has no node for.
    Other {
        name: String,
        children: Vec<ParseBlock>,
    },
}

/// A list node with its items.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ParseList {
    pub ordered: bool,
    pub items: Vec<ParseItem>,
}

/// A list item: its ordered block children.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ParseItem {
    pub children: Vec<ParseBlock>,
}

/// Column alignment declared in a table's delimiter row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Alignment {
    #[default]
    None,
    Left,
    Center,
    Right,
}

/// A table: one head row and the body rows. Each cell is a run of inlines.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ParseTable {
    pub alignments: Vec<Alignment>,
    pub head: Vec<ParseCell>,
    pub rows: Vec<Vec<ParseCell>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ParseCell {
    pub content: Vec<ParseInline>,
}

/// An inline parse node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum ParseInline {
    Text {
        text: String,
    },
    Strong {
        children: Vec<ParseInline>,
    },
    Emphasis {
        children: Vec<ParseInline>,
    },
    Strikethrough {
        children: Vec<ParseInline>,
    },
    Code {
        literal: String,
    },
    Link {
        destination: Option<String>,
        title: Option<String>,
        children: Vec<ParseInline>,
    },
    Image {
        source: Option<String>,
        title: Option<String>,
        children: Vec<ParseInline>,
    },
    /// An inline kind the semantic tree has no node for. `text` is its plain-text projection.
    Other {
        name: String,
        text: String,
    },
}

impl ParseBlock {
    /// Name of the node kind, as used in diagnostics.
    pub fn kind_name(&self) -> &str {
        match self {
            ParseBlock::Heading { .. } => "heading",
            ParseBlock::Paragraph { .. } => "paragraph",
            ParseBlock::CodeBlock { .. } => "code_block",
            ParseBlock::List(_) => "list",
            ParseBlock::BlockQuote { .. } => "block_quote",
            ParseBlock::Table(_) => "table",
            ParseBlock::Other { name, .. } => name,
        }
    }

    /// Number of parse nodes in this subtree, this one included.
    pub fn node_count(&self) -> usize {
        let inner: usize = match self {
            ParseBlock::Heading { content, .. } | ParseBlock::Paragraph { content } => {
                content.iter().map(ParseInline::node_count).sum()
            }
            ParseBlock::CodeBlock { .. } => 0,
            ParseBlock::List(list) => list
                .items
                .iter()
                .map(|item| 1 + item.children.iter().map(ParseBlock::node_count).sum::<usize>())
                .sum(),
            ParseBlock::BlockQuote { children } | ParseBlock::Other { children, .. } => {
                children.iter().map(ParseBlock::node_count).sum()
            }
            ParseBlock::Table(table) => table
                .head
                .iter()
                .chain(table.rows.iter().flatten())
                .map(|cell| 1 + cell.content.iter().map(ParseInline::node_count).sum::<usize>())
                .sum::<usize>()
                + 1
                + table.rows.len(),
        };
        1 + inner
    }
}

impl ParseInline {
    pub fn kind_name(&self) -> &str {
        match self {
            ParseInline::Text { .. } => "text",
            ParseInline::Strong { .. } => "strong",
            ParseInline::Emphasis { .. } => "emph",
            ParseInline::Strikethrough { .. } => "strikethrough",
            ParseInline::Code { .. } => "code",
            ParseInline::Link { .. } => "link",
            ParseInline::Image { .. } => "image",
            ParseInline::Other { name, .. } => name,
        }
    }

    pub fn node_count(&self) -> usize {
        let inner: usize = match self {
            ParseInline::Strong { children }
            | ParseInline::Emphasis { children }
            | ParseInline::Strikethrough { children }
            | ParseInline::Link { children, .. }
            | ParseInline::Image { children, .. } => {
                children.iter().map(ParseInline::node_count).sum()
            }
            _ => 0,
        };
        1 + inner
    }

    /// Convenience constructor for a text run.
    pub fn text(text: impl Into<String>) -> Self {
        ParseInline::Text { text: text.into() }
    }
}

impl ParseDocument {
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(ParseBlock::node_count).sum::<usize>()
    }
}

/// The flattened, un-styled text content of a node.
pub trait PlainText {
    fn plain_text(&self) -> String {
        let mut out = String::new();
        self.write_plain_text(&mut out);
        out
    }

    fn write_plain_text(&self, out: &mut String);
}

/// Strikethrough delimiter as it appears in a strikethrough node's plain text.
pub const STRIKETHROUGH_DELIMITER: char = '~';

impl PlainText for ParseInline {
    fn write_plain_text(&self, out: &mut String) {
        match self {
            ParseInline::Text { text } => out.push_str(text),
            ParseInline::Code { literal } => out.push_str(literal),
            ParseInline::Other { text, .. } => out.push_str(text),
            ParseInline::Strikethrough { children } => {
                // The raw text of a strikethrough keeps one delimiter on each side.
                out.push(STRIKETHROUGH_DELIMITER);
                children.write_plain_text(out);
                out.push(STRIKETHROUGH_DELIMITER);
            }
            ParseInline::Strong { children }
            | ParseInline::Emphasis { children }
            | ParseInline::Link { children, .. }
            | ParseInline::Image { children, .. } => children.write_plain_text(out),
        }
    }
}

impl PlainText for [ParseInline] {
    fn write_plain_text(&self, out: &mut String) {
        for inline in self {
            inline.write_plain_text(out);
        }
    }
}

impl PlainText for Vec<ParseInline> {
    fn write_plain_text(&self, out: &mut String) {
        self.as_slice().write_plain_text(out)
    }
}

impl PlainText for ParseCell {
    fn write_plain_text(&self, out: &mut String) {
        self.content.write_plain_text(out)
    }
}
