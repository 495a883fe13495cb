//! Core data structures of the semantic tree.

use super::{Children, Node, NodeId, NodeKind};
use crate::parse::Alignment;
use serde::Serialize;
use std::rc::Rc;

/// The top-level container.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Root {
    pub id: NodeId,
    pub children: Children<Block>,
}

/// A block-level semantic node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Block {
    Heading(Heading),
    Paragraph(Paragraph),
    CodeBlock(CodeBlock),
    List(List),
    Table(Table),
    BlockQuote(BlockQuote),
}

/// A heading. Inline formatting is flattened into `text`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heading {
    pub id: NodeId,
    pub level: u8,
    pub text: String,
}

/// A paragraph of inline nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paragraph {
    pub id: NodeId,
    pub children: Children<Inline>,
}

/// An inline semantic node.
///
/// Text, Strong, Italic, InlineCode and Strikethrough carry the same [`Span`] payload and only
/// differ by their tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Inline {
    Text(Span),
    Strong(Span),
    Italic(Span),
    InlineCode(Span),
    Strikethrough(Span),
    Link(Link),
    Image(Image),
}

/// Plain text run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Span {
    pub id: NodeId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub id: NodeId,
    pub text: String,
    pub destination: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Image {
    pub id: NodeId,
    /// Image title, or its alt text when no title was given.
    pub text: String,
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeBlock {
    pub id: NodeId,
    pub language: Option<String>,
    pub code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListType {
    Ordered,
    Unordered,
}

/// A list at a given nesting depth (0 for a document-level list).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct List {
    pub id: NodeId,
    pub list_type: ListType,
    pub depth: usize,
    pub children: Children<ListEntry>,
}

/// A child of a [`List`].
///
/// With the flattened list layout, sublists sit here next to the items they followed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum ListEntry {
    Item(ListItem),
    List(List),
}

/// A list item holding the paragraph that leads it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    pub id: NodeId,
    pub paragraph: Paragraph,
    /// Sublists owned by this item. Only filled with the nested list layout.
    pub children: Children<List>,
}

/// A table with three views of its body cells: `body` (row-major), `children` (flat, document
/// order). Both hold the same `Rc` for a given cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub id: NodeId,
    pub alignments: Vec<Alignment>,
    pub headers: Vec<Paragraph>,
    pub body: Vec<Vec<Rc<Paragraph>>>,
    pub children: Children<Rc<Paragraph>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockQuote {
    pub id: NodeId,
    pub children: Children<Block>,
}

macro_rules! impl_node {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Node for $ty {
                fn id(&self) -> NodeId {
                    self.id
                }

                fn kind(&self) -> NodeKind {
                    NodeKind::$kind
                }
            }
        )*
    };
}

impl_node! {
    Root => Root,
    Heading => Heading,
    Paragraph => Paragraph,
    Link => Link,
    Image => Image,
    CodeBlock => CodeBlock,
    List => List,
    ListItem => ListItem,
    Table => Table,
    BlockQuote => BlockQuote,
}

impl Node for Block {
    fn id(&self) -> NodeId {
        match self {
            Block::Heading(node) => node.id,
            Block::Paragraph(node) => node.id,
            Block::CodeBlock(node) => node.id,
            Block::List(node) => node.id,
            Block::Table(node) => node.id,
            Block::BlockQuote(node) => node.id,
        }
    }

    fn kind(&self) -> NodeKind {
        match self {
            Block::Heading(_) => NodeKind::Heading,
            Block::Paragraph(_) => NodeKind::Paragraph,
            Block::CodeBlock(_) => NodeKind::CodeBlock,
            Block::List(_) => NodeKind::List,
            Block::Table(_) => NodeKind::Table,
            Block::BlockQuote(_) => NodeKind::BlockQuote,
        }
    }
}

impl Node for Inline {
    fn id(&self) -> NodeId {
        match self {
            Inline::Text(span)
            | Inline::Strong(span)
            | Inline::Italic(span)
            | Inline::InlineCode(span)
            | Inline::Strikethrough(span) => span.id,
            Inline::Link(link) => link.id,
            Inline::Image(image) => image.id,
        }
    }

    fn kind(&self) -> NodeKind {
        match self {
            Inline::Text(_) => NodeKind::Text,
            Inline::Strong(_) => NodeKind::Strong,
            Inline::Italic(_) => NodeKind::Italic,
            Inline::InlineCode(_) => NodeKind::InlineCode,
            Inline::Strikethrough(_) => NodeKind::Strikethrough,
            Inline::Link(_) => NodeKind::Link,
            Inline::Image(_) => NodeKind::Image,
        }
    }
}

impl Node for ListEntry {
    fn id(&self) -> NodeId {
        match self {
            ListEntry::Item(item) => item.id,
            ListEntry::List(list) => list.id,
        }
    }

    fn kind(&self) -> NodeKind {
        match self {
            ListEntry::Item(_) => NodeKind::ListItem,
            ListEntry::List(_) => NodeKind::List,
        }
    }
}

impl Inline {
    /// The text carried by this node.
    pub fn text(&self) -> &str {
        match self {
            Inline::Text(span)
            | Inline::Strong(span)
            | Inline::Italic(span)
            | Inline::InlineCode(span)
            | Inline::Strikethrough(span) => &span.text,
            Inline::Link(link) => &link.text,
            Inline::Image(image) => &image.text,
        }
    }
}

impl Paragraph {
    /// Concatenated text of the paragraph's inline children.
    pub fn text(&self) -> String {
        self.children.iter().map(Inline::text).collect()
    }
}

impl List {
    pub fn items(&self) -> impl Iterator<Item = &ListItem> {
        self.children.iter().filter_map(|entry| match entry {
            ListEntry::Item(item) => Some(item),
            ListEntry::List(_) => None,
        })
    }
}

impl Table {
    /// Number of body cells across all rows.
    pub fn cell_count(&self) -> usize {
        self.body.iter().map(Vec::len).sum()
    }
}

/// Visits every node of a tree in document order.
///
/// Table cells are visited once, through the `body` view.
pub fn walk<'a>(root: &'a Root, mut visit: impl FnMut(NodeRef<'a>)) {
    visit(NodeRef::Root(root));
    for block in &root.children {
        walk_block(block, &mut visit);
    }
}

/// A borrowed reference to any semantic node.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Root(&'a Root),
    Block(&'a Block),
    Paragraph(&'a Paragraph),
    Inline(&'a Inline),
    List(&'a List),
    ListItem(&'a ListItem),
}

impl NodeRef<'_> {
    pub fn id(&self) -> NodeId {
        match self {
            NodeRef::Root(node) => node.id(),
            NodeRef::Block(node) => node.id(),
            NodeRef::Paragraph(node) => node.id(),
            NodeRef::Inline(node) => node.id(),
            NodeRef::List(node) => node.id(),
            NodeRef::ListItem(node) => node.id(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            NodeRef::Root(node) => node.kind(),
            NodeRef::Block(node) => node.kind(),
            NodeRef::Paragraph(node) => node.kind(),
            NodeRef::Inline(node) => node.kind(),
            NodeRef::List(node) => node.kind(),
            NodeRef::ListItem(node) => node.kind(),
        }
    }
}

fn walk_block<'a>(block: &'a Block, visit: &mut impl FnMut(NodeRef<'a>)) {
    visit(NodeRef::Block(block));
    match block {
        Block::Heading(_) | Block::CodeBlock(_) => {}
        Block::Paragraph(paragraph) => walk_inlines(paragraph, visit),
        Block::List(list) => walk_list_children(list, visit),
        Block::Table(table) => {
            for header in &table.headers {
                walk_paragraph(header, visit);
            }
            for cell in table.body.iter().flatten() {
                walk_paragraph(cell, visit);
            }
        }
        Block::BlockQuote(quote) => {
            for child in &quote.children {
                walk_block(child, visit);
            }
        }
    }
}

fn walk_list<'a>(list: &'a List, visit: &mut impl FnMut(NodeRef<'a>)) {
    visit(NodeRef::List(list));
    walk_list_children(list, visit);
}

fn walk_list_children<'a>(list: &'a List, visit: &mut impl FnMut(NodeRef<'a>)) {
    for entry in &list.children {
        match entry {
            ListEntry::Item(item) => {
                visit(NodeRef::ListItem(item));
                walk_paragraph(&item.paragraph, visit);
                for sublist in &item.children {
                    walk_list(sublist, visit);
                }
            }
            ListEntry::List(sublist) => walk_list(sublist, visit),
        }
    }
}

fn walk_paragraph<'a>(paragraph: &'a Paragraph, visit: &mut impl FnMut(NodeRef<'a>)) {
    visit(NodeRef::Paragraph(paragraph));
    walk_inlines(paragraph, visit);
}

fn walk_inlines<'a>(paragraph: &'a Paragraph, visit: &mut impl FnMut(NodeRef<'a>)) {
    for inline in &paragraph.children {
        visit(NodeRef::Inline(inline));
    }
}
