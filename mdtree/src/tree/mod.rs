//! Semantic tree
//!
//! The typed tree handed to presentation code. Every node has an identity ([`NodeId`]) and a
//! kind tag ([`NodeKind`]); containers keep their children in a [`Children`] sequence that
//! consumers may filter after construction.

pub mod children;
pub mod nodes;

pub use children::Children;
pub use nodes::*;

use serde::Serialize;
use std::fmt;

/// Identity of a node within one built tree.
///
/// Ids are handed out in construction order, starting at zero for every build, so they are
/// only meaningful as keys inside the tree that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out [`NodeId`]s in construction order.
#[derive(Debug, Default)]
pub struct IdGen {
    next: usize,
}

impl IdGen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> usize {
        self.next
    }
}

/// Kind tag of a semantic node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    Root,
    Heading,
    Paragraph,
    Text,
    Strong,
    Italic,
    InlineCode,
    Strikethrough,
    Link,
    Image,
    CodeBlock,
    List,
    ListItem,
    Table,
    BlockQuote,
}

impl NodeKind {
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Root => "Root",
            NodeKind::Heading => "Heading",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::Text => "Text",
            NodeKind::Strong => "Strong",
            NodeKind::Italic => "Italic",
            NodeKind::InlineCode => "InlineCode",
            NodeKind::Strikethrough => "Strikethrough",
            NodeKind::Link => "Link",
            NodeKind::Image => "Image",
            NodeKind::CodeBlock => "CodeBlock",
            NodeKind::List => "List",
            NodeKind::ListItem => "ListItem",
            NodeKind::Table => "Table",
            NodeKind::BlockQuote => "BlockQuote",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identity and kind shared by every semantic node.
pub trait Node {
    fn id(&self) -> NodeId;
    fn kind(&self) -> NodeKind;
}

impl<T: Node + ?Sized> Node for std::rc::Rc<T> {
    fn id(&self) -> NodeId {
        (**self).id()
    }

    fn kind(&self) -> NodeKind {
        (**self).kind()
    }
}
