//! Parse tree → semantic tree
//!
//!     The builders are free functions that take a slice of the parse tree and return the
//!     subtree they built. The only state threaded through the recursion is the [`Context`]:
//!     the id counter, the options and the diagnostics sink.
//!
//!     block   dispatches each block node, recursing for block quotes and passing through
//!             block kinds it has no node for
//!     inline  turns inline runs into spans, links and images, dropping anything else
//!     list    builds lists, tracking nesting depth
//!     table   builds the header row, the row-major body and the flat cell sequence
//!
//! Information loss
//!
//!     Two policies decide what happens to parse nodes the semantic tree cannot represent:
//!
//!     - BlockFallthrough: an unhandled block kind is transparent. Its block children are built
//!       in place, the container itself leaves no trace.
//!     - InlineDrop: an unhandled inline kind (soft breaks, raw html, ...) is dropped.
//!
//!     Both are recorded as [`Diagnostic`]s on the returned [`Conversion`] and logged at debug
//!     level.

pub mod block;
pub mod inline;
pub mod list;
pub mod table;

use crate::error::Error;
use crate::parse::ParseDocument;
use crate::tree::{IdGen, NodeId, Root};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where nested lists end up relative to the item they follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListLayout {
    /// The sublist is the next sibling of its item, inside the enclosing list.
    #[default]
    Flattened,
    /// The sublist is a child of the item it follows.
    Nested,
}

/// How trailing characters are removed from code blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CodeTrim {
    /// Remove the run of trailing spaces plus one more character.
    ///
    /// For comrak output the extra character is the closing newline. For code that ends in
    /// spaces without a newline it eats the last non-space character too.
    #[default]
    Reference,
    /// Remove all trailing whitespace.
    TrailingWhitespace,
}

impl FromStr for ListLayout {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "flattened" => Ok(ListLayout::Flattened),
            "nested" => Ok(ListLayout::Nested),
            other => Err(Error::InvalidOption {
                option: "list-layout",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for CodeTrim {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "reference" => Ok(CodeTrim::Reference),
            "trailing-whitespace" => Ok(CodeTrim::TrailingWhitespace),
            other => Err(Error::InvalidOption {
                option: "code-trim",
                value: other.to_string(),
            }),
        }
    }
}

/// Knobs for the builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    pub list_layout: ListLayout,
    pub code_trim: CodeTrim,
}

/// Something the semantic tree could not represent as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "policy")]
pub enum Diagnostic {
    /// An unhandled block container was traversed in place.
    BlockFallthrough { kind: String },
    /// An unhandled inline node was dropped.
    InlineDrop { kind: String },
    /// A list item child that is neither a paragraph nor a list was dropped.
    ListChildDrop { kind: String, depth: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::BlockFallthrough { kind } => {
                write!(f, "block '{kind}' has no node, children kept in place")
            }
            Diagnostic::InlineDrop { kind } => write!(f, "inline '{kind}' dropped"),
            Diagnostic::ListChildDrop { kind, depth } => {
                write!(f, "'{kind}' inside a list item at depth {depth} dropped")
            }
        }
    }
}

/// State threaded through one build.
#[derive(Debug)]
pub struct Context {
    ids: IdGen,
    options: Options,
    diagnostics: Vec<Diagnostic>,
}

impl Context {
    pub fn new(options: Options) -> Self {
        Self {
            ids: IdGen::new(),
            options,
            diagnostics: Vec::new(),
        }
    }

    pub fn next_id(&mut self) -> NodeId {
        self.ids.next_id()
    }

    /// Number of nodes built so far.
    pub fn node_count(&self) -> usize {
        self.ids.issued()
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        log::debug!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

/// A built tree and what was lost building it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub root: Root,
    pub diagnostics: Vec<Diagnostic>,
}

/// Build the semantic tree of a parsed document.
pub fn build(doc: &ParseDocument, options: &Options) -> Conversion {
    let mut cx = Context::new(*options);
    let id = cx.next_id();
    let children = block::build_blocks(&doc.children, &mut cx);
    log::trace!(
        "built {} top-level blocks ({} nodes), {} diagnostics",
        children.len(),
        cx.node_count(),
        cx.diagnostics().len()
    );

    Conversion {
        root: Root {
            id,
            children: children.into(),
        },
        diagnostics: cx.into_diagnostics(),
    }
}
