//! Treeviz formatter for semantic trees
//!
//! Treeviz is a visual representation of the semantic tree, one node per line. It encodes the
//! node structure as indentation, with 2 characters per level of nesting.
//!
//! So the format is :
//! <indentation>(per level) <icon><space><label> (truncated to `max-label` characters)
//!
//! Example:
//!
//! ⧉ Root (3 blocks)
//! ├─ § h1 Title
//! ├─ ¶ Hello world
//! │ ├─ 𝐁 Hello
//! │ └─ ◦  world
//! └─ ☰ unordered, depth 0 (2 entries)
//!   ├─ • A
//!   │ └─ ◦ A
//!   └─ ☰ ordered, depth 1 (1 entries)
//!     └─ • B
//!       └─ ◦ B
//!
//! Icons
//!     Root: ⧉   Heading: §   Paragraph: ¶   List: ☰   ListItem: •   CodeBlock: 𝒱
//!     Table: ▦   TableRow: ▭   BlockQuote: ❝
//!     Text: ◦   Strong: 𝐁   Italic: 𝐼   InlineCode: ƒ   Strikethrough: ∼
//!     Link: ⊕   Image: ▣
//!
//! Parameters
//!     show-ids:  prefix every line with the node id (rows of a table have none)
//!     max-label: label truncation length, 30 by default

use super::icons::get_icon;
use crate::build::Conversion;
use crate::error::Error;
use crate::format::{bool_param, Format};
use crate::tree::{Block, Inline, List, ListEntry, Node, NodeId, Paragraph, Root};
use std::collections::HashMap;

const DEFAULT_MAX_LABEL: usize = 30;

/// Intermediate line tree, rendered once built.
struct VizNode {
    id: Option<NodeId>,
    icon: &'static str,
    label: String,
    children: Vec<VizNode>,
}

impl VizNode {
    fn new(id: Option<NodeId>, icon_for: &str, label: String) -> Self {
        Self {
            id,
            icon: get_icon(icon_for),
            label,
            children: Vec::new(),
        }
    }

    fn with_children(mut self, children: Vec<VizNode>) -> Self {
        self.children = children;
        self
    }
}

fn viz_block(block: &Block) -> VizNode {
    let kind = block.kind();
    let id = Some(block.id());
    match block {
        Block::Heading(heading) => VizNode::new(
            id,
            kind.name(),
            format!("h{} {}", heading.level, heading.text),
        ),
        Block::Paragraph(paragraph) => viz_paragraph(paragraph),
        Block::CodeBlock(code) => VizNode::new(
            id,
            kind.name(),
            format!(
                "{} ({} lines)",
                code.language.as_deref().unwrap_or("plain"),
                code.code.lines().count()
            ),
        ),
        Block::List(list) => viz_list(list),
        Block::Table(table) => {
            let mut rows = Vec::with_capacity(table.body.len() + 1);
            rows.push(
                VizNode::new(None, "TableRow", "header".to_string())
                    .with_children(table.headers.iter().map(viz_paragraph).collect()),
            );
            for (index, row) in table.body.iter().enumerate() {
                rows.push(
                    VizNode::new(None, "TableRow", format!("row {}", index + 1)).with_children(
                        row.iter().map(|cell| viz_paragraph(cell)).collect(),
                    ),
                );
            }
            VizNode::new(
                id,
                kind.name(),
                format!("{} columns, {} rows", table.headers.len(), table.body.len()),
            )
            .with_children(rows)
        }
        Block::BlockQuote(quote) => VizNode::new(
            id,
            kind.name(),
            format!("{} blocks", quote.children.len()),
        )
        .with_children(quote.children.iter().map(viz_block).collect()),
    }
}

fn viz_paragraph(paragraph: &Paragraph) -> VizNode {
    VizNode::new(Some(paragraph.id()), "Paragraph", paragraph.text())
        .with_children(paragraph.children.iter().map(viz_inline).collect())
}

fn viz_inline(inline: &Inline) -> VizNode {
    let label = match inline {
        Inline::Link(link) => match &link.destination {
            Some(destination) => format!("{} → {destination}", link.text),
            None => link.text.clone(),
        },
        Inline::Image(image) => match &image.source {
            Some(source) => format!("{} ← {source}", image.text),
            None => image.text.clone(),
        },
        other => other.text().to_string(),
    };
    VizNode::new(Some(inline.id()), inline.kind().name(), label)
}

fn viz_list(list: &List) -> VizNode {
    let list_type = match list.list_type {
        crate::tree::ListType::Ordered => "ordered",
        crate::tree::ListType::Unordered => "unordered",
    };
    let children = list
        .children
        .iter()
        .map(|entry| match entry {
            ListEntry::Item(item) => {
                let mut children: Vec<VizNode> =
                    item.paragraph.children.iter().map(viz_inline).collect();
                children.extend(item.children.iter().map(viz_list));
                VizNode::new(Some(item.id()), "ListItem", item.paragraph.text())
                    .with_children(children)
            }
            ListEntry::List(sublist) => viz_list(sublist),
        })
        .collect();
    VizNode::new(
        Some(list.id()),
        "List",
        format!(
            "{list_type}, depth {} ({} entries)",
            list.depth,
            list.children.len()
        ),
    )
    .with_children(children)
}

struct Render {
    show_ids: bool,
    max_label: usize,
}

impl Render {
    fn line_prefix(&self, id: Option<NodeId>) -> String {
        match (self.show_ids, id) {
            (false, _) => String::new(),
            (true, Some(id)) => format!("{:03} ", id.index()),
            (true, None) => "    ".to_string(),
        }
    }

    fn label(&self, label: &str) -> String {
        let flat: String = label
            .chars()
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        if flat.chars().count() > self.max_label {
            let mut truncated: String = flat.chars().take(self.max_label).collect();
            truncated.push('…');
            truncated
        } else {
            flat
        }
    }

    fn node(&self, node: &VizNode, prefix: &str, is_last: bool, output: &mut String) {
        let connector = if is_last { "└─" } else { "├─" };
        output.push_str(&format!(
            "{}{}{} {} {}\n",
            self.line_prefix(node.id),
            prefix,
            connector,
            node.icon,
            self.label(&node.label)
        ));

        let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        self.children(&node.children, &child_prefix, output);
    }

    fn children(&self, children: &[VizNode], prefix: &str, output: &mut String) {
        let child_count = children.len();
        for (i, child) in children.iter().enumerate() {
            self.node(child, prefix, i == child_count - 1, output);
        }
    }
}

pub fn to_treeviz_str(root: &Root) -> String {
    to_treeviz_str_with_params(root, &HashMap::new())
}

/// Convert a semantic tree to a treeviz string with optional parameters
pub fn to_treeviz_str_with_params(root: &Root, params: &HashMap<String, String>) -> String {
    let render = Render {
        show_ids: bool_param(params, "show-ids", false),
        max_label: params
            .get("max-label")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_LABEL),
    };

    let mut output = format!(
        "{}{} Root ({} blocks)\n",
        render.line_prefix(Some(root.id)),
        get_icon("Root"),
        root.children.len()
    );
    let children: Vec<VizNode> = root.children.iter().map(viz_block).collect();
    render.children(&children, "", &mut output);
    output
}

/// Format implementation for treeviz format
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree representation with indentation and Unicode icons"
    }

    fn serialize(&self, conversion: &Conversion) -> Result<String, Error> {
        Ok(to_treeviz_str(&conversion.root))
    }

    fn serialize_with_params(
        &self,
        conversion: &Conversion,
        params: &HashMap<String, String>,
    ) -> Result<String, Error> {
        Ok(to_treeviz_str_with_params(&conversion.root, params))
    }
}
