//! Markdown parsing (Markdown → parse tree)
//!
//! Pipeline: Markdown string → Comrak AST → [`ParseDocument`]
//!
//! Comrak does the grammar work. This module only walks the arena it produces and lowers every
//! node into the closed parse enums. Nodes without a counterpart are kept as `Other`, named after
//! comrak's own node name, so nothing is dropped at this stage.

use super::{
    Alignment, ParseBlock, ParseCell, ParseDocument, ParseInline, ParseItem, ParseList,
    ParseTable, PlainText,
};
use comrak::nodes::{AstNode, ListType, NodeValue, TableAlignment};
use comrak::{parse_document, Arena, ComrakOptions};

/// Grammar extensions handed to comrak.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownOptions {
    pub table: bool,
    pub strikethrough: bool,
    pub autolink: bool,
    pub tasklist: bool,
    pub superscript: bool,
    pub front_matter_delimiter: Option<String>,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            table: true,
            strikethrough: true,
            autolink: true,
            tasklist: false,
            superscript: false,
            front_matter_delimiter: Some("---".to_string()),
        }
    }
}

impl MarkdownOptions {
    fn to_comrak(&self) -> ComrakOptions<'static> {
        let mut options = ComrakOptions::default();
        options.extension.table = self.table;
        options.extension.strikethrough = self.strikethrough;
        options.extension.autolink = self.autolink;
        options.extension.tasklist = self.tasklist;
        options.extension.superscript = self.superscript;
        options
            .extension
            .front_matter_delimiter
            .clone_from(&self.front_matter_delimiter);
        options
    }
}

/// Parse a Markdown string into a parse tree.
pub fn parse_markdown(source: &str, options: &MarkdownOptions) -> ParseDocument {
    let arena = Arena::new();
    let comrak_options = options.to_comrak();
    let root = parse_document(&arena, source, &comrak_options);
    lower_document(root)
}

/// Lower an already-parsed comrak document.
pub fn lower_document<'a>(root: &'a AstNode<'a>) -> ParseDocument {
    ParseDocument {
        children: lower_blocks(root),
    }
}

fn lower_blocks<'a>(node: &'a AstNode<'a>) -> Vec<ParseBlock> {
    node.children().map(lower_block).collect()
}

fn lower_block<'a>(node: &'a AstNode<'a>) -> ParseBlock {
    let node_data = node.data.borrow();

    match &node_data.value {
        NodeValue::Heading(heading) => ParseBlock::Heading {
            level: heading.level,
            content: lower_inlines(node),
        },

        NodeValue::Paragraph => ParseBlock::Paragraph {
            content: lower_inlines(node),
        },

        NodeValue::CodeBlock(code_block) => ParseBlock::CodeBlock {
            info: code_block.info.clone(),
            literal: code_block.literal.clone(),
        },

        NodeValue::List(list) => ParseBlock::List(ParseList {
            ordered: matches!(list.list_type, ListType::Ordered),
            items: node
                .children()
                .map(|item| ParseItem {
                    children: lower_blocks(item),
                })
                .collect(),
        }),

        NodeValue::BlockQuote => ParseBlock::BlockQuote {
            children: lower_blocks(node),
        },

        NodeValue::Table(table) => {
            let alignments = table
                .alignments
                .iter()
                .map(|align| match align {
                    TableAlignment::Left => Alignment::Left,
                    TableAlignment::Right => Alignment::Right,
                    TableAlignment::Center => Alignment::Center,
                    TableAlignment::None => Alignment::None,
                })
                .collect();
            lower_table(node, alignments)
        }

        other => ParseBlock::Other {
            name: node_name(other).to_string(),
            children: lower_blocks(node),
        },
    }
}

fn lower_table<'a>(node: &'a AstNode<'a>, alignments: Vec<Alignment>) -> ParseBlock {
    let mut table = ParseTable {
        alignments,
        ..ParseTable::default()
    };

    for row in node.children() {
        let header = matches!(row.data.borrow().value, NodeValue::TableRow(true));
        let cells: Vec<ParseCell> = row
            .children()
            .map(|cell| ParseCell {
                content: lower_inlines(cell),
            })
            .collect();
        if header {
            table.head = cells;
        } else {
            table.rows.push(cells);
        }
    }

    ParseBlock::Table(table)
}

fn lower_inlines<'a>(node: &'a AstNode<'a>) -> Vec<ParseInline> {
    node.children().map(lower_inline).collect()
}

fn lower_inline<'a>(node: &'a AstNode<'a>) -> ParseInline {
    let node_data = node.data.borrow();

    match &node_data.value {
        NodeValue::Text(text) => ParseInline::Text { text: text.clone() },

        NodeValue::Strong => ParseInline::Strong {
            children: lower_inlines(node),
        },

        NodeValue::Emph => ParseInline::Emphasis {
            children: lower_inlines(node),
        },

        NodeValue::Strikethrough => ParseInline::Strikethrough {
            children: lower_inlines(node),
        },

        NodeValue::Code(code) => ParseInline::Code {
            literal: code.literal.clone(),
        },

        NodeValue::Link(link) => ParseInline::Link {
            destination: non_empty(&link.url),
            title: non_empty(&link.title),
            children: lower_inlines(node),
        },

        NodeValue::Image(link) => ParseInline::Image {
            source: non_empty(&link.url),
            title: non_empty(&link.title),
            children: lower_inlines(node),
        },

        NodeValue::SoftBreak => other_inline(&node_data.value, " ".to_string()),
        NodeValue::LineBreak => other_inline(&node_data.value, "\n".to_string()),
        NodeValue::HtmlInline(html) => other_inline(&node_data.value, html.clone()),

        other => {
            let text = lower_inlines(node).plain_text();
            other_inline(other, text)
        }
    }
}

fn other_inline(value: &NodeValue, text: String) -> ParseInline {
    ParseInline::Other {
        name: node_name(value).to_string(),
        text,
    }
}

/// Snake-case name of a comrak node kind, as carried by `Other` nodes.
fn node_name(value: &NodeValue) -> &'static str {
    match value {
        NodeValue::Document => "document",
        NodeValue::FrontMatter(_) => "frontmatter",
        NodeValue::BlockQuote => "block_quote",
        NodeValue::MultilineBlockQuote(_) => "multiline_block_quote",
        NodeValue::List(_) => "list",
        NodeValue::Item(_) => "item",
        NodeValue::TaskItem(_) => "taskitem",
        NodeValue::DescriptionList => "description_list",
        NodeValue::DescriptionItem(_) => "description_item",
        NodeValue::DescriptionTerm => "description_term",
        NodeValue::DescriptionDetails => "description_details",
        NodeValue::CodeBlock(_) => "code_block",
        NodeValue::HtmlBlock(_) => "html_block",
        NodeValue::Paragraph => "paragraph",
        NodeValue::Heading(_) => "heading",
        NodeValue::ThematicBreak => "thematic_break",
        NodeValue::FootnoteDefinition(_) => "footnote_definition",
        NodeValue::Table(_) => "table",
        NodeValue::TableRow(_) => "table_row",
        NodeValue::TableCell => "table_cell",
        NodeValue::Text(_) => "text",
        NodeValue::SoftBreak => "softbreak",
        NodeValue::LineBreak => "linebreak",
        NodeValue::Code(_) => "code",
        NodeValue::HtmlInline(_) => "html_inline",
        NodeValue::Emph => "emph",
        NodeValue::Strong => "strong",
        NodeValue::Strikethrough => "strikethrough",
        NodeValue::Superscript => "superscript",
        NodeValue::Link(_) => "link",
        NodeValue::Image(_) => "image",
        NodeValue::FootnoteReference(_) => "footnote_reference",
        NodeValue::Math(_) => "math",
        NodeValue::WikiLink(_) => "wikilink",
        NodeValue::Underline => "underline",
        NodeValue::SpoileredText => "spoiler",
        NodeValue::Escaped => "escaped",
        NodeValue::EscapedTag(_) => "escaped_tag",
        // ShortCode, present with comrak's `shortcodes` feature.
        #[allow(unreachable_patterns)]
        _ => "shortcode",
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
