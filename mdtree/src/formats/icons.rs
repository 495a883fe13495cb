//! Shared icon mapping for tree visualization

/// Get the Unicode icon for a given node type
///
/// Returns a single Unicode character that visually represents the node type.
pub fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Root" => "⧉",
        "Heading" => "§",
        "Paragraph" => "¶",
        "Text" => "◦",
        "Strong" => "𝐁",
        "Italic" => "𝐼",
        "InlineCode" => "ƒ",
        "Strikethrough" => "∼",
        "Link" => "⊕",
        "Image" => "▣",
        "CodeBlock" => "𝒱",
        "List" => "☰",
        "ListItem" => "•",
        "Table" => "▦",
        "TableRow" => "▭",
        "BlockQuote" => "❝",
        _ => "○",
    }
}
