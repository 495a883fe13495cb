//! CLI-specific transforms
//!
//! This module defines all the transform combinations available in the CLI.
//! Each transform is a stage + format combination (e.g., "tree-treeviz", "parse-json").
//!
//! ## Transform Pipeline
//!
//! 1. **Parsing** - Markdown → parse tree (comrak, lowered into closed enums)
//!    - `parse-json`: the parse tree as JSON
//!
//! 2. **Building** - parse tree → semantic tree
//!    - `tree-treeviz`: tree visualization with Unicode icons (default)
//!    - `tree-json`: the semantic tree and its diagnostics as JSON
//!    - `diagnostics`: one line per node the semantic tree could not represent
//!
//! ## Extra Parameters
//!
//! Transforms can accept extra parameters via `--extra-<name> [value]`:
//!
//! - `show-ids`: prefix treeviz lines with node ids
//! - `max-label`: treeviz label truncation length
//! - `diagnostics`: include diagnostics in `tree-json` (default true)
//!
//! Example: `mdtree inspect README.md tree-treeviz --extra-show-ids`

use mdtree::build::{build, Diagnostic, Options};
use mdtree::parse::markdown::{parse_markdown, MarkdownOptions};
use mdtree::FormatRegistry;
use std::collections::HashMap;

/// All available CLI transforms (stage + format combinations)
pub const AVAILABLE_TRANSFORMS: &[&str] = &["tree-treeviz", "tree-json", "parse-json", "diagnostics"];

/// Transform used when none is given.
pub const DEFAULT_TRANSFORM: &str = "tree-treeviz";

/// Execute a named transform on a markdown source with optional extra parameters
///
/// # Examples
///
/// ```ignore
/// let params = HashMap::new();
/// let output = execute_transform(
///     "# Title",
///     "tree-treeviz",
///     &params,
///     &MarkdownOptions::default(),
///     &Options::default(),
/// )?;
/// ```
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    extra_params: &HashMap<String, String>,
    markdown: &MarkdownOptions,
    options: &Options,
) -> Result<String, String> {
    let doc = parse_markdown(source, markdown);
    log::debug!(
        "parsed {} top-level blocks ({} nodes)",
        doc.children.len(),
        doc.node_count()
    );

    if transform_name == "parse-json" {
        return serde_json::to_string_pretty(&doc)
            .map_err(|e| format!("JSON serialization failed: {e}"));
    }

    let conversion = build(&doc, options);
    let registry = FormatRegistry::default();

    match transform_name {
        "tree-treeviz" => registry
            .serialize_with_params(&conversion, "treeviz", extra_params)
            .map_err(|e| format!("Transform failed: {e}")),
        "tree-json" => registry
            .serialize_with_params(&conversion, "json", extra_params)
            .map_err(|e| format!("Transform failed: {e}")),
        "diagnostics" => Ok(diagnostics_report(&conversion.diagnostics)),
        other => Err(format!("Unknown transform: {other}")),
    }
}

fn diagnostics_report(diagnostics: &[Diagnostic]) -> String {
    if diagnostics.is_empty() {
        return "no diagnostics\n".to_string();
    }

    let mut output = String::new();
    for diagnostic in diagnostics {
        let policy = match diagnostic {
            Diagnostic::BlockFallthrough { .. } => "BlockFallthrough",
            Diagnostic::InlineDrop { .. } => "InlineDrop",
            Diagnostic::ListChildDrop { .. } => "ListChildDrop",
        };
        output.push_str(&format!("{policy:<16} {diagnostic}\n"));
    }
    output
}
