//! Markdown parse tree to semantic tree
//!
//!     This crate turns the node tree of a markdown parser into a typed semantic tree that
//!     presentation code can walk without knowing anything about the parser.
//!
//!     The work is split in three layers:
//!
//!     .
//!     ├── parse       # Input model: the parser's tree, lowered into closed enums
//!     │   └── markdown.rs   # comrak → parse tree
//!     ├── build       # Builders: parse tree → semantic tree
//!     │   ├── block.rs
//!     │   ├── inline.rs
//!     │   ├── list.rs
//!     │   └── table.rs
//!     ├── tree        # Output model: typed nodes with ids and kinds
//!     ├── formats     # Inspection formats (treeviz, json)
//!     ├── format.rs   # Format trait definition
//!     └── registry.rs # FormatRegistry for discovery and selection
//!
//!     This is a pure lib: no printing, no env vars, no files. The mdtree-cli crate is the shell.
//!
//! Information loss
//!
//!     The semantic tree is smaller than markdown. Blocks it has no node for are traversed in
//!     place, inlines it has no node for are dropped. Every such loss is reported as a
//!     [`build::Diagnostic`] on the [`Conversion`] so callers can tell what went missing.
//!
//! Entry points
//!
//!     - [`from_markdown`]: parse with the default markdown options and build.
//!     - [`build::build`]: build from an already lowered [`parse::ParseDocument`].

pub mod build;
pub mod error;
pub mod format;
pub mod formats;
pub mod parse;
pub mod registry;
pub mod tree;

pub use build::{Conversion, Options};
pub use error::Error;
pub use format::Format;
pub use registry::FormatRegistry;

use parse::markdown::{parse_markdown, MarkdownOptions};

/// Parse `source` with the default markdown extensions and build its semantic tree.
pub fn from_markdown(source: &str, options: &Options) -> Conversion {
    from_markdown_with(source, &MarkdownOptions::default(), options)
}

/// Same as [`from_markdown`], with explicit parser options.
pub fn from_markdown_with(
    source: &str,
    markdown: &MarkdownOptions,
    options: &Options,
) -> Conversion {
    let doc = parse_markdown(source, markdown);
    build::build(&doc, options)
}
