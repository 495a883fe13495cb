//! Shared configuration loader for the mdtree tools.
//!
//! `defaults/mdtree.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MdtreeConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mdtree::build::{CodeTrim, ListLayout, Options};
use mdtree::parse::markdown::MarkdownOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mdtree.default.toml");

/// Top-level configuration consumed by mdtree applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MdtreeConfig {
    pub markdown: MarkdownConfig,
    pub build: BuildConfig,
    pub inspect: InspectConfig,
}

/// Markdown grammar extensions handed to the parser.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkdownConfig {
    pub table: bool,
    pub strikethrough: bool,
    pub autolink: bool,
    pub tasklist: bool,
    pub superscript: bool,
    pub front_matter_delimiter: String,
}

impl From<&MarkdownConfig> for MarkdownOptions {
    fn from(config: &MarkdownConfig) -> Self {
        MarkdownOptions {
            table: config.table,
            strikethrough: config.strikethrough,
            autolink: config.autolink,
            tasklist: config.tasklist,
            superscript: config.superscript,
            front_matter_delimiter: Some(config.front_matter_delimiter.clone())
                .filter(|delimiter| !delimiter.is_empty()),
        }
    }
}

/// Mirrors the builder [`Options`].
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BuildConfig {
    pub list_layout: ListLayout,
    pub code_trim: CodeTrim,
}

impl From<BuildConfig> for Options {
    fn from(config: BuildConfig) -> Self {
        Options {
            list_layout: config.list_layout,
            code_trim: config.code_trim,
        }
    }
}

/// Controls inspect output.
#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub treeviz: TreevizConfig,
    pub json: JsonConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreevizConfig {
    pub show_ids: bool,
    pub max_label: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonConfig {
    pub diagnostics: bool,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MdtreeConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MdtreeConfig, ConfigError> {
    Loader::new().build()
}
