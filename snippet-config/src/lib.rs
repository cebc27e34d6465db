//! Settings for the snippet extractor.
//!
//! `defaults/snippets.default.toml` is embedded into the binary so that the
//! documented defaults and runtime behavior stay in sync. Callers layer per-run
//! values (the CLI's positional paths) on top via [`Loader`] before
//! deserializing into [`ExtractConfig`]. No file on disk is ever consulted.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_TOML: &str = include_str!("../defaults/snippets.default.toml");

/// Top-level configuration consumed by the extractor front end.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractConfig {
    pub paths: PathsConfig,
    pub output: OutputConfig,
    pub report: ReportConfig,
}

/// Where to read snippets from and where to write the flattened table.
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub indent: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub duplicate_examples: usize,
}

/// Helper for layering overrides over the built-in defaults.
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

    /// Apply a single key/value override (e.g. `paths.input`).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Override `key` only when a value is given.
    pub fn set_override_option<I>(self, key: &str, value: Option<I>) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        match value {
            Some(value) => self.set_override(key, value),
            None => Ok(self),
        }
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<ExtractConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ExtractConfig, ConfigError> {
    Loader::new().build()
}
