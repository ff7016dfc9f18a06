//! Shared configuration loader for the treecorpus tools.
//!
//! `defaults/treecorpus.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`TreeCorpusConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use treecorpus_parser::corpus::formats::OutputFormat;
use treecorpus_parser::corpus::loader::LoadOptions;
use treecorpus_parser::corpus::validation::CommandSpec;
use treecorpus_parser::corpus::Dialect;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/treecorpus.default.toml");

/// Name of the optional per-project configuration file.
pub const PROJECT_CONFIG_FILE: &str = "treecorpus.toml";

/// Top-level configuration consumed by treecorpus applications.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeCorpusConfig {
    pub parsing: ParsingConfig,
    pub validation: ValidationConfig,
    pub output: OutputConfig,
}

/// How corpus files are found and read.
#[derive(Debug, Clone, Deserialize)]
pub struct ParsingConfig {
    pub dialect: Dialect,
    pub extensions: Vec<String>,
}

impl ParsingConfig {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            dialect: self.dialect,
            extensions: self.extensions.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    pub timeout_ms: u64,
    pub show_diff: bool,
    pub engine: EngineConfig,
}

impl ValidationConfig {
    /// `None` when the timeout is disabled.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }

    /// The engine command, if one is configured.
    pub fn command_spec(&self) -> Option<CommandSpec> {
        let program = self.engine.command.as_deref()?.trim();
        if program.is_empty() {
            return None;
        }
        Some(
            CommandSpec::new(program)
                .args(self.engine.args.iter().cloned())
                .timeout(self.timeout()),
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
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
    pub fn build(self) -> Result<TreeCorpusConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TreeCorpusConfig, ConfigError> {
    Loader::new().build()
}
