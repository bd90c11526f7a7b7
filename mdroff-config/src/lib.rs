//! Shared configuration loader for md2roff.
//!
//! `defaults/mdroff.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. The CLI layers `./md2roff.toml`, a file named
//! with `--config` and its own flags on top of those defaults via [`Loader`]
//! before deserializing into [`MdroffConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mdroff_babel::{Dialect, RenderOptions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mdroff.default.toml");

/// Name of the optional per-directory configuration file.
pub const LOCAL_CONFIG_FILE: &str = "md2roff.toml";

/// Top-level configuration consumed by md2roff.
#[derive(Debug, Clone, Deserialize)]
pub struct MdroffConfig {
    pub convert: ConvertConfig,
    pub header: HeaderConfig,
    pub mom: MomConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub dialect: Dialect,
}

/// Fields of a synthesized `.TH` line.
#[derive(Debug, Clone, Deserialize)]
pub struct HeaderConfig {
    pub section: String,
    pub source: String,
}

/// The mom `.AUTHOR`/`.PAPER`/`.PRINTSTYLE` header.
#[derive(Debug, Clone, Deserialize)]
pub struct MomConfig {
    pub author: String,
    pub paper: String,
    pub printstyle: String,
}

impl From<&MdroffConfig> for RenderOptions {
    fn from(config: &MdroffConfig) -> Self {
        RenderOptions {
            man_section: config.header.section.clone(),
            header_source: config.header.source.clone(),
            mom_author: config.mom.author.clone(),
            mom_paper: config.mom.paper.clone(),
            mom_printstyle: config.mom.printstyle.clone(),
            date: None,
        }
    }
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

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MdroffConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = Loader::new().build().expect("defaults to deserialize");
        assert_eq!(config.convert.dialect, Dialect::Man);
        assert_eq!(config.header.section, "7");
        assert_eq!(config.mom.paper, "A4");
    }

    #[test]
    fn defaults_match_render_options() {
        let config = Loader::new().build().expect("defaults to deserialize");
        assert_eq!(RenderOptions::from(&config), RenderOptions::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("convert.dialect", "mom")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.convert.dialect, Dialect::Mom);
    }

    #[test]
    fn user_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(b"[header]\nsection = \"1\"\n\n[mom]\nauthor = \"Jane Doe\"\n")
            .unwrap();
        let config = Loader::new().with_file(file.path()).build().unwrap();
        assert_eq!(config.header.section, "1");
        assert_eq!(config.header.source, "document");
        assert_eq!(config.mom.author, "Jane Doe");
        assert_eq!(config.convert.dialect, Dialect::Man);
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/md2roff.toml")
            .build()
            .unwrap();
        assert_eq!(config.convert.dialect, Dialect::Man);
    }

    #[test]
    fn missing_required_file_is_an_error() {
        assert!(Loader::new()
            .with_file("/nonexistent/md2roff.toml")
            .build()
            .is_err());
    }

    #[test]
    fn unknown_dialect_is_rejected() {
        assert!(Loader::new()
            .set_override("convert.dialect", "ms")
            .unwrap()
            .build()
            .is_err());
    }
}
