//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `SHAPES_DEFAULTS__FORMAT=json`,
//!    `SHAPES_OUTPUT__NO_COLOR=true`
//! 3. Config file: `--config FILE` if given, otherwise the platform config
//!    file and then `.shapes.toml` in the current directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Defaults for `shapes total`.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// `text`, `json`, `html` or `all`.
    pub format: String,
    /// Built-in shape set used when neither `--set` nor `--file` is given.
    pub set: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                format: "text".into(),
                set: "ocp".into(),
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to encode default configuration")?;

        let mut builder = Config::builder().add_source(defaults);

        builder = match config_file {
            Some(path) => builder.add_source(File::from(path.as_path()).required(true)),
            None => builder
                .add_source(File::from(Self::config_path().as_path()).required(false))
                .add_source(File::from(Self::local_config_path()).required(false)),
        };

        let config = builder
            .add_source(
                Environment::with_prefix("SHAPES")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?;

        config
            .try_deserialize()
            .context("Configuration has invalid values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.shapes.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "solid-shapes", "shapes")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| Self::local_config_path().to_path_buf())
    }

    /// Per-directory configuration file.
    pub fn local_config_path() -> &'static Path {
        Path::new(".shapes.toml")
    }

    /// Look up a dotted key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "defaults.format" => Some(self.defaults.format.clone()),
            "defaults.set" => Some(self.defaults.set.clone()),
            "output.no_color" => Some(self.output.no_color.to_string()),
            _ => None,
        }
    }
}
