//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `BREWREL_<SECTION>__<KEY>`, e.g.
//!    `BREWREL_DEFAULTS__STYLE=lower`
//! 3. Config file: `--config FILE`, or else the platform config file and
//!    then `.brewrel.toml` in the current directory, when present
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

use brewrel_core::domain::{DEFAULT_LIB_ENV_VAR, DEFAULT_WRAPPER_NAME, FormulaOptions, TokenStyle};

use crate::cli::OutputFormat;

/// File name of the per-directory config.
pub const LOCAL_CONFIG: &str = ".brewrel.toml";

/// Prefix of environment overrides.
const ENV_PREFIX: &str = "BREWREL";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Values used when a render does not supply them.
    pub defaults: Defaults,
    /// Built-in formula options.
    pub formula: FormulaConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Log file settings.
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub style: TokenStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormulaConfig {
    pub wrapper_name: String,
    pub lib_env_var: String,
}

impl Default for FormulaConfig {
    fn default() -> Self {
        Self {
            wrapper_name: DEFAULT_WRAPPER_NAME.into(),
            lib_env_var: DEFAULT_LIB_ENV_VAR.into(),
        }
    }
}

impl From<&FormulaConfig> for FormulaOptions {
    fn from(config: &FormulaConfig) -> Self {
        FormulaOptions {
            wrapper_name: config.wrapper_name.clone(),
            lib_env_var: config.lib_env_var.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Used when `--output-format` is left at `auto`.
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Append logs to this file as well as stderr.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// `config_file` is the path passed via `--config`. When `require_file`
    /// is set that path must exist; `init` clears it because it is about to
    /// create the file.
    pub fn load(config_file: Option<&Path>, require_file: bool) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let mut builder = config::Config::builder().add_source(defaults);

        match config_file {
            Some(path) => {
                debug!(path = %path.display(), "Loading config file");
                builder = builder.add_source(
                    config::File::from(path)
                        .format(config::FileFormat::Toml)
                        .required(require_file),
                );
            }
            None => {
                for path in Self::search_paths() {
                    if path.is_file() {
                        debug!(path = %path.display(), "Loading config file");
                        builder = builder.add_source(
                            config::File::from(path.as_path()).format(config::FileFormat::Toml),
                        );
                    }
                }
            }
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        );

        builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the platform configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.brewrel.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "brewrel", "brewrel")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG))
    }

    /// Files consulted when no `--config` is given, lowest priority first.
    pub fn search_paths() -> Vec<PathBuf> {
        let global = Self::config_path();
        let local = PathBuf::from(LOCAL_CONFIG);
        if global == local {
            vec![local]
        } else {
            vec![global, local]
        }
    }

    /// The file that `load` would read with the highest priority, if any.
    pub fn active_path(config_file: Option<&Path>) -> Option<PathBuf> {
        match config_file {
            Some(path) => Some(path.to_path_buf()),
            None => Self::search_paths().into_iter().rev().find(|p| p.is_file()),
        }
    }
}
