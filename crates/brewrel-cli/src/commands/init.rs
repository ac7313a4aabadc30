//! `brewrel init`: create a default configuration file.

use std::path::{Path, PathBuf};

use brewrel_adapters::LocalFilesystem;
use brewrel_core::application::Filesystem;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::{AppConfig, LOCAL_CONFIG},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Write the default configuration to the selected location.
pub fn execute(args: InitArgs, global: &GlobalArgs, output: OutputManager) -> CliResult<()> {
    let config_path = target_path(&args, global.config.as_deref());

    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    let toml = default_toml()?;

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_cli_context(|| {
                format!("Failed to create config directory '{}'", parent.display())
            })?;
        }
    }

    LocalFilesystem::new().write_atomic(&config_path, &toml)?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}

/// `--config` wins, then `--local`, then the platform location.
fn target_path(args: &InitArgs, config_file: Option<&Path>) -> PathBuf {
    match config_file {
        Some(path) => path.to_path_buf(),
        None if args.local => PathBuf::from(LOCAL_CONFIG),
        None => AppConfig::config_path(),
    }
}

fn default_toml() -> CliResult<String> {
    toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })
}
