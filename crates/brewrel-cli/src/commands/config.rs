//! `brewrel config`: inspect configuration values.

use serde_json::json;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Keys accepted by `brewrel config get`.
const KEYS: [&str; 8] = [
    "defaults.style",
    "defaults.license",
    "defaults.homepage",
    "formula.wrapper_name",
    "formula.lib_env_var",
    "output.no_color",
    "output.format",
    "logging.file",
];

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: &GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            if output.is_json() {
                output.json(&json!({ key: value }))?;
            } else {
                output.emit(&format!("{value}\n"))?;
            }
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                let serialised =
                    toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                        message: format!("Failed to serialise config: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                output.header("Current Configuration:")?;
                output.print(&serialised)?;
            }
        }

        ConfigCommands::Path => {
            let path = AppConfig::active_path(global.config.as_deref())
                .unwrap_or_else(AppConfig::config_path);
            output.emit(&format!("{}\n", path.display()))?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let value = match key {
        "defaults.style" => config.defaults.style.to_string(),
        "defaults.license" => config.defaults.license.clone().unwrap_or_default(),
        "defaults.homepage" => config.defaults.homepage.clone().unwrap_or_default(),
        "formula.wrapper_name" => config.formula.wrapper_name.clone(),
        "formula.lib_env_var" => config.formula.lib_env_var.clone(),
        "output.no_color" => config.output.no_color.to_string(),
        "output.format" => config.output.format.to_string(),
        "logging.file" => config
            .logging
            .file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
        _ => {
            return Err(CliError::ConfigError {
                message: format!(
                    "Unknown config key: '{key}' (known keys: {})",
                    KEYS.join(", ")
                ),
                source: None,
            });
        }
    };
    Ok(value)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "defaults.style").unwrap(), "upper");
        assert_eq!(get_config_value(&cfg, "formula.wrapper_name").unwrap(), "mkx");
        assert_eq!(get_config_value(&cfg, "output.format").unwrap(), "auto");
    }

    #[test]
    fn unset_optional_key_is_empty() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "defaults.license").unwrap(), "");
    }

    #[test]
    fn every_listed_key_resolves() {
        let cfg = AppConfig::default();
        for key in KEYS {
            assert!(get_config_value(&cfg, key).is_ok(), "{key}");
        }
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }
}
