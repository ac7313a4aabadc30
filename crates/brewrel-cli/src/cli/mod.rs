//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use brewrel_core::domain::TokenStyle;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "brewrel",
    bin_name = "brewrel",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f37a} Render Homebrew formulas from templates",
    long_about = "Brewrel fills a Homebrew formula template with release \
                  metadata (class name, URL, checksum, version, ...) and \
                  writes the formula atomically.",
    after_help = "EXAMPLES:\n\
        \x20 brewrel render --name foo --desc 'Foo tool' --url https://x/foo.tar.gz \\\n\
        \x20        --sha256 <hex> --pkg-version 1.0 --license MIT --homepage https://x -o Formula/foo.rb\n\
        \x20 brewrel render --fields release.toml --style lower --wrapper foo\n\
        \x20 brewrel fields --style lower\n\
        \x20 brewrel completions bash > /usr/share/bash-completion/completions/brewrel",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a formula.
    #[command(
        visible_alias = "r",
        about = "Render a formula from a template",
        after_help = "FIELD PRECEDENCE (lowest first):\n\
            \x20 config defaults < --fields FILE < typed flags < --set KEY=VALUE\n\n\
            EXAMPLES:\n\
            \x20 brewrel render --fields release.toml -o Formula/foo.rb\n\
            \x20 brewrel render --fields release.toml --set VERSION=1.2.0 --dry-run\n\
            \x20 brewrel render --template minimal.rb --fields release.toml"
    )]
    Render(RenderArgs),

    /// List the placeholders of a token style.
    #[command(
        visible_alias = "ls",
        about = "List placeholders a style recognizes",
        after_help = "EXAMPLES:\n\
            \x20 brewrel fields\n\
            \x20 brewrel fields --style lower --format json"
    )]
    Fields(FieldsArgs),

    /// Initialise a Brewrel configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 brewrel init                      # platform config dir\n\
            \x20 brewrel init --local              # ./.brewrel.toml\n\
            \x20 brewrel -c ci/brewrel.toml init   # explicit path"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 brewrel completions bash > ~/.local/share/bash-completion/completions/brewrel\n\
            \x20 brewrel completions zsh  > ~/.zfunc/_brewrel\n\
            \x20 brewrel completions fish > ~/.config/fish/completions/brewrel.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Brewrel configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 brewrel config get defaults.style\n\
            \x20 brewrel config list\n\
            \x20 brewrel config path"
    )]
    Config(ConfigCommands),
}

// ── render ────────────────────────────────────────────────────────────────────

/// Arguments for `brewrel render`.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Placeholder style; defaults to `defaults.style` from config.
    #[arg(short = 's', long = "style", value_enum, help = "Placeholder style")]
    pub style: Option<StyleArg>,

    /// Custom template file instead of the built-in formula.
    #[arg(
        short = 't',
        long = "template",
        value_name = "FILE",
        help = "Template file (default: built-in formula)"
    )]
    pub template: Option<PathBuf>,

    /// TOML or JSON map of placeholder name to value.
    #[arg(
        short = 'f',
        long = "fields",
        value_name = "FILE",
        help = "Fields file (.toml or .json)"
    )]
    pub fields: Option<PathBuf>,

    #[arg(long = "class-name", value_name = "NAME", help = "Formula class name (default: derived from --name)")]
    pub class_name: Option<String>,

    #[arg(long = "desc", value_name = "TEXT", help = "One-line description")]
    pub desc: Option<String>,

    #[arg(long = "homepage", value_name = "URL", help = "Project homepage")]
    pub homepage: Option<String>,

    #[arg(long = "url", value_name = "URL", help = "Source archive URL")]
    pub url: Option<String>,

    #[arg(long = "sha256", value_name = "HEX", help = "SHA-256 of the archive")]
    pub sha256: Option<String>,

    /// Named `--pkg-version` because `--version` prints brewrel's own.
    #[arg(long = "pkg-version", value_name = "VERSION", help = "Package version")]
    pub pkg_version: Option<String>,

    #[arg(long = "license", value_name = "SPDX", help = "License identifier")]
    pub license: Option<String>,

    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Package (binary) name")]
    pub name: Option<String>,

    /// Wrapper executable name. A field of the lowercase style; with the
    /// uppercase style it replaces the built-in wrapper name.
    #[arg(long = "wrapper", value_name = "NAME", help = "Wrapper executable name")]
    pub wrapper: Option<String>,

    /// Environment variable the wrapper exports (built-in formula only).
    #[arg(long = "lib-env-var", value_name = "VAR", help = "Library dir variable exported by the wrapper")]
    pub lib_env_var: Option<String>,

    /// Raw placeholder assignment; wins over every other source.
    #[arg(
        long = "set",
        value_name = "KEY=VALUE",
        value_parser = parse_assignment,
        action = clap::ArgAction::Append,
        help = "Set a placeholder value (repeatable)"
    )]
    pub set: Vec<(String, String)>,

    /// Destination file. Without it the formula goes to stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Write the formula to FILE (created or overwritten)"
    )]
    pub output: Option<PathBuf>,

    /// Render and report without writing anything.
    #[arg(long = "dry-run", help = "Render without writing")]
    pub dry_run: bool,

    /// Treat field validation warnings as errors.
    #[arg(long = "strict", help = "Fail on invalid field values")]
    pub strict: bool,
}

/// Parse `KEY=VALUE`. The value may itself contain `=`.
fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    if key.is_empty() {
        return Err(format!("missing placeholder name in '{raw}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Placeholder style as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    /// `{{CLASSNAME}}`, `{{NAME}}`, ...
    #[value(alias = "uppercase")]
    Upper,
    /// `{{classname}}`, `{{name}}`, `{{wrapper}}`, ...
    #[value(alias = "lowercase")]
    Lower,
}

impl From<StyleArg> for TokenStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Upper => TokenStyle::Upper,
            StyleArg::Lower => TokenStyle::Lower,
        }
    }
}

// ── fields ────────────────────────────────────────────────────────────────────

/// Arguments for `brewrel fields`.
#[derive(Debug, Args)]
pub struct FieldsArgs {
    #[arg(short = 's', long = "style", value_enum, help = "Placeholder style")]
    pub style: Option<StyleArg>,

    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Listing format"
    )]
    pub format: ListFormat,
}

/// Output format for the `fields` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Placeholder and description, aligned.
    Table,
    /// One placeholder per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `brewrel init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.brewrel.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `brewrel completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `brewrel config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.style`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_render_command() {
        let cli = Cli::parse_from([
            "brewrel",
            "render",
            "--name",
            "foo",
            "--pkg-version",
            "1.0",
            "-o",
            "foo.rb",
        ]);
        let Commands::Render(args) = cli.command else {
            panic!("expected Render command");
        };
        assert_eq!(args.name.as_deref(), Some("foo"));
        assert_eq!(args.pkg_version.as_deref(), Some("1.0"));
        assert_eq!(args.output, Some(PathBuf::from("foo.rb")));
    }

    #[test]
    fn set_is_repeatable_and_keeps_equals_in_value() {
        let cli = Cli::parse_from([
            "brewrel",
            "render",
            "--set",
            "NAME=foo",
            "--set",
            "URL=https://x/?a=b",
        ]);
        let Commands::Render(args) = cli.command else {
            panic!("expected Render command");
        };
        assert_eq!(
            args.set,
            vec![
                ("NAME".to_string(), "foo".to_string()),
                ("URL".to_string(), "https://x/?a=b".to_string()),
            ]
        );
    }

    #[test]
    fn set_without_equals_is_rejected() {
        let result = Cli::try_parse_from(["brewrel", "render", "--set", "NAME"]);
        assert!(result.is_err());
    }

    #[test]
    fn style_aliases() {
        let cli = Cli::parse_from(["brewrel", "fields", "--style", "lowercase"]);
        let Commands::Fields(args) = cli.command else {
            panic!("expected Fields command");
        };
        assert_eq!(args.style, Some(StyleArg::Lower));
        assert_eq!(TokenStyle::from(StyleArg::Lower), TokenStyle::Lower);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["brewrel", "--quiet", "--verbose", "fields"]);
        assert!(result.is_err());
    }
}
