//! Output management and formatting.
//!
//! Status messages honour `--quiet` and colour settings. The rendered
//! formula and JSON documents are the command's product and always go to
//! stdout unchanged.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Auto defers to the config file, then to whether stdout is a TTY.
        let requested = match args.output_format {
            OutputFormat::Auto => config.output.format,
            other => other,
        };

        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Command output written verbatim, even in quiet mode.
    pub fn emit(&self, text: &str) -> io::Result<()> {
        self.term.write_str(text)?;
        self.term.flush()
    }

    /// Pretty JSON document followed by a newline, even in quiet mode.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status("\u{2713}", msg, |s| s.green().bold().to_string(), |m| {
            m.green().to_string()
        })
    }

    /// Warning indicator: `⚠ <msg>`. Written to stderr so that a formula
    /// printed to stdout stays clean.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}")
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        Term::stderr().write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status("\u{2139}", msg, |s| s.blue().bold().to_string(), |m| {
            m.blue().to_string()
        })
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    fn status(
        &self,
        symbol: &str,
        msg: &str,
        paint_symbol: impl Fn(&str) -> String,
        paint_msg: impl Fn(&str) -> String,
    ) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("{symbol} {msg}")
        } else {
            format!("{} {}", paint_symbol(symbol), paint_msg(msg))
        };
        self.term.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if commands should print JSON documents.
    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
