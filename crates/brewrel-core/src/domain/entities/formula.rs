//! The Homebrew formula skeleton and the Homebrew rules for its values.
//!
//! One skeleton serves both vocabularies: every slot is emitted as the
//! token of the chosen [`TokenStyle`]. The wrapper executable name is a
//! placeholder in the lowercase vocabulary and a literal in the uppercase
//! one (see [`FormulaOptions::wrapper_name`]).
//!
//! The wrapper script embedded in `install` is part of the skeleton text.
//! Its `#{lib}`, `#{libexec}` and `"$@"` are formula/shell syntax and are
//! never substituted.

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::template::Template,
    error::DomainError,
    value_objects::{Field, TokenStyle},
};

pub const DEFAULT_WRAPPER_NAME: &str = "mkx";
pub const DEFAULT_LIB_ENV_VAR: &str = "MKBREWREL_LIB_DIR";

// ── Options ───────────────────────────────────────────────────────────────────

/// Literal (non-placeholder) parts of the skeleton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaOptions {
    /// Wrapper executable name for styles without a `wrapper` placeholder.
    pub wrapper_name: String,
    /// Environment variable the wrapper exports with the library directory.
    pub lib_env_var: String,
}

impl Default for FormulaOptions {
    fn default() -> Self {
        Self {
            wrapper_name: DEFAULT_WRAPPER_NAME.into(),
            lib_env_var: DEFAULT_LIB_ENV_VAR.into(),
        }
    }
}

// ── FormulaTemplate ───────────────────────────────────────────────────────────

/// Builder for the built-in formula [`Template`].
#[derive(Debug, Clone, Default)]
pub struct FormulaTemplate {
    style: TokenStyle,
    options: FormulaOptions,
}

impl FormulaTemplate {
    pub fn builder() -> Self {
        Self::default()
    }

    pub fn style(mut self, style: TokenStyle) -> Self {
        self.style = style;
        self
    }

    pub fn options(mut self, options: FormulaOptions) -> Self {
        self.options = options;
        self
    }

    pub fn wrapper_name(mut self, name: impl Into<String>) -> Self {
        self.options.wrapper_name = name.into();
        self
    }

    pub fn lib_env_var(mut self, var: impl Into<String>) -> Self {
        self.options.lib_env_var = var.into();
        self
    }

    /// Template name used in logs and reports, e.g. `formula-upper`.
    pub fn name(&self) -> String {
        format!("formula-{}", self.style)
    }

    /// Fails with `InvalidOption` when an option is empty or contains
    /// `{{` or `}}`.
    pub fn build(self) -> Result<Template, DomainError> {
        check_option("wrapper executable name", &self.options.wrapper_name)?;
        check_option("library variable", &self.options.lib_env_var)?;
        let text = self.skeleton();
        Template::new(self.name(), text, self.style)
    }

    fn slot(&self, field: Field) -> String {
        match self.style.token(field) {
            Some(token) => token,
            // Only the wrapper slot lacks a token in some styles.
            None => self.options.wrapper_name.clone(),
        }
    }

    fn skeleton(&self) -> String {
        let class_name = self.slot(Field::ClassName);
        let desc = self.slot(Field::Description);
        let homepage = self.slot(Field::Homepage);
        let url = self.slot(Field::Url);
        let sha256 = self.slot(Field::Sha256);
        let version = self.slot(Field::Version);
        let license = self.slot(Field::License);
        let name = self.slot(Field::Name);
        let wrapper = self.slot(Field::Wrapper);
        let lib_env_var = &self.options.lib_env_var;

        format!(
            r##"class {class_name} < Formula
	desc "{desc}"
	homepage "{homepage}"
	url "{url}"
	sha256 "{sha256}"
	version "{version}"
	license "{license}"

	def install
		libexec.install "{name}"
		lib.install Dir["lib/*"]
		man1.install "man/{name}.1"

		(bin/"{wrapper}").write <<~EOS
			#!/usr/bin/env bash
			export {lib_env_var}="#{{lib}}"
			exec "#{{libexec}}/{name}" "$@"
		EOS
	end

	test do
		system "./{name}", "-v"
	end
end
"##
        )
    }
}

fn check_option(option: &str, value: &str) -> Result<(), DomainError> {
    let reason = if value.is_empty() {
        "value is required"
    } else if value.contains("{{") || value.contains("}}") {
        "value cannot contain '{{' or '}}'"
    } else {
        return Ok(());
    };
    Err(DomainError::InvalidOption {
        option: option.to_string(),
        reason: reason.to_string(),
    })
}

pub(crate) fn invalid(field: Field, reason: impl Into<String>) -> DomainError {
    DomainError::InvalidField {
        field: field.label().to_string(),
        reason: reason.into(),
    }
}

pub(crate) fn check_field(field: Field, value: &str) -> Result<(), String> {
    match field {
        Field::ClassName => {
            let mut chars = value.chars();
            let starts_upper = chars.next().is_some_and(|c| c.is_ascii_uppercase());
            if !starts_upper || !chars.all(|c| c.is_ascii_alphanumeric()) {
                return Err(format!("'{value}' is not a Ruby constant name"));
            }
        }
        Field::Sha256 => {
            if value.len() != 64 || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err("expected 64 hexadecimal characters".into());
            }
        }
        Field::Homepage | Field::Url => {
            if !value.contains("://") {
                return Err(format!("'{value}' is not an absolute URL"));
            }
        }
        Field::Description | Field::Version | Field::License => {
            if value.contains('"') {
                return Err("value cannot contain '\"'".into());
            }
        }
        Field::Name | Field::Wrapper => {
            if value.contains('/') || value.contains('"') {
                return Err(format!("'{value}' is not a valid executable name"));
            }
        }
    }
    Ok(())
}

/// Formula class name for a package name, following Homebrew's rules.
///
/// | Input         | Output         |
/// |---------------|----------------|
/// | "foo"         | "Foo"          |
/// | "my-tool"     | "MyTool"       |
/// | "lib_foo.bar" | "LibFooBar"    |
/// | "gtk+"        | "Gtkx"         |
/// | "python@3.12" | "PythonAT312"  |
pub fn class_name_for(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut chars = lower.chars().peekable();
    let mut first = true;

    while let Some(c) = chars.next() {
        let next = chars.peek().copied();
        match c {
            '-' | '_' | '.' | ' ' if next.is_some_and(|n| n.is_ascii_alphanumeric()) => {
                if let Some(n) = chars.next() {
                    out.push(n.to_ascii_uppercase());
                }
            }
            '+' => out.push('x'),
            '@' if !first && next.is_some_and(|n| n.is_ascii_digit()) => out.push_str("AT"),
            c if first => out.extend(c.to_uppercase()),
            c => out.push(c),
        }
        first = false;
    }

    out
}
