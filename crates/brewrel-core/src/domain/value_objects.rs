//! Domain value objects: TokenStyle and Field.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! A [`TokenStyle`] picks one of the two placeholder vocabularies; a
//! [`Field`] names one formula field independently of how it is spelled in
//! either vocabulary.
//!
//! # Adding New Fields
//!
//! 1. Add the enum variant to [`Field`] and to [`Field::ALL`]
//! 2. Add the `key` arms for both styles (or `None` where it does not apply)
//! 3. Add the slot to the skeleton and a `check_field` arm in `formula.rs`
//! 4. Add the typed flag to `brewrel render`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── TokenStyle ────────────────────────────────────────────────────────────────

/// Placeholder vocabulary of a template.
///
/// The two vocabularies are independent: `{{NAME}}` belongs to `Upper`,
/// `{{name}}` to `Lower`, and neither recognizes the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenStyle {
    #[default]
    Upper,
    Lower,
}

impl TokenStyle {
    pub const ALL: [TokenStyle; 2] = [Self::Upper, Self::Lower];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Upper => "upper",
            Self::Lower => "lower",
        }
    }

    /// Fields recognized by this style, in skeleton order.
    pub fn fields(self) -> impl Iterator<Item = Field> {
        Field::ALL.into_iter().filter(move |f| f.key(self).is_some())
    }

    /// The full token text for `field`, e.g. `{{CLASSNAME}}`.
    pub fn token(self, field: Field) -> Option<String> {
        field.key(self).map(|key| format!("{{{{{key}}}}}"))
    }
}

impl fmt::Display for TokenStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenStyle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "upper" | "uppercase" => Ok(Self::Upper),
            "lower" | "lowercase" => Ok(Self::Lower),
            other => Err(DomainError::UnknownTokenStyle(other.to_string())),
        }
    }
}

// ── Field ─────────────────────────────────────────────────────────────────────

/// One formula field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    ClassName,
    Description,
    Homepage,
    Url,
    Sha256,
    Version,
    License,
    Name,
    /// Name of the generated wrapper executable. Lowercase vocabulary only.
    Wrapper,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Self::ClassName,
        Self::Description,
        Self::Homepage,
        Self::Url,
        Self::Sha256,
        Self::Version,
        Self::License,
        Self::Name,
        Self::Wrapper,
    ];

    /// Placeholder name of this field in `style`, or `None` if the style has
    /// no such placeholder.
    pub const fn key(self, style: TokenStyle) -> Option<&'static str> {
        match style {
            TokenStyle::Upper => match self {
                Self::ClassName => Some("CLASSNAME"),
                Self::Description => Some("DESCRIPTION"),
                Self::Homepage => Some("HOMEPAGE"),
                Self::Url => Some("URL"),
                Self::Sha256 => Some("SHA256"),
                Self::Version => Some("VERSION"),
                Self::License => Some("LICENSE"),
                Self::Name => Some("NAME"),
                Self::Wrapper => None,
            },
            TokenStyle::Lower => match self {
                Self::ClassName => Some("classname"),
                Self::Description => Some("description"),
                Self::Homepage => Some("homepage"),
                Self::Url => Some("url"),
                Self::Sha256 => Some("sha256"),
                Self::Version => Some("version"),
                Self::License => Some("license"),
                Self::Name => Some("name"),
                Self::Wrapper => Some("wrapper"),
            },
        }
    }

    /// Human-readable label for listings.
    pub const fn label(self) -> &'static str {
        match self {
            Self::ClassName => "class name",
            Self::Description => "description",
            Self::Homepage => "homepage URL",
            Self::Url => "source archive URL",
            Self::Sha256 => "content checksum",
            Self::Version => "version string",
            Self::License => "license identifier",
            Self::Name => "package name",
            Self::Wrapper => "wrapper executable name",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
