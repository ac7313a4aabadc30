//! Template entity and the placeholder substitution rule.
//!
//! ## Token syntax
//!
//! A placeholder is `{{name}}` where `name` is one or more ASCII
//! alphanumerics or `_`. Whether a syntactically valid span is *substituted*
//! depends on the template's [`Vocabulary`]:
//!
//! | Span          | In vocabulary | Result                     |
//! |---------------|---------------|----------------------------|
//! | `{{NAME}}`    | yes           | replaced by the field value |
//! | `{{other}}`   | no            | copied verbatim             |
//! | `{{ NAME }}`  | -             | copied verbatim (not a name) |
//! | `#{libexec}`  | -             | copied verbatim (not a token) |
//!
//! Rendering is a single left-to-right pass over the *template* text.
//! Substituted values are appended to the output and never scanned again, so
//! a value that itself looks like `{{NAME}}` survives as literal text.

use std::collections::BTreeSet;
use std::fmt;

use tracing::trace;

use crate::domain::{
    entities::{field_set::FieldSet, rendered::RenderedOutput},
    error::DomainError,
    value_objects::TokenStyle,
};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

// ── Vocabulary ────────────────────────────────────────────────────────────────

/// The set of placeholder names a template recognizes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary(BTreeSet<String>);

impl Vocabulary {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Vocabulary of a built-in token style.
    pub fn for_style(style: TokenStyle) -> Self {
        Self::new(style.fields().filter_map(|f| f.key(style)))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<TokenStyle> for Vocabulary {
    fn from(style: TokenStyle) -> Self {
        Self::for_style(style)
    }
}

// ── Template ──────────────────────────────────────────────────────────────────

/// An immutable template document.
///
/// Invariant: `text` is non-empty. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    text: String,
    vocabulary: Vocabulary,
}

impl Template {
    pub fn new(
        name: impl Into<String>,
        text: impl Into<String>,
        vocabulary: impl Into<Vocabulary>,
    ) -> Result<Self, DomainError> {
        let template = Self {
            name: name.into(),
            text: text.into(),
            vocabulary: vocabulary.into(),
        };
        template.validate()?;
        Ok(template)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.text.is_empty() {
            return Err(DomainError::EmptyTemplate {
                name: self.name.clone(),
            });
        }
        Ok(())
    }

    /// Vocabulary placeholders used by this template, in order of first use.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        segments(&self.text)
            .filter_map(|seg| match seg {
                Segment::Placeholder(name) if self.vocabulary.contains(name) => Some(name),
                _ => None,
            })
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Substitute every vocabulary placeholder with its value from `fields`.
    ///
    /// Fails with [`DomainError::MissingField`] on the first vocabulary
    /// placeholder that has no value; no partial output is returned.
    pub fn render(&self, fields: &FieldSet) -> Result<RenderedOutput, DomainError> {
        let mut out = String::with_capacity(self.text.len());
        let mut substitutions = 0;

        for segment in segments(&self.text) {
            match segment {
                Segment::Placeholder(name) if self.vocabulary.contains(name) => {
                    let value = fields.get(name).ok_or_else(|| DomainError::MissingField {
                        name: name.to_string(),
                    })?;
                    trace!(placeholder = name, "substituting");
                    out.push_str(value);
                    substitutions += 1;
                }
                Segment::Placeholder(name) => {
                    out.push_str(OPEN);
                    out.push_str(name);
                    out.push_str(CLOSE);
                }
                Segment::Literal(text) => out.push_str(text),
            }
        }

        Ok(RenderedOutput::new(out, substitutions))
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// ── Scanner ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

fn segments(text: &str) -> Segments<'_> {
    Segments { rest: text }
}

struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest;
        if rest.is_empty() {
            return None;
        }

        let mut search_from = 0;
        while let Some(offset) = rest[search_from..].find(OPEN) {
            let start = search_from + offset;

            if let Some(name) = placeholder_at(&rest[start..]) {
                if start > 0 {
                    let (literal, tail) = rest.split_at(start);
                    self.rest = tail;
                    return Some(Segment::Literal(literal));
                }
                self.rest = &rest[OPEN.len() + name.len() + CLOSE.len()..];
                return Some(Segment::Placeholder(name));
            }

            // `{{` that does not open a valid name: the first `{` is literal,
            // the next one may still open a placeholder (`{{{NAME}}`).
            search_from = start + 1;
        }

        self.rest = "";
        Some(Segment::Literal(rest))
    }
}

/// If `s` starts with a complete `{{name}}` token, return `name`.
fn placeholder_at(s: &str) -> Option<&str> {
    let body = s.strip_prefix(OPEN)?;
    let end = body.find(CLOSE)?;
    let name = &body[..end];
    is_name(name).then_some(name)
}

fn is_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}
