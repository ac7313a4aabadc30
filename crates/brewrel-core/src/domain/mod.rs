// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Brewrel.
//!
//! This module contains pure rendering logic with ZERO I/O.
//! Reading template files and writing formulas are handled via ports
//! (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: A `Template` never changes after construction
//! - **Deterministic**: Same template + same fields = same bytes
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    DEFAULT_LIB_ENV_VAR, DEFAULT_WRAPPER_NAME, FieldSet, FormulaOptions,
    FormulaTemplate, RenderedOutput, Template, Vocabulary, class_name_for,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{Field, TokenStyle};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn sample_fields() -> FieldSet {
        FieldSet::new()
            .with("CLASSNAME", "Foo")
            .with("DESCRIPTION", "bar")
            .with("HOMEPAGE", "https://x")
            .with("URL", "https://x/x.tar.gz")
            .with("SHA256", "0".repeat(64))
            .with("VERSION", "1.0")
            .with("LICENSE", "MIT")
            .with("NAME", "foo")
    }

    fn upper_template() -> Template {
        FormulaTemplate::builder()
            .style(TokenStyle::Upper)
            .build()
            .unwrap()
    }

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn token_style_parses_correctly() {
        assert_eq!(TokenStyle::from_str("upper").unwrap(), TokenStyle::Upper);
        assert_eq!(TokenStyle::from_str("LOWERCASE").unwrap(), TokenStyle::Lower);
        assert!(matches!(
            TokenStyle::from_str("mixed"),
            Err(DomainError::UnknownTokenStyle(_))
        ));
    }

    #[test]
    fn token_text_uses_double_braces() {
        assert_eq!(
            TokenStyle::Upper.token(Field::ClassName).as_deref(),
            Some("{{CLASSNAME}}")
        );
        assert_eq!(
            TokenStyle::Lower.token(Field::Wrapper).as_deref(),
            Some("{{wrapper}}")
        );
        assert_eq!(TokenStyle::Upper.token(Field::Wrapper), None);
    }

    #[test]
    fn lower_style_has_extra_wrapper_field() {
        assert_eq!(TokenStyle::Upper.fields().count(), 8);
        assert_eq!(TokenStyle::Lower.fields().count(), 9);
    }

    // ========================================================================
    // Rendering Tests
    // ========================================================================

    #[test]
    fn renders_reference_formula() {
        let output = upper_template().render(&sample_fields()).unwrap();
        let lines: Vec<&str> = output.as_str().lines().map(str::trim).collect();

        assert!(lines.contains(&"class Foo < Formula"));
        assert!(lines.contains(&r#"desc "bar""#));
        assert!(lines.contains(&r##"exec "#{libexec}/foo" "$@""##));
        assert!(lines.contains(&r##"export MKBREWREL_LIB_DIR="#{lib}""##));
        assert!(lines.contains(&r#"system "./foo", "-v""#));
    }

    #[test]
    fn render_is_deterministic() {
        let template = upper_template();
        let fields = sample_fields();

        let first = template.render(&fields).unwrap();
        let second = template.render(&fields).unwrap();
        assert_eq!(first.as_str().as_bytes(), second.as_str().as_bytes());
    }

    #[test]
    fn render_leaves_no_vocabulary_tokens() {
        let output = upper_template().render(&sample_fields()).unwrap();
        for field in TokenStyle::Upper.fields() {
            let token = TokenStyle::Upper.token(field).unwrap();
            assert!(!output.as_str().contains(&token), "{token} left behind");
        }
        // NAME appears four times, every other field once.
        assert_eq!(output.substitutions(), 11);
    }

    #[test]
    fn render_preserves_text_outside_placeholders() {
        let template = upper_template();
        let fields = sample_fields();

        // None of the sample values look like tokens, so plain replacement
        // gives the exact expected text.
        let mut expected = template.text().to_string();
        for (name, value) in fields.iter() {
            expected = expected.replace(&format!("{{{{{name}}}}}"), value);
        }

        let output = template.render(&fields).unwrap();
        assert_eq!(output.as_str(), expected);
    }

    #[test]
    fn missing_field_is_reported_by_name() {
        let mut fields = sample_fields();
        fields.remove("LICENSE");

        let err = upper_template().render(&fields).unwrap_err();
        assert_eq!(
            err,
            DomainError::MissingField {
                name: "LICENSE".into()
            }
        );
        assert!(err.to_string().contains("{{LICENSE}}"));
    }

    #[test]
    fn missing_field_reports_first_in_document_order() {
        let err = upper_template().render(&FieldSet::new()).unwrap_err();
        assert_eq!(
            err,
            DomainError::MissingField {
                name: "CLASSNAME".into()
            }
        );
    }

    #[test]
    fn unknown_placeholders_are_left_untouched() {
        let template = Template::new("t", "{{NAME}} {{name}} {{OTHER}}", TokenStyle::Upper).unwrap();
        let output = template.render(&sample_fields().with("OTHER", "x")).unwrap();
        assert_eq!(output.as_str(), "foo {{name}} {{OTHER}}");
    }

    #[test]
    fn vocabularies_are_case_sensitive() {
        let template = Template::new("t", "{{name}}/{{NAME}}", TokenStyle::Lower).unwrap();
        let fields = FieldSet::new().with("name", "lower").with("NAME", "upper");
        assert_eq!(template.render(&fields).unwrap().as_str(), "lower/{{NAME}}");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let template = Template::new("t", "[{{NAME}}]", TokenStyle::Upper).unwrap();
        let fields = FieldSet::new()
            .with("NAME", "{{VERSION}}")
            .with("VERSION", "1.0");
        assert_eq!(template.render(&fields).unwrap().as_str(), "[{{VERSION}}]");
    }

    #[test]
    fn values_are_inserted_verbatim() {
        let template = Template::new("t", r#"desc "{{DESCRIPTION}}""#, TokenStyle::Upper).unwrap();
        let fields = FieldSet::new().with("DESCRIPTION", r#"a "quoted" #{x} $@"#);
        assert_eq!(
            template.render(&fields).unwrap().as_str(),
            r#"desc "a "quoted" #{x} $@""#
        );
    }

    #[test]
    fn embedded_script_braces_stay_literal() {
        let text = "exec \"#{libexec}/{{name}}\" \"$@\"\n{{PATH}} ${HOME}";
        let template = Template::new("t", text, TokenStyle::Lower).unwrap();
        let fields = FieldSet::new().with("name", "foo");
        assert_eq!(
            template.render(&fields).unwrap().as_str(),
            "exec \"#{libexec}/foo\" \"$@\"\n{{PATH}} ${HOME}"
        );
    }

    #[test]
    fn lower_template_renders_wrapper_name() {
        let template = FormulaTemplate::builder()
            .style(TokenStyle::Lower)
            .build()
            .unwrap();
        let fields = FieldSet::new()
            .with("classname", "Foo")
            .with("description", "bar")
            .with("homepage", "https://x")
            .with("url", "https://x/x.tar.gz")
            .with("sha256", "0".repeat(64))
            .with("version", "1.0")
            .with("license", "MIT")
            .with("name", "foo")
            .with("wrapper", "foo-run");

        let output = template.render(&fields).unwrap();
        assert!(output.as_str().contains(r#"(bin/"foo-run").write <<~EOS"#));
        assert!(output.as_str().starts_with("class Foo < Formula\n"));
    }

    // ========================================================================
    // Template Tests
    // ========================================================================

    #[test]
    fn template_rejects_empty_text() {
        assert!(matches!(
            Template::new("empty", "", TokenStyle::Upper),
            Err(DomainError::EmptyTemplate { .. })
        ));
    }

    #[test]
    fn template_lists_placeholders_in_first_use_order() {
        let template = Template::new("t", "{{B}} {{A}} {{B}} {{zz}}", Vocabulary::new(["A", "B"])).unwrap();
        assert_eq!(template.placeholders(), vec!["B", "A"]);
    }

    #[test]
    fn template_without_placeholders_renders_as_is() {
        let template = Template::new("plain", "class X < Formula\nend\n", TokenStyle::Upper).unwrap();
        let output = template.render(&FieldSet::new()).unwrap();
        assert_eq!(output.as_str(), template.text());
        assert_eq!(output.substitutions(), 0);
    }

    // ========================================================================
    // Validator Tests
    // ========================================================================

    #[test]
    fn validator_names_the_field() {
        let template = FormulaTemplate::builder().build().unwrap();
        let fields = FieldSet::new().with("CLASSNAME", "lowercase").with("NAME", "foo");
        let problems = DomainValidator::field_set_problems(&template, &fields, TokenStyle::Upper);
        assert!(matches!(
            problems.as_slice(),
            [DomainError::InvalidField { field, .. }] if field == "class name"
        ));
    }

    #[test]
    fn missing_field_suggests_set_flag() {
        let err = DomainError::MissingField {
            name: "URL".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("--set URL=")));
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}
