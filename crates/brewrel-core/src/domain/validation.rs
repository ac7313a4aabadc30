use crate::domain::{
    entities::{FieldSet, Template, formula},
    error::DomainError,
    value_objects::TokenStyle,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across callers.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_template(template: &Template) -> Result<(), DomainError> {
        template.validate()
    }

    /// Problems with the values `template` will substitute.
    ///
    /// Only placeholders the template uses are checked. Absent values are
    /// skipped; rendering reports those as missing.
    pub fn field_set_problems(
        template: &Template,
        fields: &FieldSet,
        style: TokenStyle,
    ) -> Vec<DomainError> {
        let used = template.placeholders();

        style
            .fields()
            .filter_map(|field| {
                let key = field.key(style)?;
                if !used.contains(&key) {
                    return None;
                }
                let value = fields.get(key)?;
                if value.is_empty() {
                    return Some(formula::invalid(field, "value is required"));
                }
                formula::check_field(field, value)
                    .err()
                    .map(|reason| formula::invalid(field, reason))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_used_placeholders_are_checked() {
        let template = Template::new("t", "{{NAME}} {{URL}}", TokenStyle::Upper).unwrap();
        let fields = FieldSet::new()
            .with("NAME", "foo")
            .with("URL", "not-a-url")
            .with("SHA256", "short");

        let problems = DomainValidator::field_set_problems(&template, &fields, TokenStyle::Upper);

        assert_eq!(problems.len(), 1);
        assert!(problems[0].to_string().contains("not-a-url"));
    }

    #[test]
    fn absent_values_are_left_to_rendering() {
        let template = Template::new("t", "{{LICENSE}}", TokenStyle::Upper).unwrap();
        let problems =
            DomainValidator::field_set_problems(&template, &FieldSet::new(), TokenStyle::Upper);
        assert!(problems.is_empty());
    }

    #[test]
    fn empty_value_is_reported() {
        let template = Template::new("t", "{{version}}", TokenStyle::Lower).unwrap();
        let fields = FieldSet::new().with("version", "");
        let problems = DomainValidator::field_set_problems(&template, &fields, TokenStyle::Lower);
        assert!(matches!(problems.as_slice(), [DomainError::InvalidField { .. }]));
    }
}
