//! Implementation of the `brewrel render` command.
//!
//! Responsibility: assemble the field set from its sources, pick the
//! template, call the core services, and report. Substitution itself lives
//! in `brewrel-core`.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, instrument};

use brewrel_adapters::{FilesystemTemplateLoader, LocalFilesystem, PlaceholderRenderer, load_fields};
use brewrel_core::{
    application::{FormulaService, TemplateSelection, TemplateService},
    domain::{
        DomainValidator, Field, FieldSet, FormulaOptions, Template, TokenStyle, class_name_for,
    },
};

use crate::{
    cli::RenderArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Machine-readable result of a render.
#[derive(Debug, Serialize)]
struct RenderSummary<'a> {
    template: &'a str,
    style: TokenStyle,
    destination: Option<&'a Path>,
    bytes: usize,
    substitutions: usize,
    written: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<&'a str>,
}

/// Execute the `brewrel render` command.
///
/// 1. Resolve the style and the template
/// 2. Build the field set (config < fields file < typed flags < `--set`)
/// 3. Validate values (warnings, or errors with `--strict`)
/// 4. Render; write atomically with `-o`, print otherwise
#[instrument(skip_all)]
pub fn execute(args: RenderArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let style = args
        .style
        .map(TokenStyle::from)
        .unwrap_or(config.defaults.style);

    let templates = TemplateService::new(Box::new(FilesystemTemplateLoader::new()));
    let template = templates.resolve(&select_template(&args, &config, style)?)?;

    let fields = build_field_set(&args, &config, style)?;
    debug!(
        template = %template.name(),
        fields = fields.len(),
        "Field set assembled"
    );

    check_fields(&template, &fields, style, args.strict, &output)?;

    let service = FormulaService::new(
        Box::new(PlaceholderRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    let destination = args.output.as_deref();

    if args.dry_run {
        let rendered = service.render(&template, &fields)?;
        if output.is_json() {
            output.json(&RenderSummary {
                template: template.name(),
                style,
                destination,
                bytes: rendered.len(),
                substitutions: rendered.substitutions(),
                written: false,
                content: Some(rendered.as_str()),
            })?;
        } else {
            output.info(&format!(
                "Dry run: rendered '{}' ({} bytes, {} substitutions)",
                template.name(),
                rendered.len(),
                rendered.substitutions()
            ))?;
            if let Some(path) = destination {
                output.info(&format!("Would write {}", path.display()))?;
            }
        }
        return Ok(());
    }

    match destination {
        Some(path) => {
            let report = service.render_to(&template, &fields, path)?;
            info!(
                destination = %report.destination.display(),
                bytes = report.bytes,
                "Formula rendered"
            );
            if output.is_json() {
                output.json(&RenderSummary {
                    template: template.name(),
                    style,
                    destination: Some(&report.destination),
                    bytes: report.bytes,
                    substitutions: report.substitutions,
                    written: true,
                    content: None,
                })?;
            } else {
                output.success(&format!(
                    "Wrote {} ({} bytes, {} substitutions)",
                    report.destination.display(),
                    report.bytes,
                    report.substitutions
                ))?;
            }
        }
        None => {
            let rendered = service.render(&template, &fields)?;
            if output.is_json() {
                output.json(&RenderSummary {
                    template: template.name(),
                    style,
                    destination: None,
                    bytes: rendered.len(),
                    substitutions: rendered.substitutions(),
                    written: false,
                    content: Some(rendered.as_str()),
                })?;
            } else {
                output.emit(rendered.as_str())?;
            }
        }
    }

    Ok(())
}

// ── Template selection ────────────────────────────────────────────────────────

fn select_template(
    args: &RenderArgs,
    config: &AppConfig,
    style: TokenStyle,
) -> CliResult<TemplateSelection> {
    // Styles without a wrapper placeholder take --wrapper as the literal name.
    let wrapper_option = Field::Wrapper.key(style).is_none();

    if let Some(path) = &args.template {
        if args.lib_env_var.is_some() || (wrapper_option && args.wrapper.is_some()) {
            return Err(CliError::InvalidInput {
                message: format!(
                    "built-in template options cannot be combined with --template {}",
                    path.display()
                ),
                source: None,
            });
        }
        return Ok(TemplateSelection::File {
            path: path.clone(),
            style,
        });
    }

    let mut options = FormulaOptions::from(&config.formula);
    if wrapper_option {
        if let Some(wrapper) = &args.wrapper {
            options.wrapper_name = wrapper.clone();
        }
    }
    if let Some(var) = &args.lib_env_var {
        options.lib_env_var = var.clone();
    }

    Ok(TemplateSelection::Builtin { style, options })
}

// ── Field set ─────────────────────────────────────────────────────────────────

fn typed_fields(args: &RenderArgs) -> [(Field, Option<&String>); 9] {
    [
        (Field::ClassName, args.class_name.as_ref()),
        (Field::Description, args.desc.as_ref()),
        (Field::Homepage, args.homepage.as_ref()),
        (Field::Url, args.url.as_ref()),
        (Field::Sha256, args.sha256.as_ref()),
        (Field::Version, args.pkg_version.as_ref()),
        (Field::License, args.license.as_ref()),
        (Field::Name, args.name.as_ref()),
        (Field::Wrapper, args.wrapper.as_ref()),
    ]
}

/// Merge every field source for `style`, later sources winning.
fn build_field_set(args: &RenderArgs, config: &AppConfig, style: TokenStyle) -> CliResult<FieldSet> {
    let mut fields = FieldSet::new();

    let defaults = [
        (Field::License, config.defaults.license.as_ref()),
        (Field::Homepage, config.defaults.homepage.as_ref()),
    ];
    insert_typed(&mut fields, style, defaults);

    if let Some(path) = &args.fields {
        fields.merge(load_fields(path)?);
    }

    insert_typed(&mut fields, style, typed_fields(args));

    fields.extend(args.set.iter().cloned());

    derive_class_name(&mut fields, style);
    Ok(fields)
}

fn insert_typed<'a>(
    fields: &mut FieldSet,
    style: TokenStyle,
    values: impl IntoIterator<Item = (Field, Option<&'a String>)>,
) {
    for (field, value) in values {
        if let (Some(key), Some(value)) = (field.key(style), value) {
            fields.insert(key, value.clone());
        }
    }
}

/// Fill in the class name from the package name when no source gave one.
fn derive_class_name(fields: &mut FieldSet, style: TokenStyle) {
    let (Some(class_key), Some(name_key)) = (Field::ClassName.key(style), Field::Name.key(style))
    else {
        return;
    };
    if fields.contains(class_key) {
        return;
    }
    let Some(class_name) = fields.get(name_key).map(class_name_for) else {
        return;
    };
    debug!(class_name = %class_name, "Derived class name from package name");
    fields.insert(class_key, class_name);
}

fn check_fields(
    template: &Template,
    fields: &FieldSet,
    style: TokenStyle,
    strict: bool,
    output: &OutputManager,
) -> CliResult<()> {
    let problems = DomainValidator::field_set_problems(template, fields, style);
    if problems.is_empty() {
        return Ok(());
    }
    if strict {
        return Err(CliError::FieldValidation { problems });
    }
    for problem in &problems {
        output.warning(&problem.to_string())?;
    }
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn render_args(extra: &[&str]) -> RenderArgs {
        let mut argv = vec!["brewrel", "render"];
        argv.extend_from_slice(extra);
        match Cli::parse_from(argv).command {
            Commands::Render(args) => args,
            _ => panic!("expected Render command"),
        }
    }

    #[test]
    fn typed_flags_use_style_keys() {
        let args = render_args(&["--name", "foo", "--pkg-version", "1.0"]);

        let upper = build_field_set(&args, &AppConfig::default(), TokenStyle::Upper).unwrap();
        assert_eq!(upper.get("NAME"), Some("foo"));
        assert_eq!(upper.get("VERSION"), Some("1.0"));

        let lower = build_field_set(&args, &AppConfig::default(), TokenStyle::Lower).unwrap();
        assert_eq!(lower.get("name"), Some("foo"));
        assert!(!lower.contains("NAME"));
    }

    #[test]
    fn class_name_derived_from_name() {
        let args = render_args(&["--name", "my-tool"]);
        let fields = build_field_set(&args, &AppConfig::default(), TokenStyle::Upper).unwrap();
        assert_eq!(fields.get("CLASSNAME"), Some("MyTool"));
    }

    #[test]
    fn explicit_class_name_is_kept() {
        let args = render_args(&["--name", "my-tool", "--class-name", "Mytool"]);
        let fields = build_field_set(&args, &AppConfig::default(), TokenStyle::Upper).unwrap();
        assert_eq!(fields.get("CLASSNAME"), Some("Mytool"));
    }

    #[test]
    fn precedence_config_file_flags_set() {
        let dir = TempDir::new().unwrap();
        let fields_path = dir.path().join("fields.toml");
        std::fs::write(
            &fields_path,
            "LICENSE = \"Apache-2.0\"\nVERSION = \"0.9\"\nURL = \"https://file\"\n",
        )
        .unwrap();

        let mut config = AppConfig::default();
        config.defaults.license = Some("MIT".into());
        config.defaults.homepage = Some("https://config".into());

        let path = fields_path.to_string_lossy().into_owned();
        let args = render_args(&[
            "--fields",
            path.as_str(),
            "--pkg-version",
            "1.0",
            "--url",
            "https://flag",
            "--set",
            "URL=https://set",
        ]);

        let fields = build_field_set(&args, &config, TokenStyle::Upper).unwrap();

        assert_eq!(fields.get("HOMEPAGE"), Some("https://config"));
        assert_eq!(fields.get("LICENSE"), Some("Apache-2.0"));
        assert_eq!(fields.get("VERSION"), Some("1.0"));
        assert_eq!(fields.get("URL"), Some("https://set"));
    }

    #[test]
    fn fields_file_uses_placeholder_names() {
        let dir = TempDir::new().unwrap();
        let fields_path = dir.path().join("fields.toml");
        std::fs::write(
            &fields_path,
            "NAME = \"my-tool\"\nclass_name = \"Ignored\"\n",
        )
        .unwrap();
        let path = fields_path.to_string_lossy().into_owned();

        let args = render_args(&["--fields", path.as_str()]);
        let fields = build_field_set(&args, &AppConfig::default(), TokenStyle::Upper).unwrap();
        assert_eq!(fields.get("CLASSNAME"), Some("MyTool"));

        std::fs::write(&fields_path, "NAME = \"my-tool\"\nCLASSNAME = \"Custom\"\n").unwrap();
        let fields = build_field_set(&args, &AppConfig::default(), TokenStyle::Upper).unwrap();
        assert_eq!(fields.get("CLASSNAME"), Some("Custom"));
    }

    #[test]
    fn upper_style_takes_wrapper_as_option() {
        let args = render_args(&["--wrapper", "foo", "--lib-env-var", "FOO_LIB"]);

        let selection = select_template(&args, &AppConfig::default(), TokenStyle::Upper).unwrap();
        let TemplateSelection::Builtin { options, .. } = selection else {
            panic!("expected built-in template");
        };
        assert_eq!(options.wrapper_name, "foo");
        assert_eq!(options.lib_env_var, "FOO_LIB");

        let fields = build_field_set(&args, &AppConfig::default(), TokenStyle::Upper).unwrap();
        assert!(fields.is_empty());
    }

    #[test]
    fn lower_style_takes_wrapper_as_field() {
        let args = render_args(&["--wrapper", "foo"]);

        let selection = select_template(&args, &AppConfig::default(), TokenStyle::Lower).unwrap();
        let TemplateSelection::Builtin { options, .. } = selection else {
            panic!("expected built-in template");
        };
        assert_eq!(options.wrapper_name, "mkx");

        let fields = build_field_set(&args, &AppConfig::default(), TokenStyle::Lower).unwrap();
        assert_eq!(fields.get("wrapper"), Some("foo"));
    }

    #[test]
    fn template_flag_selects_file() {
        let args = render_args(&["--template", "minimal.rb"]);
        assert_eq!(
            select_template(&args, &AppConfig::default(), TokenStyle::Upper).unwrap(),
            TemplateSelection::File {
                path: PathBuf::from("minimal.rb"),
                style: TokenStyle::Upper,
            }
        );
    }

    #[test]
    fn builtin_options_rejected_with_custom_template() {
        let args = render_args(&["--template", "minimal.rb", "--lib-env-var", "X"]);
        assert!(matches!(
            select_template(&args, &AppConfig::default(), TokenStyle::Lower),
            Err(CliError::InvalidInput { .. })
        ));

        let args = render_args(&["--template", "minimal.rb", "--wrapper", "foo"]);
        assert!(select_template(&args, &AppConfig::default(), TokenStyle::Upper).is_err());
        assert!(select_template(&args, &AppConfig::default(), TokenStyle::Lower).is_ok());
    }
}
