//! Implementation of the `brewrel fields` command.

use brewrel_adapters::FilesystemTemplateLoader;
use brewrel_core::{
    application::{FieldInfo, TemplateService},
    domain::TokenStyle,
};

use crate::{
    cli::{FieldsArgs, ListFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: FieldsArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let style = args
        .style
        .map(TokenStyle::from)
        .unwrap_or(config.defaults.style);

    let service = TemplateService::new(Box::new(FilesystemTemplateLoader::new()));
    let fields = service.vocabulary(style);

    // --output-format json wins over --format.
    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header(&format!("Placeholders ({style} style):"))?;
            for line in table_lines(&fields) {
                output.print(&line)?;
            }
        }
        ListFormat::List => {
            for field in &fields {
                output.emit(&format!("{}\n", field.placeholder))?;
            }
        }
        ListFormat::Json => output.json(&fields)?,
    }

    Ok(())
}

fn table_lines(fields: &[FieldInfo]) -> Vec<String> {
    let width = fields
        .iter()
        .map(|f| f.placeholder.len())
        .max()
        .unwrap_or(0);

    fields
        .iter()
        .map(|f| format!("  {:<width$}  {}", f.placeholder, f.description))
        .collect()
}
