//! Implementation of the `addrfmt format` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use addrfmt::interpreter::{prune_tokens, render_lines};
use addrfmt::parser::parse_template_strict;
use addrfmt::{AddressData, AddressField, FormOptions, FormatError, RegionDataMap};
use miette::{miette, IntoDiagnostic};
use serde::Serialize;

use crate::output::TemplateDiagnostic;

/// Arguments for the format command.
#[derive(Debug, clap::Args)]
pub struct FormatArgs {
    /// JSON file holding an address; flags below override its values
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Region code (e.g., US, JP)
    #[arg(long)]
    pub region: Option<String>,

    /// Street address line (repeatable)
    #[arg(short = 'a', long = "address")]
    pub address_lines: Vec<String>,

    #[arg(long)]
    pub recipient: Option<String>,

    #[arg(long)]
    pub organization: Option<String>,

    #[arg(long)]
    pub admin_area: Option<String>,

    #[arg(long)]
    pub locality: Option<String>,

    #[arg(long)]
    pub dependent_locality: Option<String>,

    #[arg(long)]
    pub postal_code: Option<String>,

    #[arg(long)]
    pub sorting_code: Option<String>,

    /// BCP-47 language tag; an explicit Latin script (e.g., ja-Latn) selects the Latin format
    #[arg(long)]
    pub language: Option<String>,

    /// Render with this template instead of the region's format
    #[arg(long)]
    pub template: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for format results.
#[derive(Serialize)]
struct FormatResult<'a> {
    address: &'a AddressData,
    lines: Vec<String>,
}

impl FormatArgs {
    /// Merge the input file (if any) with the flags given on the command line.
    fn address(&self) -> miette::Result<AddressData> {
        let base = match &self.input {
            Some(path) => {
                let content = read_to_string(path)
                    .into_diagnostic()
                    .map_err(|e| miette!("Failed to read address file {:?}: {}", path, e))?;
                serde_json::from_str::<AddressData>(&content)
                    .map_err(|e| miette!("Invalid address file {:?}: {}", path, e))?
            }
            None => AddressData::default(),
        };

        let mut builder = base.to_builder();
        let singles = [
            (&self.region, AddressField::Country),
            (&self.recipient, AddressField::Recipient),
            (&self.organization, AddressField::Organization),
            (&self.admin_area, AddressField::AdminArea),
            (&self.locality, AddressField::Locality),
            (&self.dependent_locality, AddressField::DependentLocality),
            (&self.postal_code, AddressField::PostalCode),
            (&self.sorting_code, AddressField::SortingCode),
        ];
        for (value, field) in singles {
            if let Some(value) = value {
                builder.set(field, Some(value.as_str()));
            }
        }
        if !self.address_lines.is_empty() {
            builder.set_address_lines(self.address_lines.iter().cloned());
        }
        if let Some(language) = &self.language {
            builder.set_language_code(language.as_str());
        }
        Ok(builder.build())
    }
}

/// Run the format command.
pub fn run_format(args: FormatArgs, region_data: &RegionDataMap) -> miette::Result<i32> {
    let address = match args.address() {
        Ok(address) => address,
        Err(e) => {
            eprintln!("{:?}", e);
            return Ok(exitcode::DATAERR);
        }
    };
    tracing::debug!(%address, "formatting address");

    let lines = match &args.template {
        Some(template) => match render_with_template(template, &address) {
            Ok(lines) => lines,
            Err(diagnostic) => {
                eprintln!("{:?}", miette::Report::new(diagnostic));
                return Ok(exitcode::DATAERR);
            }
        },
        None => {
            let interpreter = match super::interpreter(region_data, FormOptions::new()) {
                Ok(interpreter) => interpreter,
                Err(code) => return Ok(code),
            };
            match interpreter.envelope_address(&address) {
                Ok(lines) => lines,
                Err(e) => return Ok(report_format_error(&e, args.json)),
            }
        }
    };

    if args.json {
        let output = FormatResult {
            address: &address,
            lines,
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        for line in &lines {
            println!("{}", line);
        }
    }
    Ok(exitcode::OK)
}

fn render_with_template(
    template: &str,
    address: &AddressData,
) -> Result<Vec<String>, TemplateDiagnostic> {
    let parsed = parse_template_strict(template)
        .map_err(|e| TemplateDiagnostic::from_parse_error("--template", template, &e))?;
    let tokens = prune_tokens(&parsed.tokens, address)
        .map_err(|e| TemplateDiagnostic::whole_template("--template", template, &e))?;
    render_lines(&tokens, address)
        .map_err(|e| TemplateDiagnostic::whole_template("--template", template, &e))
}

fn report_format_error(error: &FormatError, json: bool) -> i32 {
    if json {
        let output = serde_json::json!({ "error": error.to_string() });
        eprintln!("{}", output);
    } else {
        eprintln!("Format error: {}", error);
    }
    match error {
        FormatError::Metadata(_) | FormatError::MissingDefaultFormat => exitcode::SOFTWARE,
        _ => exitcode::DATAERR,
    }
}
