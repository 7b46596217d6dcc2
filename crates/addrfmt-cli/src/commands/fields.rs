//! Implementation of the `addrfmt fields` command.

use addrfmt::{AddressField, FormOptions, RegionDataMap, ScriptType, WidthType};
use miette::IntoDiagnostic;
use serde::Serialize;

use crate::output::table::{format_fields_table, FieldRow};

/// Arguments for the fields command.
#[derive(Debug, clap::Args)]
pub struct FieldsArgs {
    /// Region code (e.g., US, JP)
    pub region: String,

    /// Use the region's Latin-script layout
    #[arg(long)]
    pub latin: bool,

    /// Custom field order for the region (comma-separated field names or codes)
    #[arg(long, value_delimiter = ',')]
    pub order: Vec<AddressField>,

    /// Fields to leave out of the form (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub hide: Vec<AddressField>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for a region's form layout.
#[derive(Debug, Serialize)]
struct FieldsJson {
    region: String,
    script: ScriptType,
    languages: Vec<String>,
    fields: Vec<FieldJson>,
}

#[derive(Debug, Serialize)]
struct FieldJson {
    field: AddressField,
    code: char,
    required: bool,
    width: WidthType,
}

/// Run the fields command.
pub fn run_fields(args: FieldsArgs, region_data: &RegionDataMap) -> miette::Result<i32> {
    let region = args.region.to_ascii_uppercase();
    let script = if args.latin {
        ScriptType::Latin
    } else {
        ScriptType::Local
    };

    let mut options = FormOptions::new();
    for &field in &args.hide {
        options.set_hidden(field);
    }
    if let Err(e) = options.set_custom_field_order(&region, &args.order) {
        eprintln!("Invalid field order: {}", e);
        return Ok(exitcode::DATAERR);
    }

    let interpreter = match super::interpreter(region_data, options) {
        Ok(interpreter) => interpreter,
        Err(code) => return Ok(code),
    };
    let (order, required) = match interpreter
        .address_field_order(script, &region)
        .and_then(|order| Ok((order, interpreter.required_fields(&region)?)))
    {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("Invalid metadata for region {}: {}", region, e);
            return Ok(exitcode::DATAERR);
        }
    };

    let rows: Vec<FieldRow> = order
        .into_iter()
        .filter(|&field| !interpreter.options().is_hidden(field))
        .map(|field| FieldRow {
            field,
            required: required.contains(&field)
                || (field == AddressField::AddressLine1
                    && required.contains(&AddressField::StreetAddress)),
            width: interpreter.width_for_region(field, &region),
        })
        .collect();

    if args.json {
        let output = FieldsJson {
            region: region.clone(),
            script,
            languages: interpreter
                .region_languages(&region)
                .into_iter()
                .map(str::to_string)
                .collect(),
            fields: rows
                .iter()
                .map(|row| FieldJson {
                    field: row.field,
                    code: row.field.code(),
                    required: row.required,
                    width: row.width,
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        println!("{}", format_fields_table(&rows));
        if !region_data.contains_region(&region) {
            println!("\nUnknown region {}, showing the default layout", region);
        }
    }
    Ok(exitcode::OK)
}
