//! Table formatting utilities for CLI output.

use addrfmt::{AddressField, LookupKey, WidthType};
use comfy_table::{presets, ContentArrangement, Table};

/// One row of a region's form layout.
pub struct FieldRow {
    pub field: AddressField,
    pub required: bool,
    pub width: WidthType,
}

/// Format a region's form fields as a table.
pub fn format_fields_table(rows: &[FieldRow]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Field", "Code", "Required", "Width"]);

    for row in rows {
        table.add_row(vec![
            row.field.to_string(),
            row.field.code().to_string(),
            if row.required { "yes" } else { "" }.to_string(),
            row.width.to_string(),
        ]);
    }

    table
}

/// Format the parts of a lookup key as a table.
pub fn format_key_table(key: &LookupKey, levels: &[(AddressField, &str)]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Part", "Value"]);
    table.add_row(vec!["type", key.key_type().prefix()]);
    table.add_row(vec!["script", key.script_type().as_str()]);
    table.add_row(vec!["language", key.language_code().unwrap_or("-")]);
    for &(field, value) in levels {
        table.add_row(vec![field.name(), value]);
    }
    table
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}
