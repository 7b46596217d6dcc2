//! CLI command implementations.

mod fields;
mod format;
mod key;

pub use fields::{run_fields, FieldsArgs};
pub use format::{run_format, FormatArgs};
pub use key::{run_key, KeyArgs};

use addrfmt::{FormOptions, FormatInterpreter, RegionDataMap};

/// Build an interpreter, reporting an unusable region table as a data error.
fn interpreter(
    region_data: &RegionDataMap,
    options: FormOptions,
) -> Result<FormatInterpreter<'_>, i32> {
    FormatInterpreter::builder()
        .region_data(region_data)
        .options(options)
        .build()
        .map_err(|e| {
            eprintln!("Invalid region data: {}", e);
            exitcode::DATAERR
        })
}
