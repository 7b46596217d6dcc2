//! Implementation of the `addrfmt key` command.

use addrfmt::{AddressField, KeyError, KeyType, LookupKey, ScriptType};
use clap::{Args, Subcommand};
use miette::IntoDiagnostic;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::output::table::format_key_table;

/// Arguments for the key command.
#[derive(Debug, Args)]
pub struct KeyArgs {
    #[command(subcommand)]
    pub action: KeyAction,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

/// Lookup key operations.
#[derive(Debug, Subcommand)]
pub enum KeyAction {
    /// Show the parts of a key
    Decode {
        /// Key string (e.g., data/US/CA--en)
        key: String,
    },
    /// Print the key one hierarchy level up
    Parent {
        /// Data key string
        key: String,
    },
    /// Print the key truncated at a hierarchy field
    Upper {
        /// Data key string
        key: String,

        /// Hierarchy field to keep (country, admin_area, locality, dependent_locality)
        #[arg(long)]
        field: AddressField,
    },
}

/// JSON output for a decoded key.
#[derive(Debug, Serialize)]
struct DecodedKey<'a> {
    key: &'a LookupKey,
    key_type: KeyType,
    script: ScriptType,
    language: Option<&'a str>,
    levels: Vec<Level<'a>>,
}

#[derive(Debug, Serialize)]
struct Level<'a> {
    field: AddressField,
    value: &'a str,
}

/// Run the key command.
pub fn run_key(args: KeyArgs) -> miette::Result<i32> {
    let derived = match &args.action {
        KeyAction::Decode { key } => {
            return match key.parse::<LookupKey>() {
                Ok(key) => print_decoded(&key, args.json),
                Err(e) => Ok(report_key_error(&e, args.json)),
            };
        }
        KeyAction::Parent { key } => key.parse::<LookupKey>().and_then(|key| key.parent_key()),
        KeyAction::Upper { key, field } => key
            .parse::<LookupKey>()
            .and_then(|key| key.key_for_upper_level_field(*field)),
    };

    match derived {
        Ok(Some(key)) => {
            if args.json {
                println!("{}", serde_json::to_string(&key).into_diagnostic()?);
            } else {
                println!("{}", key);
            }
            Ok(exitcode::OK)
        }
        Ok(None) => {
            if args.json {
                println!("null");
            } else {
                eprintln!(
                    "{}",
                    "no such key".if_supports_color(Stream::Stderr, OwoColorize::dimmed)
                );
            }
            Ok(exitcode::DATAERR)
        }
        Err(e) => Ok(report_key_error(&e, args.json)),
    }
}

fn print_decoded(key: &LookupKey, json: bool) -> miette::Result<i32> {
    let levels: Vec<Level<'_>> = AddressField::HIERARCHY
        .into_iter()
        .map_while(|field| {
            key.value_for_upper_level_field(field)
                .map(|value| Level { field, value })
        })
        .collect();

    if json {
        let output = DecodedKey {
            key,
            key_type: key.key_type(),
            script: key.script_type(),
            language: key.language_code(),
            levels,
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        println!("{}", key.if_supports_color(Stream::Stdout, OwoColorize::bold));
        let rows: Vec<(AddressField, &str)> =
            levels.iter().map(|level| (level.field, level.value)).collect();
        println!("{}", format_key_table(key, &rows));
    }
    Ok(exitcode::OK)
}

fn report_key_error(error: &KeyError, json: bool) -> i32 {
    if json {
        let output = serde_json::json!({ "error": error.to_string() });
        eprintln!("{}", output);
    } else {
        eprintln!(
            "{} {}",
            "Key error:".if_supports_color(Stream::Stderr, OwoColorize::red),
            error
        );
    }
    exitcode::DATAERR
}
