//! addrfmt CLI entry point.
//!
//! Provides command-line tools for region address metadata:
//! - `addrfmt format` - Render an address as envelope lines
//! - `addrfmt fields` - Show a region's form layout
//! - `addrfmt key` - Decode and derive lookup keys

mod commands;
mod output;

use std::io;
use std::path::PathBuf;
use std::process::exit;

use addrfmt::RegionDataMap;
use clap::{Parser, Subcommand, ValueEnum};
use commands::{run_fields, run_format, run_key, FieldsArgs, FormatArgs, KeyArgs};
use tracing_subscriber::EnvFilter;

/// Postal address format tools.
#[derive(Debug, Parser)]
#[command(name = "addrfmt")]
#[command(about = "Postal address format tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON file of region metadata to use instead of the bundled table
    #[arg(long, env = "ADDRFMT_REGION_DATA", global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render an address as envelope lines
    Format(FormatArgs),
    /// Show the form fields of a region
    Fields(FieldsArgs),
    /// Decode lookup keys and derive related keys
    Key(KeyArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG`; `--verbose` raises the default to debug.
fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let loaded = match cli.data.as_deref().map(RegionDataMap::from_json_file).transpose() {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("{:?}", miette::miette!("Failed to load region data: {}", e));
            exit(exitcode::DATAERR);
        }
    };
    let region_data = loaded.as_ref().unwrap_or_else(|| RegionDataMap::builtin());

    let result = match cli.command {
        Commands::Format(args) => run_format(args, region_data),
        Commands::Fields(args) => run_fields(args, region_data),
        Commands::Key(args) => run_key(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
