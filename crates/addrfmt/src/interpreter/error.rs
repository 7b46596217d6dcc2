//! Error types for the format interpreter and region metadata.

use std::io;
use std::path::PathBuf;

use addrfmt_data::DEFAULT_REGION;
use thiserror::Error;

use crate::parser::ParseError;
use crate::types::FieldError;

/// Errors raised while loading region metadata.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// Region data file could not be read.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A region's metadata is not valid JSON.
    #[error("invalid json for region code '{region}': {source}")]
    InvalidJson {
        region: String,
        #[source]
        source: serde_json::Error,
    },

    /// A region's metadata is valid JSON but not an object.
    #[error("metadata for region code '{region}' is not a JSON object")]
    NotAnObject { region: String },
}

/// An error that occurred while interpreting region formats.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The region's template could not be tokenized or names an unknown field.
    #[error("invalid format template for region '{region}': {source}")]
    InvalidTemplate {
        region: String,
        #[source]
        source: ParseError,
    },

    /// The region's `require` string names an unknown field.
    #[error("invalid required fields for region '{region}': {source}")]
    InvalidRequired {
        region: String,
        #[source]
        source: FieldError,
    },

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Metadata(#[from] MetadataError),

    /// The region table cannot supply the default format every lookup falls back to.
    #[error("region data has no default format for '{}'", DEFAULT_REGION)]
    MissingDefaultFormat,
}
