//! Address form layout and envelope formatting driven by per-region metadata.
//!
//! Each region's metadata names the fields its addresses use, the order
//! they appear in, which are required, and how wide their inputs should be.
//! [`FormatInterpreter`] reads that metadata; [`LookupKey`] addresses
//! records in a hierarchy of country, administrative area, locality and
//! dependent locality.

pub mod interpreter;
pub mod parser;
pub mod types;

pub use addrfmt_data::DEFAULT_REGION;
pub use interpreter::{
    FormatError, FormatInterpreter, MetadataError, RegionDataKey, RegionDataMap,
    is_explicit_latin_script,
};
pub use parser::{ParseError, Template, Token, parse_template};
pub use types::{
    AddressData, AddressDataBuilder, AddressField, FieldError, FormOptions, KeyError, KeyType,
    LookupKey, LookupKeyBuilder, ScriptType, WidthType, compute_suggestions,
};
