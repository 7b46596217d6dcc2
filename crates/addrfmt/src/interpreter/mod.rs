//! Interpretation of per-region address metadata.
//!
//! Region records supply `%`-escaped templates and small encoded strings.
//! This module selects the right record, resolves field orders, decodes
//! requirements and width hints, and renders envelopes.

mod envelope;
mod error;
mod field_order;
mod format_interpreter;
mod language;
mod metadata;

pub use envelope::{prune_tokens, render_lines};
pub use error::{FormatError, MetadataError};
pub use field_order::{apply_custom_order, expand_street_address, template_field_order};
pub use format_interpreter::FormatInterpreter;
pub use language::is_explicit_latin_script;
pub use metadata::{RegionDataKey, RegionDataMap};
