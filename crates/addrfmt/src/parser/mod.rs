//! Template and metadata-string parsing.
//!
//! Region metadata encodes layout as small `%`-escaped strings. The
//! tokenizer here is shared by the field-order resolver, the envelope
//! renderer and the width-override decoder.

pub mod ast;
pub mod error;
mod overrides;
mod template;

pub use ast::*;
pub use error::ParseError;
pub use overrides::{parse_required_fields, parse_width_overrides};
pub use template::{parse_template, parse_template_strict};
