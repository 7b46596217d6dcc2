mod address;
mod field;
mod form_options;
mod lookup_key;

pub use address::{AddressData, AddressDataBuilder};
pub use field::{AddressField, FieldError, WidthType, compute_suggestions};
pub use form_options::FormOptions;
pub use lookup_key::{KeyError, KeyType, LookupKey, LookupKeyBuilder, ScriptType};
