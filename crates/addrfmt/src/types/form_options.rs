use std::collections::{BTreeSet, HashMap, HashSet};

use super::{AddressField, FieldError};

/// Caller preferences for how address forms are laid out.
///
/// Options are plain data: configure them once, then hand them to a
/// [`FormatInterpreter`](crate::FormatInterpreter), which keeps its own copy.
///
/// # Example
///
/// ```
/// use addrfmt::{AddressField, FormOptions};
///
/// let mut options = FormOptions::new();
/// options
///     .set_hidden(AddressField::Organization)
///     .set_custom_field_order("US", &[AddressField::PostalCode, AddressField::Locality])
///     .unwrap();
///
/// assert!(options.is_hidden(AddressField::Organization));
/// assert_eq!(options.custom_field_order("US").len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormOptions {
    hidden_fields: BTreeSet<AddressField>,
    readonly_fields: BTreeSet<AddressField>,
    /// Upper-cased region codes.
    blacklisted_regions: BTreeSet<String>,
    /// Region code to a duplicate-free field list.
    custom_field_order: HashMap<String, Vec<AddressField>>,
}

impl FormOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide a field from forms in every region.
    pub fn set_hidden(&mut self, field: AddressField) -> &mut Self {
        self.hidden_fields.insert(field);
        self
    }

    /// Show a field but prevent edits to it.
    pub fn set_readonly(&mut self, field: AddressField) -> &mut Self {
        self.readonly_fields.insert(field);
        self
    }

    /// Exclude a region from region pickers. Matching ignores case.
    pub fn blacklist_region(&mut self, region_code: &str) -> &mut Self {
        self.blacklisted_regions
            .insert(region_code.to_ascii_uppercase());
        self
    }

    /// Reorder fields for one region.
    ///
    /// Custom orders can only rearrange fields the region's template shows;
    /// fields it does not show are ignored when the order is applied. An
    /// empty list removes any override for the region. A list naming the
    /// same field twice is rejected.
    pub fn set_custom_field_order(
        &mut self,
        region_code: &str,
        fields: &[AddressField],
    ) -> Result<&mut Self, FieldError> {
        if fields.is_empty() {
            self.custom_field_order.remove(region_code);
            return Ok(self);
        }
        let mut seen = HashSet::with_capacity(fields.len());
        if let Some(&field) = fields.iter().find(|&&field| !seen.insert(field)) {
            return Err(FieldError::DuplicateCustomField {
                region: region_code.to_string(),
                field,
            });
        }
        self.custom_field_order
            .insert(region_code.to_string(), fields.to_vec());
        Ok(self)
    }

    pub fn is_hidden(&self, field: AddressField) -> bool {
        self.hidden_fields.contains(&field)
    }

    pub fn is_readonly(&self, field: AddressField) -> bool {
        self.readonly_fields.contains(&field)
    }

    pub fn is_blacklisted_region(&self, region_code: &str) -> bool {
        self.blacklisted_regions
            .contains(&region_code.to_ascii_uppercase())
    }

    /// The custom order registered for a region, or an empty slice.
    pub fn custom_field_order(&self, region_code: &str) -> &[AddressField] {
        self.custom_field_order
            .get(region_code)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
