//! Field ordering derived from format templates.

use std::collections::HashSet;

use crate::parser::Template;
use crate::types::{AddressField, FieldError};

/// Fields referenced by `template`, in first-seen order without duplicates.
pub fn template_field_order(template: &Template) -> Result<Vec<AddressField>, FieldError> {
    let mut seen = HashSet::new();
    let mut order = Vec::new();
    for field in template.fields() {
        let field = field?;
        if seen.insert(field) {
            order.push(field);
        }
    }
    Ok(order)
}

/// Reorder the fields of `order` that also appear in `custom`.
///
/// Fields of `custom` missing from `order` are ignored. The remaining
/// custom fields take over, in their own relative order, the slots that
/// custom fields held in `order`. Every other field keeps its position.
/// `order` must not contain duplicates; duplicates in `custom` are rejected.
pub fn apply_custom_order(
    region: &str,
    order: &mut [AddressField],
    custom: &[AddressField],
) -> Result<(), FieldError> {
    let present: HashSet<AddressField> = order.iter().copied().collect();
    let mut members = HashSet::with_capacity(custom.len());
    let mut filtered = Vec::with_capacity(custom.len());
    for &field in custom {
        if !members.insert(field) {
            return Err(FieldError::DuplicateCustomField {
                region: region.to_string(),
                field,
            });
        }
        if present.contains(&field) {
            filtered.push(field);
        }
    }

    let mut cursor = filtered.into_iter();
    for slot in order.iter_mut().filter(|slot| members.contains(&**slot)) {
        if let Some(field) = cursor.next() {
            *slot = field;
        }
    }
    Ok(())
}

/// Replace [`AddressField::StreetAddress`] with the two legacy line fields.
pub fn expand_street_address(order: &mut Vec<AddressField>) {
    if let Some(index) = order
        .iter()
        .position(|&field| field == AddressField::StreetAddress)
    {
        order[index] = AddressField::AddressLine1;
        order.insert(index + 1, AddressField::AddressLine2);
    }
}
