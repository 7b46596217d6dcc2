use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use super::AddressField;

/// Number of legacy single-line address fields.
const LEGACY_LINE_COUNT: usize = 2;

/// An immutable postal address.
///
/// Every stored string is non-empty after trimming; empty or whitespace-only
/// input is treated as absent. Street address lines never contain line
/// breaks: a multi-line value is split into separate lines when the address
/// is built, keeping their order and dropping blank lines.
///
/// Instances are produced by [`AddressDataBuilder`], which can be reused to
/// build several addresses.
///
/// # Example
///
/// ```
/// use addrfmt::AddressData;
///
/// let address = AddressData::builder()
///     .set_region_code("US")
///     .set_address("1600 Amphitheatre Ave\n\nRoom 122")
///     .set_locality("  Mountain View ")
///     .build();
///
/// assert_eq!(address.region_code(), Some("US"));
/// assert_eq!(address.address_lines(), ["1600 Amphitheatre Ave", "Room 122"]);
/// assert_eq!(address.locality(), Some("Mountain View"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "AddressRecord")]
pub struct AddressData {
    #[serde(skip_serializing_if = "Option::is_none")]
    region_code: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    address_lines: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    admin_area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dependent_locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sorting_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    recipient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    landmark_address_descriptor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    landmark_affix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    landmark_name: Option<String>,
}

impl AddressData {
    /// Start building a new address.
    pub fn builder() -> AddressDataBuilder {
        AddressDataBuilder::new()
    }

    /// A builder pre-populated with every value of this address.
    pub fn to_builder(&self) -> AddressDataBuilder {
        let mut builder = AddressDataBuilder::new();
        builder.set_address_data(self);
        builder
    }

    /// The region code (for example `"US"`), used as the postal country.
    pub fn region_code(&self) -> Option<&str> {
        self.region_code.as_deref()
    }

    /// Street address lines, each trimmed and non-empty.
    pub fn address_lines(&self) -> &[String] {
        &self.address_lines
    }

    pub fn admin_area(&self) -> Option<&str> {
        self.admin_area.as_deref()
    }

    pub fn locality(&self) -> Option<&str> {
        self.locality.as_deref()
    }

    pub fn dependent_locality(&self) -> Option<&str> {
        self.dependent_locality.as_deref()
    }

    pub fn postal_code(&self) -> Option<&str> {
        self.postal_code.as_deref()
    }

    pub fn sorting_code(&self) -> Option<&str> {
        self.sorting_code.as_deref()
    }

    pub fn organization(&self) -> Option<&str> {
        self.organization.as_deref()
    }

    pub fn recipient(&self) -> Option<&str> {
        self.recipient.as_deref()
    }

    /// BCP-47 language tag of the address content, if known.
    pub fn language_code(&self) -> Option<&str> {
        self.language_code.as_deref()
    }

    pub fn landmark_address_descriptor(&self) -> Option<&str> {
        self.landmark_address_descriptor.as_deref()
    }

    pub fn landmark_affix(&self) -> Option<&str> {
        self.landmark_affix.as_deref()
    }

    pub fn landmark_name(&self) -> Option<&str> {
        self.landmark_name.as_deref()
    }

    /// First street address line, for forms that still use two fixed lines.
    pub fn address_line_1(&self) -> Option<&str> {
        self.address_lines.first().map(String::as_str)
    }

    /// Second street address line, for forms that still use two fixed lines.
    ///
    /// Any lines beyond the second are folded into it, joined with `", "`.
    pub fn address_line_2(&self) -> Option<Cow<'_, str>> {
        match self.address_lines.len() {
            0 | 1 => None,
            LEGACY_LINE_COUNT => Some(Cow::Borrowed(self.address_lines[1].as_str())),
            _ => Some(Cow::Owned(self.address_lines[1..].join(", "))),
        }
    }

    /// The value held for `field`.
    ///
    /// [`AddressField::StreetAddress`] yields every line joined with `'\n'`.
    pub fn field_value(&self, field: AddressField) -> Option<Cow<'_, str>> {
        let single = match field {
            AddressField::Country => self.region_code(),
            AddressField::AdminArea => self.admin_area(),
            AddressField::Locality => self.locality(),
            AddressField::DependentLocality => self.dependent_locality(),
            AddressField::PostalCode => self.postal_code(),
            AddressField::SortingCode => self.sorting_code(),
            AddressField::Organization => self.organization(),
            AddressField::Recipient => self.recipient(),
            AddressField::LandmarkAddressDescriptor => self.landmark_address_descriptor(),
            AddressField::LandmarkAffix => self.landmark_affix(),
            AddressField::LandmarkName => self.landmark_name(),
            AddressField::AddressLine1 => self.address_line_1(),
            AddressField::AddressLine2 => return self.address_line_2(),
            AddressField::StreetAddress => {
                if self.address_lines.is_empty() {
                    return None;
                }
                return Some(Cow::Owned(self.address_lines.join("\n")));
            }
        };
        single.map(Cow::Borrowed)
    }

    /// Whether the address holds a non-empty value for `field`.
    pub fn has_value(&self, field: AddressField) -> bool {
        match field {
            AddressField::StreetAddress | AddressField::AddressLine1 => {
                !self.address_lines.is_empty()
            }
            AddressField::AddressLine2 => self.address_lines.len() > 1,
            _ => self.field_value(field).is_some(),
        }
    }
}

impl Display for AddressData {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "(AddressData:")?;
        if let Some(language) = self.language_code() {
            write!(f, " language={language};")?;
        }
        for field in AddressField::ALL {
            if matches!(
                field,
                AddressField::AddressLine1 | AddressField::AddressLine2
            ) {
                continue;
            }
            if let Some(value) = self.field_value(field) {
                write!(f, " {field}={};", value.replace('\n', " | "))?;
            }
        }
        write!(f, ")")
    }
}

/// Mutable staging area for [`AddressData`].
///
/// Setters trim their input; a value that is empty after trimming clears the
/// field. [`AddressDataBuilder::build`] borrows the builder, so one builder
/// can produce any number of addresses.
#[derive(Debug, Clone, Default)]
pub struct AddressDataBuilder {
    /// Single-valued fields, already trimmed.
    fields: BTreeMap<AddressField, String>,
    /// Raw street lines; `None` marks a cleared legacy line slot.
    address_lines: Vec<Option<String>>,
    language: Option<String>,
}

impl AddressDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_region_code(&mut self, region_code: impl Into<String>) -> &mut Self {
        self.set_single(AddressField::Country, Some(region_code.into()))
    }

    pub fn set_admin_area(&mut self, admin_area: impl Into<String>) -> &mut Self {
        self.set_single(AddressField::AdminArea, Some(admin_area.into()))
    }

    pub fn set_locality(&mut self, locality: impl Into<String>) -> &mut Self {
        self.set_single(AddressField::Locality, Some(locality.into()))
    }

    pub fn set_dependent_locality(&mut self, dependent_locality: impl Into<String>) -> &mut Self {
        self.set_single(AddressField::DependentLocality, Some(dependent_locality.into()))
    }

    pub fn set_postal_code(&mut self, postal_code: impl Into<String>) -> &mut Self {
        self.set_single(AddressField::PostalCode, Some(postal_code.into()))
    }

    pub fn set_sorting_code(&mut self, sorting_code: impl Into<String>) -> &mut Self {
        self.set_single(AddressField::SortingCode, Some(sorting_code.into()))
    }

    pub fn set_organization(&mut self, organization: impl Into<String>) -> &mut Self {
        self.set_single(AddressField::Organization, Some(organization.into()))
    }

    pub fn set_recipient(&mut self, recipient: impl Into<String>) -> &mut Self {
        self.set_single(AddressField::Recipient, Some(recipient.into()))
    }

    pub fn set_landmark_address_descriptor(&mut self, value: impl Into<String>) -> &mut Self {
        self.set_single(AddressField::LandmarkAddressDescriptor, Some(value.into()))
    }

    pub fn set_landmark_affix(&mut self, value: impl Into<String>) -> &mut Self {
        self.set_single(AddressField::LandmarkAffix, Some(value.into()))
    }

    pub fn set_landmark_name(&mut self, value: impl Into<String>) -> &mut Self {
        self.set_single(AddressField::LandmarkName, Some(value.into()))
    }

    /// Set the BCP-47 language tag.
    pub fn set_language_code(&mut self, language: impl Into<String>) -> &mut Self {
        self.language = trim_to_none(&language.into());
        self
    }

    pub fn clear_language_code(&mut self) -> &mut Self {
        self.language = None;
        self
    }

    /// Replace all street address lines.
    pub fn set_address_lines<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.address_lines = lines.into_iter().map(|l| Some(l.into())).collect();
        self
    }

    /// Append one street address line.
    pub fn add_address_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.address_lines.push(Some(line.into()));
        self
    }

    /// Replace the street address with a single, possibly multi-line, value.
    pub fn set_address(&mut self, value: impl Into<String>) -> &mut Self {
        self.address_lines = vec![Some(value.into())];
        self
    }

    /// Set the first legacy address line.
    pub fn set_address_line_1(&mut self, value: Option<&str>) -> &mut Self {
        self.set_address_line(1, value)
    }

    /// Set the second legacy address line.
    pub fn set_address_line_2(&mut self, value: Option<&str>) -> &mut Self {
        self.set_address_line(2, value)
    }

    /// Set or clear the value for any field.
    ///
    /// [`AddressField::StreetAddress`] replaces every line (a `None` clears
    /// them); the legacy line fields set the corresponding line only.
    pub fn set(&mut self, field: AddressField, value: Option<&str>) -> &mut Self {
        match field {
            AddressField::StreetAddress => match value {
                Some(value) => self.set_address(value),
                None => {
                    self.address_lines.clear();
                    self
                }
            },
            AddressField::AddressLine1 => self.set_address_line(1, value),
            AddressField::AddressLine2 => self.set_address_line(2, value),
            _ => self.set_single(field, value.map(str::to_string)),
        }
    }

    /// Copy every value from `data`, replacing what the builder holds.
    pub fn set_address_data(&mut self, data: &AddressData) -> &mut Self {
        self.fields.clear();
        for field in AddressField::ALL {
            if is_single_valued(field) {
                if let Some(value) = data.field_value(field) {
                    self.fields.insert(field, value.into_owned());
                }
            }
        }
        self.address_lines = data.address_lines.iter().cloned().map(Some).collect();
        self.language = data.language_code.clone();
        self
    }

    /// Produce an immutable address from the current builder state.
    pub fn build(&self) -> AddressData {
        let get = |field: AddressField| self.fields.get(&field).cloned();
        AddressData {
            region_code: get(AddressField::Country),
            address_lines: normalize_address_lines(&self.address_lines),
            admin_area: get(AddressField::AdminArea),
            locality: get(AddressField::Locality),
            dependent_locality: get(AddressField::DependentLocality),
            postal_code: get(AddressField::PostalCode),
            sorting_code: get(AddressField::SortingCode),
            organization: get(AddressField::Organization),
            recipient: get(AddressField::Recipient),
            language_code: self.language.clone(),
            landmark_address_descriptor: get(AddressField::LandmarkAddressDescriptor),
            landmark_affix: get(AddressField::LandmarkAffix),
            landmark_name: get(AddressField::LandmarkName),
        }
    }

    fn set_single(&mut self, field: AddressField, value: Option<String>) -> &mut Self {
        match value.as_deref().and_then(trim_to_none) {
            Some(value) => {
                self.fields.insert(field, value);
            }
            None => {
                self.fields.remove(&field);
            }
        }
        self
    }

    /// Sets a 1-based legacy line, padding with empty slots or trimming
    /// trailing empty slots as needed.
    fn set_address_line(&mut self, line_number: usize, value: Option<&str>) -> &mut Self {
        let index = line_number - 1;
        match value.and_then(trim_to_none) {
            None => {
                if line_number < self.address_lines.len() {
                    self.address_lines[index] = None;
                } else if line_number == self.address_lines.len() {
                    self.address_lines.pop();
                    while matches!(self.address_lines.last(), Some(None)) {
                        self.address_lines.pop();
                    }
                }
            }
            Some(_) => {
                if self.address_lines.len() < line_number {
                    self.address_lines.resize(line_number, None);
                }
                self.address_lines[index] = value.map(str::to_string);
            }
        }
        self
    }
}

/// Serialized form of an address; routed through the builder so that
/// deserialized values obey the same trimming and line-splitting rules.
#[derive(Default, Deserialize)]
#[serde(default)]
struct AddressRecord {
    region_code: Option<String>,
    address_lines: Vec<String>,
    admin_area: Option<String>,
    locality: Option<String>,
    dependent_locality: Option<String>,
    postal_code: Option<String>,
    sorting_code: Option<String>,
    organization: Option<String>,
    recipient: Option<String>,
    language_code: Option<String>,
    landmark_address_descriptor: Option<String>,
    landmark_affix: Option<String>,
    landmark_name: Option<String>,
}

impl From<AddressRecord> for AddressData {
    fn from(record: AddressRecord) -> Self {
        let mut builder = AddressDataBuilder::new();
        let singles = [
            (AddressField::Country, record.region_code),
            (AddressField::AdminArea, record.admin_area),
            (AddressField::Locality, record.locality),
            (AddressField::DependentLocality, record.dependent_locality),
            (AddressField::PostalCode, record.postal_code),
            (AddressField::SortingCode, record.sorting_code),
            (AddressField::Organization, record.organization),
            (AddressField::Recipient, record.recipient),
            (
                AddressField::LandmarkAddressDescriptor,
                record.landmark_address_descriptor,
            ),
            (AddressField::LandmarkAffix, record.landmark_affix),
            (AddressField::LandmarkName, record.landmark_name),
        ];
        for (field, value) in singles {
            builder.set(field, value.as_deref());
        }
        if let Some(language) = record.language_code {
            builder.set_language_code(language);
        }
        builder.set_address_lines(record.address_lines).build()
    }
}

fn is_single_valued(field: AddressField) -> bool {
    !matches!(
        field,
        AddressField::StreetAddress | AddressField::AddressLine1 | AddressField::AddressLine2
    )
}

/// Trim ASCII whitespace and control characters; `None` if nothing is left.
pub(crate) fn trim_to_none(value: &str) -> Option<String> {
    let trimmed = value.trim_matches(|c: char| c <= ' ');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Split embedded line breaks, trim every line and drop the empty ones.
fn normalize_address_lines(lines: &[Option<String>]) -> Vec<String> {
    lines
        .iter()
        .flatten()
        .flat_map(|line| line.split('\n'))
        .filter_map(trim_to_none)
        .collect()
}
