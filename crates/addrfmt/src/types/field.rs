use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifies one input slot of an address form.
///
/// Every field has a single-character code used by region metadata
/// templates (`%C` is the locality, `%Z` the postal code, and so on). One
/// field may stand for more than one UI input: [`AddressField::StreetAddress`]
/// covers every free-form address line.
///
/// # Example
///
/// ```
/// use addrfmt::{AddressField, WidthType};
///
/// let field = AddressField::from_code('Z').unwrap();
/// assert_eq!(field, AddressField::PostalCode);
/// assert_eq!(field.code(), 'Z');
/// assert_eq!(field.default_width(), WidthType::Short);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressField {
    /// The region the address belongs to.
    Country,
    /// Legacy alias for the first line of [`AddressField::StreetAddress`].
    AddressLine1,
    /// Legacy alias for the remaining lines of [`AddressField::StreetAddress`].
    AddressLine2,
    /// All free-form street address lines.
    StreetAddress,
    /// Top-level administrative subdivision (state, province, prefecture).
    AdminArea,
    /// City or town.
    Locality,
    /// Neighborhood, suburb or district.
    DependentLocality,
    PostalCode,
    SortingCode,
    Recipient,
    Organization,
    LandmarkAddressDescriptor,
    LandmarkAffix,
    LandmarkName,
}

/// Horizontal space hint for an address input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidthType {
    /// Full-width input such as an address line or recipient.
    Long,
    /// Short, often bounded input such as a postal code.
    Short,
}

/// Errors raised when a field or width is named by an invalid code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("invalid field character: '{0}'")]
    UnknownCode(char),

    #[error("invalid width character: '{0}'")]
    UnknownWidth(char),

    #[error("duplicate address field '{field}' in custom order for region '{region}'")]
    DuplicateCustomField { region: String, field: AddressField },

    #[error("unknown address field '{name}'{}", format_suggestions(suggestions))]
    UnknownName {
        name: String,
        suggestions: Vec<String>,
    },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

impl AddressField {
    /// Every field, in declaration order.
    pub const ALL: [AddressField; 14] = [
        AddressField::Country,
        AddressField::AddressLine1,
        AddressField::AddressLine2,
        AddressField::StreetAddress,
        AddressField::AdminArea,
        AddressField::Locality,
        AddressField::DependentLocality,
        AddressField::PostalCode,
        AddressField::SortingCode,
        AddressField::Recipient,
        AddressField::Organization,
        AddressField::LandmarkAddressDescriptor,
        AddressField::LandmarkAffix,
        AddressField::LandmarkName,
    ];

    /// The fixed administrative hierarchy used by lookup keys, shallowest first.
    pub const HIERARCHY: [AddressField; 4] = [
        AddressField::Country,
        AddressField::AdminArea,
        AddressField::Locality,
        AddressField::DependentLocality,
    ];

    /// The metadata character code for this field.
    pub const fn code(self) -> char {
        match self {
            AddressField::Country => 'R',
            AddressField::AddressLine1 => '1',
            AddressField::AddressLine2 => '2',
            AddressField::StreetAddress => 'A',
            AddressField::AdminArea => 'S',
            AddressField::Locality => 'C',
            AddressField::DependentLocality => 'D',
            AddressField::PostalCode => 'Z',
            AddressField::SortingCode => 'X',
            AddressField::Recipient => 'N',
            AddressField::Organization => 'O',
            AddressField::LandmarkAddressDescriptor => 'T',
            AddressField::LandmarkAffix => 'F',
            AddressField::LandmarkName => 'L',
        }
    }

    /// Look up the field for a metadata character code.
    pub fn from_code(code: char) -> Result<AddressField, FieldError> {
        let field = match code {
            'R' => AddressField::Country,
            '1' => AddressField::AddressLine1,
            '2' => AddressField::AddressLine2,
            'A' => AddressField::StreetAddress,
            'S' => AddressField::AdminArea,
            'C' => AddressField::Locality,
            'D' => AddressField::DependentLocality,
            'Z' => AddressField::PostalCode,
            'X' => AddressField::SortingCode,
            'N' => AddressField::Recipient,
            'O' => AddressField::Organization,
            'T' => AddressField::LandmarkAddressDescriptor,
            'F' => AddressField::LandmarkAffix,
            'L' => AddressField::LandmarkName,
            other => return Err(FieldError::UnknownCode(other)),
        };
        Ok(field)
    }

    /// The snake_case name used in serialized data and on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            AddressField::Country => "country",
            AddressField::AddressLine1 => "address_line1",
            AddressField::AddressLine2 => "address_line2",
            AddressField::StreetAddress => "street_address",
            AddressField::AdminArea => "admin_area",
            AddressField::Locality => "locality",
            AddressField::DependentLocality => "dependent_locality",
            AddressField::PostalCode => "postal_code",
            AddressField::SortingCode => "sorting_code",
            AddressField::Recipient => "recipient",
            AddressField::Organization => "organization",
            AddressField::LandmarkAddressDescriptor => "landmark_address_descriptor",
            AddressField::LandmarkAffix => "landmark_affix",
            AddressField::LandmarkName => "landmark_name",
        }
    }

    /// Width used when the region metadata carries no override.
    pub const fn default_width(self) -> WidthType {
        match self {
            AddressField::PostalCode | AddressField::SortingCode => WidthType::Short,
            _ => WidthType::Long,
        }
    }

    /// Position of this field in [`AddressField::HIERARCHY`], if it has one.
    pub fn hierarchy_level(self) -> Option<usize> {
        AddressField::HIERARCHY.iter().position(|&f| f == self)
    }
}

impl Display for AddressField {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

impl FromStr for AddressField {
    type Err = FieldError;

    /// Parses a snake_case field name, or a single metadata code character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(field) = AddressField::ALL.iter().find(|f| f.name() == s) {
            return Ok(*field);
        }
        let mut chars = s.chars();
        if let (Some(code), None) = (chars.next(), chars.next()) {
            if let Ok(field) = AddressField::from_code(code) {
                return Ok(field);
            }
        }
        let available: Vec<String> = AddressField::ALL
            .iter()
            .map(|f| f.name().to_string())
            .collect();
        Err(FieldError::UnknownName {
            name: s.to_string(),
            suggestions: compute_suggestions(s, &available),
        })
    }
}

impl WidthType {
    /// Decode a width character from region metadata.
    ///
    /// `S` and `N` (narrow) mean short, `L` means long.
    pub fn from_code(code: char) -> Result<WidthType, FieldError> {
        match code {
            'N' | 'S' => Ok(WidthType::Short),
            'L' => Ok(WidthType::Long),
            other => Err(FieldError::UnknownWidth(other)),
        }
    }
}

impl Display for WidthType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            WidthType::Long => f.write_str("long"),
            WidthType::Short => f.write_str("short"),
        }
    }
}

/// Find up to three candidates close to `key` by edit distance.
///
/// Keys of three characters or fewer allow a distance of one, longer keys
/// allow two. The closest candidates come first.
pub fn compute_suggestions(key: &str, available: &[String]) -> Vec<String> {
    let max_distance = if key.chars().count() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| (strsim::levenshtein(key, candidate), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
