//! Region metadata storage and typed key access.
//!
//! Each region code maps to a flat JSON object of string-valued keys such as
//! `fmt`, `require` and `width_overrides`. [`RegionDataMap::builtin`] serves
//! the bundled table from `addrfmt-data`; other tables can be loaded from
//! JSON files or in-memory entries.

use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use serde_json::{Map, Value};

use crate::interpreter::error::MetadataError;

/// Regions without a record of their own that read another region's record.
const ALIASED_REGIONS: [(&str, &str); 1] = [("CQ", "GG")];

static BUILTIN: LazyLock<RegionDataMap> = LazyLock::new(|| {
    RegionDataMap::from_entries(addrfmt_data::REGION_DATA.iter().copied())
        .expect("bundled region data is valid JSON")
});

/// Keys that may appear in a region's metadata record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionDataKey {
    Countries,
    Fmt,
    Id,
    Isoid,
    Key,
    Lang,
    Languages,
    Lfmt,
    LocalityNameType,
    Require,
    StateNameType,
    SublocalityNameType,
    SubKeys,
    SubLnames,
    SubMores,
    SubNames,
    WidthOverrides,
    Xzip,
    Zip,
    ZipNameType,
    Postprefix,
    Posturl,
}

impl RegionDataKey {
    pub const ALL: [RegionDataKey; 22] = [
        RegionDataKey::Countries,
        RegionDataKey::Fmt,
        RegionDataKey::Id,
        RegionDataKey::Isoid,
        RegionDataKey::Key,
        RegionDataKey::Lang,
        RegionDataKey::Languages,
        RegionDataKey::Lfmt,
        RegionDataKey::LocalityNameType,
        RegionDataKey::Require,
        RegionDataKey::StateNameType,
        RegionDataKey::SublocalityNameType,
        RegionDataKey::SubKeys,
        RegionDataKey::SubLnames,
        RegionDataKey::SubMores,
        RegionDataKey::SubNames,
        RegionDataKey::WidthOverrides,
        RegionDataKey::Xzip,
        RegionDataKey::Zip,
        RegionDataKey::ZipNameType,
        RegionDataKey::Postprefix,
        RegionDataKey::Posturl,
    ];

    /// The key's spelling inside a metadata record.
    pub const fn name(self) -> &'static str {
        match self {
            RegionDataKey::Countries => "countries",
            RegionDataKey::Fmt => "fmt",
            RegionDataKey::Id => "id",
            RegionDataKey::Isoid => "isoid",
            RegionDataKey::Key => "key",
            RegionDataKey::Lang => "lang",
            RegionDataKey::Languages => "languages",
            RegionDataKey::Lfmt => "lfmt",
            RegionDataKey::LocalityNameType => "locality_name_type",
            RegionDataKey::Require => "require",
            RegionDataKey::StateNameType => "state_name_type",
            RegionDataKey::SublocalityNameType => "sublocality_name_type",
            RegionDataKey::SubKeys => "sub_keys",
            RegionDataKey::SubLnames => "sub_lnames",
            RegionDataKey::SubMores => "sub_mores",
            RegionDataKey::SubNames => "sub_names",
            RegionDataKey::WidthOverrides => "width_overrides",
            RegionDataKey::Xzip => "xzip",
            RegionDataKey::Zip => "zip",
            RegionDataKey::ZipNameType => "zip_name_type",
            RegionDataKey::Postprefix => "postprefix",
            RegionDataKey::Posturl => "posturl",
        }
    }

    /// Case-insensitive lookup by record spelling.
    pub fn from_name(name: &str) -> Option<RegionDataKey> {
        RegionDataKey::ALL
            .into_iter()
            .find(|key| key.name().eq_ignore_ascii_case(name))
    }
}

impl Display for RegionDataKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

/// Per-region metadata records, keyed by uppercase region code.
///
/// # Example
///
/// ```
/// use addrfmt::interpreter::{RegionDataKey, RegionDataMap};
///
/// let data = RegionDataMap::from_entries([
///     ("ZZ", r#"{"fmt":"%N%n%O%n%A%n%C"}"#),
///     ("XA", r#"{"fmt":"%A%n%Z %C","require":"ACZ"}"#),
/// ])
/// .unwrap();
///
/// assert_eq!(data.get("XA", RegionDataKey::Require), Some("ACZ"));
/// assert_eq!(data.get("XA", RegionDataKey::Lfmt), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionDataMap {
    regions: HashMap<String, Map<String, Value>>,
}

impl RegionDataMap {
    /// The bundled region table.
    pub fn builtin() -> &'static RegionDataMap {
        &BUILTIN
    }

    /// Build a table from `(region code, JSON object text)` pairs.
    ///
    /// A later entry for the same region replaces an earlier one.
    pub fn from_entries<I, K, V>(entries: I) -> Result<RegionDataMap, MetadataError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut regions = HashMap::new();
        for (region, json) in entries {
            let region = region.into();
            let value = serde_json::from_str(json.as_ref()).map_err(|source| {
                MetadataError::InvalidJson {
                    region: region.clone(),
                    source,
                }
            })?;
            let record = into_record(&region, value)?;
            regions.insert(region, record);
        }
        Ok(RegionDataMap { regions })
    }

    /// Parse a JSON document mapping region codes to metadata records.
    ///
    /// Records may be JSON objects or strings holding JSON object text, the
    /// latter matching the layout of the bundled table.
    pub fn from_json_str(content: &str) -> Result<RegionDataMap, MetadataError> {
        let document: Map<String, Value> =
            serde_json::from_str(content).map_err(|source| MetadataError::InvalidJson {
                region: String::new(),
                source,
            })?;
        let mut regions = HashMap::with_capacity(document.len());
        for (region, value) in document {
            let value = match value {
                Value::String(text) => serde_json::from_str(&text).map_err(|source| {
                    MetadataError::InvalidJson {
                        region: region.clone(),
                        source,
                    }
                })?,
                other => other,
            };
            let record = into_record(&region, value)?;
            regions.insert(region, record);
        }
        Ok(RegionDataMap { regions })
    }

    /// Load a table from a JSON file. See [`RegionDataMap::from_json_str`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<RegionDataMap, MetadataError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| MetadataError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let map = RegionDataMap::from_json_str(&content)?;
        tracing::debug!(path = %path.display(), regions = map.len(), "loaded region data");
        Ok(map)
    }

    /// String value of `key` for `region`.
    ///
    /// Absent regions, absent keys and non-string values all read as `None`.
    /// `CQ` reads the `GG` record unless the table has one of its own.
    pub fn get(&self, region: &str, key: RegionDataKey) -> Option<&str> {
        self.record(region)?.get(key.name())?.as_str()
    }

    /// Whether `region` has a record, directly or through an alias.
    pub fn contains_region(&self, region: &str) -> bool {
        self.record(region).is_some()
    }

    /// Region codes with their own record, sorted.
    pub fn region_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.regions.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    fn record(&self, region: &str) -> Option<&Map<String, Value>> {
        self.regions.get(region).or_else(|| {
            let (_, target) = ALIASED_REGIONS.iter().find(|(alias, _)| *alias == region)?;
            self.regions.get(*target)
        })
    }
}

fn into_record(region: &str, value: Value) -> Result<Map<String, Value>, MetadataError> {
    match value {
        Value::Object(record) => Ok(record),
        _ => Err(MetadataError::NotAnObject {
            region: region.to_string(),
        }),
    }
}
