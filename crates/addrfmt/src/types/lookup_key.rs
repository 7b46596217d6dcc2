use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use super::address::trim_to_none;
use super::{AddressData, AddressField};
use crate::interpreter::is_explicit_latin_script;

const SLASH_DELIM: &str = "/";
const DASH_DELIM: &str = "--";
const DEFAULT_LANGUAGE: &str = "_default";

/// What a lookup key addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyType {
    /// Formatting and validation data for a node of the region hierarchy.
    Data,
    /// Example addresses for a region.
    Examples,
}

impl KeyType {
    /// The lowercase prefix that starts a key string of this type.
    pub const fn prefix(self) -> &'static str {
        match self {
            KeyType::Data => "data",
            KeyType::Examples => "examples",
        }
    }

    fn from_prefix(prefix: &str) -> Result<KeyType, KeyError> {
        match prefix {
            "data" => Ok(KeyType::Data),
            "examples" => Ok(KeyType::Examples),
            other => Err(KeyError::WrongKeyType {
                prefix: other.to_string(),
            }),
        }
    }
}

/// Which script an address is written in, relative to its region.
///
/// Script type depends on the region, not the language: a US address is
/// always [`ScriptType::Local`] even though US addresses use Latin script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptType {
    /// Transliterated into Latin script for a region that normally uses another script.
    Latin,
    /// The region's own script.
    #[default]
    Local,
}

impl ScriptType {
    pub const fn as_str(self) -> &'static str {
        match self {
            ScriptType::Latin => "latin",
            ScriptType::Local => "local",
        }
    }
}

impl Display for ScriptType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Errors raised while decoding or deriving lookup keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("wrong key type: '{prefix}'")]
    WrongKeyType { prefix: String },

    #[error("script type has to be either latin or local, got '{value}'")]
    InvalidScript { value: String },

    #[error("wrong format: '{segment}' should be <last node value>--<language code>")]
    MalformedLanguage { segment: String },

    #[error("language code must follow the last node, found it before '{segment}'")]
    MisplacedLanguage { segment: String },

    #[error("only data keys have a parent hierarchy, got '{key}'")]
    NotDataKey { key: String },

    #[error("field '{field}' is not part of the lookup key hierarchy")]
    NotInHierarchy { field: AddressField },

    #[error("cannot set '{field}' before the levels above it")]
    HierarchyGap { field: AddressField },
}

/// An immutable key addressing region metadata or example addresses.
///
/// Data keys encode a prefix of the hierarchy country → administrative area
/// → locality → dependent locality, e.g. `"data/US/CA--en"`. Example keys
/// look like `"examples/TW/local/_default"`. The canonical string is
/// computed once at construction and is the basis of equality and hashing,
/// so two data keys that differ only in script compare equal.
///
/// # Example
///
/// ```
/// use addrfmt::LookupKey;
///
/// let key: LookupKey = "data/US/CA".parse().unwrap();
/// let parent = key.parent_key().unwrap().unwrap();
/// assert_eq!(parent.to_string(), "data/US");
/// ```
#[derive(Debug, Clone)]
pub struct LookupKey {
    key_type: KeyType,
    script: ScriptType,
    /// Values for the leading levels of [`AddressField::HIERARCHY`].
    nodes: Vec<String>,
    language: Option<String>,
    key_string: String,
}

impl LookupKey {
    /// Start building a key of the given type.
    pub fn builder(key_type: KeyType) -> LookupKeyBuilder {
        LookupKeyBuilder::new(key_type)
    }

    /// Whether `key` starts with the prefix of a known key type.
    pub fn has_valid_key_prefix(key: &str) -> bool {
        [KeyType::Data, KeyType::Examples]
            .iter()
            .any(|key_type| key.starts_with(key_type.prefix()))
    }

    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    pub fn script_type(&self) -> ScriptType {
        self.script
    }

    pub fn language_code(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// The canonical string form, e.g. `"data/US/CA"`.
    pub fn as_str(&self) -> &str {
        &self.key_string
    }

    /// Number of hierarchy levels present.
    pub fn depth(&self) -> usize {
        self.nodes.len()
    }

    /// The value stored for a hierarchy level, if that level is present.
    pub fn value_for_upper_level_field(&self, field: AddressField) -> Option<&str> {
        field
            .hierarchy_level()
            .and_then(|level| self.nodes.get(level))
            .map(String::as_str)
    }

    /// The key one level shallower, e.g. `"data/US"` for `"data/US/CA"`.
    ///
    /// Returns `Ok(None)` for the root key `"data"`. Script and language are
    /// preserved.
    pub fn parent_key(&self) -> Result<Option<LookupKey>, KeyError> {
        self.require_data_key()?;
        if self.nodes.is_empty() {
            return Ok(None);
        }
        let mut builder = LookupKeyBuilder::from_key(self);
        builder.nodes.pop();
        Ok(Some(builder.build()))
    }

    /// The key truncated at `field`, keeping that level and everything above.
    ///
    /// Returns `Ok(None)` when `field` is outside the hierarchy or is more
    /// granular than this key. Script and language are preserved.
    pub fn key_for_upper_level_field(
        &self,
        field: AddressField,
    ) -> Result<Option<LookupKey>, KeyError> {
        self.require_data_key()?;
        let Some(level) = field.hierarchy_level() else {
            return Ok(None);
        };
        if level >= self.nodes.len() {
            return Ok(None);
        }
        let mut builder = LookupKeyBuilder::from_key(self);
        builder.nodes.truncate(level + 1);
        Ok(Some(builder.build()))
    }

    fn require_data_key(&self) -> Result<(), KeyError> {
        if self.key_type == KeyType::Data {
            Ok(())
        } else {
            Err(KeyError::NotDataKey {
                key: self.key_string.clone(),
            })
        }
    }

    fn create_key_string(
        key_type: KeyType,
        script: ScriptType,
        nodes: &[String],
        language: Option<&str>,
    ) -> String {
        let mut key = String::from(key_type.prefix());
        match key_type {
            KeyType::Data => {
                for node in nodes {
                    key.push_str(SLASH_DELIM);
                    key.push_str(node);
                }
                if let Some(language) = language.filter(|_| !nodes.is_empty()) {
                    key.push_str(DASH_DELIM);
                    key.push_str(language);
                }
            }
            KeyType::Examples => {
                if let Some(country) = nodes.first() {
                    for part in [
                        country.as_str(),
                        script.as_str(),
                        language.unwrap_or(DEFAULT_LANGUAGE),
                    ] {
                        key.push_str(SLASH_DELIM);
                        key.push_str(part);
                    }
                }
            }
        }
        key
    }
}

impl PartialEq for LookupKey {
    fn eq(&self, other: &Self) -> bool {
        self.key_string == other.key_string
    }
}

impl Eq for LookupKey {}

impl Hash for LookupKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key_string.hash(state);
    }
}

impl Display for LookupKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.key_string)
    }
}

impl FromStr for LookupKey {
    type Err = KeyError;

    /// Decodes a key string.
    ///
    /// A data key with more segments than the hierarchy has levels folds the
    /// excess into the dependent locality, so `"data/A/B/C/D/E"` has the
    /// dependent locality `"D/E"`. An empty segment ends the hierarchy:
    /// `"data/US//Mt View"` decodes to `"data/US"`.
    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let mut parts: Vec<&str> = key.split(SLASH_DELIM).collect();
        while parts.last().is_some_and(|part| part.is_empty()) {
            parts.pop();
        }
        let prefix = parts.first().copied().unwrap_or_default();
        let key_type = KeyType::from_prefix(prefix)?;
        let mut builder = LookupKeyBuilder::new(key_type);
        match key_type {
            KeyType::Data => builder.decode_data_segments(&parts[1..])?,
            KeyType::Examples => builder.decode_example_segments(&parts[1..])?,
        }
        Ok(builder.build())
    }
}

impl Serialize for LookupKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.key_string)
    }
}

impl<'de> Deserialize<'de> for LookupKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        key.parse().map_err(DeError::custom)
    }
}

/// Mutable staging area for [`LookupKey`].
#[derive(Debug, Clone)]
pub struct LookupKeyBuilder {
    key_type: KeyType,
    script: ScriptType,
    nodes: Vec<String>,
    language: Option<String>,
}

impl LookupKeyBuilder {
    pub fn new(key_type: KeyType) -> Self {
        Self {
            key_type,
            script: ScriptType::Local,
            nodes: Vec::new(),
            language: None,
        }
    }

    /// A builder holding everything `key` holds.
    pub fn from_key(key: &LookupKey) -> Self {
        Self {
            key_type: key.key_type,
            script: key.script,
            nodes: key.nodes.clone(),
            language: key.language.clone(),
        }
    }

    pub fn set_script(&mut self, script: ScriptType) -> &mut Self {
        self.script = script;
        self
    }

    pub fn set_language_code(&mut self, language: impl Into<String>) -> &mut Self {
        self.language = Some(language.into());
        self
    }

    pub fn clear_language_code(&mut self) -> &mut Self {
        self.language = None;
        self
    }

    /// Set the value of one hierarchy level.
    ///
    /// Every shallower level must already be set.
    pub fn set_node(
        &mut self,
        field: AddressField,
        value: impl Into<String>,
    ) -> Result<&mut Self, KeyError> {
        let level = field
            .hierarchy_level()
            .ok_or(KeyError::NotInHierarchy { field })?;
        match level.cmp(&self.nodes.len()) {
            Ordering::Less => self.nodes[level] = value.into(),
            Ordering::Equal => self.nodes.push(value.into()),
            Ordering::Greater => return Err(KeyError::HierarchyGap { field }),
        }
        Ok(self)
    }

    /// Fill the hierarchy and language from an address.
    ///
    /// Levels are taken in order until the first one the address lacks, so
    /// an address with a locality but no administrative area yields
    /// `"data/<country>"`. An explicitly Latin language tag selects
    /// [`ScriptType::Latin`].
    pub fn set_address_data(&mut self, data: &AddressData) -> &mut Self {
        self.language = data.language_code().map(str::to_string);
        if data.language_code().is_some_and(is_explicit_latin_script) {
            self.script = ScriptType::Latin;
        }
        self.nodes = AddressField::HIERARCHY
            .iter()
            .map_while(|&field| data.field_value(field))
            .map(|value| value.into_owned())
            .collect();
        self
    }

    pub fn build(&self) -> LookupKey {
        let key_string = LookupKey::create_key_string(
            self.key_type,
            self.script,
            &self.nodes,
            self.language.as_deref(),
        );
        LookupKey {
            key_type: self.key_type,
            script: self.script,
            nodes: self.nodes.clone(),
            language: self.language.clone(),
            key_string,
        }
    }

    fn decode_data_segments(&mut self, segments: &[&str]) -> Result<(), KeyError> {
        let levels = AddressField::HIERARCHY.len();
        let mut segments: Vec<String> = segments.iter().map(ToString::to_string).collect();
        if segments.len() > levels {
            let folded = segments.split_off(levels - 1).join(SLASH_DELIM);
            tracing::debug!(%folded, "folding excess key segments into the dependent locality");
            segments.push(folded);
        }

        for segment in &segments {
            let Some(mut value) = trim_to_none(segment) else {
                break;
            };
            if self.language.is_some() {
                return Err(KeyError::MisplacedLanguage { segment: value });
            }
            if value.contains(DASH_DELIM) {
                let mut pieces: Vec<&str> = value.split(DASH_DELIM).collect();
                while pieces.last().is_some_and(|piece| piece.is_empty()) {
                    pieces.pop();
                }
                let [node, language] = pieces.as_slice() else {
                    return Err(KeyError::MalformedLanguage { segment: value });
                };
                let Some(node) = trim_to_none(node) else {
                    return Err(KeyError::MalformedLanguage { segment: value });
                };
                self.language = Some(language.to_string());
                value = node;
            }
            self.nodes.push(value);
        }
        Ok(())
    }

    fn decode_example_segments(&mut self, segments: &[&str]) -> Result<(), KeyError> {
        let Some(country) = segments.first().filter(|country| !country.is_empty()) else {
            return Ok(());
        };
        self.nodes.push(country.to_string());

        if let Some(script) = segments.get(1) {
            self.script = match *script {
                "local" => ScriptType::Local,
                "latin" => ScriptType::Latin,
                other => {
                    return Err(KeyError::InvalidScript {
                        value: other.to_string(),
                    });
                }
            };
        }
        if let Some(language) = segments.get(2).filter(|l| **l != DEFAULT_LANGUAGE) {
            self.language = Some(language.to_string());
        }
        Ok(())
    }
}
