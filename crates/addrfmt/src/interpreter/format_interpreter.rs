//! The format interpreter: region metadata in, field orders and envelopes out.

use std::collections::BTreeSet;

use addrfmt_data::DEFAULT_REGION;
use bon::bon;

use crate::interpreter::envelope::{prune_tokens, render_lines};
use crate::interpreter::error::FormatError;
use crate::interpreter::field_order::{
    apply_custom_order, expand_street_address, template_field_order,
};
use crate::interpreter::language::is_explicit_latin_script;
use crate::interpreter::metadata::{RegionDataKey, RegionDataMap};
use crate::parser::{
    Template, parse_required_fields, parse_template_strict, parse_width_overrides,
};
use crate::types::{AddressData, AddressField, FormOptions, ScriptType, WidthType};

/// Interprets per-region format metadata.
///
/// Every lookup for a region the table does not know falls back to the
/// default `ZZ` record, so a form can always be laid out.
///
/// # Example
///
/// ```
/// use addrfmt::{AddressData, FormatInterpreter};
///
/// let interpreter = FormatInterpreter::builder().build().unwrap();
/// let address = AddressData::builder()
///     .set_region_code("US")
///     .set_address("1098 Alta Ave")
///     .set_locality("Mountain View")
///     .set_admin_area("CA")
///     .set_postal_code("94043")
///     .build();
///
/// assert_eq!(
///     interpreter.envelope_address(&address).unwrap(),
///     vec!["1098 Alta Ave", "Mountain View, CA 94043"],
/// );
/// ```
#[derive(Debug, Clone)]
pub struct FormatInterpreter<'a> {
    region_data: &'a RegionDataMap,
    options: FormOptions,
}

#[bon]
impl<'a> FormatInterpreter<'a> {
    /// Fails with [`FormatError::MissingDefaultFormat`] if `region_data` has
    /// no `ZZ` format to fall back on.
    #[builder]
    pub fn new(
        #[builder(default = RegionDataMap::builtin())] region_data: &'a RegionDataMap,
        #[builder(default)] options: FormOptions,
    ) -> Result<Self, FormatError> {
        if region_data.get(DEFAULT_REGION, RegionDataKey::Fmt).is_none() {
            return Err(FormatError::MissingDefaultFormat);
        }
        Ok(Self {
            region_data,
            options,
        })
    }
}

impl<'a> FormatInterpreter<'a> {
    pub fn region_data(&self) -> &'a RegionDataMap {
        self.region_data
    }

    pub fn options(&self) -> &FormOptions {
        &self.options
    }

    /// The template text used to lay out `region` in `script`.
    ///
    /// Latin script prefers the region's `lfmt`, then its `fmt`. Regions
    /// without a format use the `ZZ` format.
    pub fn format_string(&self, script: ScriptType, region: &str) -> Result<&'a str, FormatError> {
        let latin = match script {
            ScriptType::Latin => self.region_data.get(region, RegionDataKey::Lfmt),
            ScriptType::Local => None,
        };
        if let Some(format) = latin {
            tracing::debug!(region, %script, "using latin format");
            return Ok(format);
        }
        if let Some(format) = self.region_data.get(region, RegionDataKey::Fmt) {
            tracing::debug!(region, %script, "using region format");
            return Ok(format);
        }
        if self.region_data.contains_region(region) {
            tracing::debug!(region, %script, "region has no format, using default");
        } else {
            tracing::warn!(region, "unknown region code, using default format");
        }
        self.region_data
            .get(DEFAULT_REGION, RegionDataKey::Fmt)
            .ok_or(FormatError::MissingDefaultFormat)
    }

    /// Fields of `region`'s form in display order.
    ///
    /// Duplicate template references are dropped, any custom order
    /// registered in the options is applied, and the street address is
    /// expanded into the two legacy line fields.
    pub fn address_field_order(
        &self,
        script: ScriptType,
        region: &str,
    ) -> Result<Vec<AddressField>, FormatError> {
        let format = self.format_string(script, region)?;
        self.address_field_order_for_template(format, region)
    }

    /// Like [`FormatInterpreter::address_field_order`] for an explicit template.
    pub fn address_field_order_for_template(
        &self,
        template: &str,
        region: &str,
    ) -> Result<Vec<AddressField>, FormatError> {
        let template = parse_region_template(template, region)?;
        let mut order = template_field_order(&template)?;
        let custom = self.options.custom_field_order(region);
        if !custom.is_empty() {
            apply_custom_order(region, &mut order, custom)?;
        }
        expand_street_address(&mut order);
        Ok(order)
    }

    /// Format `address` as the lines of a postal envelope.
    ///
    /// A language tag that explicitly selects Latin script picks the Latin
    /// template. Addresses without a region code use the `ZZ` format.
    pub fn envelope_address(&self, address: &AddressData) -> Result<Vec<String>, FormatError> {
        let script = if address
            .language_code()
            .is_some_and(is_explicit_latin_script)
        {
            ScriptType::Latin
        } else {
            ScriptType::Local
        };
        let region = address.region_code().unwrap_or(DEFAULT_REGION);
        let template = parse_region_template(self.format_string(script, region)?, region)?;
        let tokens = prune_tokens(&template.tokens, address)?;
        Ok(render_lines(&tokens, address)?)
    }

    /// Fields that must be filled in for `region`. Always includes the country.
    ///
    /// Regions without a `require` entry use the `ZZ` requirements.
    pub fn required_fields(&self, region: &str) -> Result<BTreeSet<AddressField>, FormatError> {
        let require = self
            .region_data
            .get(region, RegionDataKey::Require)
            .or_else(|| self.region_data.get(DEFAULT_REGION, RegionDataKey::Require))
            .unwrap_or_default();
        parse_required_fields(require).map_err(|source| FormatError::InvalidRequired {
            region: region.to_string(),
            source,
        })
    }

    /// The width override `region` declares for `field`, if any.
    ///
    /// A malformed `width_overrides` entry yields no override for any field.
    pub fn width_override(&self, field: AddressField, region: &str) -> Option<WidthType> {
        let overrides = self.region_data.get(region, RegionDataKey::WidthOverrides)?;
        let Some(decoded) = parse_width_overrides(overrides) else {
            tracing::warn!(region, overrides, "ignoring malformed width overrides");
            return None;
        };
        decoded
            .into_iter()
            .find(|(code, _)| *code == field.code())
            .map(|(_, width)| width)
    }

    /// Width for `field` in `region`: the override if declared, else the default.
    pub fn width_for_region(&self, field: AddressField, region: &str) -> WidthType {
        self.width_override(field, region)
            .unwrap_or_else(|| field.default_width())
    }

    /// Languages used in `region`, from its `~`-separated `languages` entry.
    pub fn region_languages(&self, region: &str) -> Vec<&'a str> {
        self.region_data
            .get(region, RegionDataKey::Languages)
            .map(|languages| languages.split('~').filter(|l| !l.is_empty()).collect())
            .unwrap_or_default()
    }

    /// The region's default language, if declared.
    pub fn default_language(&self, region: &str) -> Option<&'a str> {
        self.region_data.get(region, RegionDataKey::Lang)
    }
}

fn parse_region_template(template: &str, region: &str) -> Result<Template, FormatError> {
    parse_template_strict(template).map_err(|source| FormatError::InvalidTemplate {
        region: region.to_string(),
        source,
    })
}
