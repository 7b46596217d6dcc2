//! Language tag helpers.

use icu_locale_core::subtags::{Language, Script, script};

/// Whether a language tag explicitly selects Latin script.
///
/// The tag must start with a 2–3 letter language subtag followed by `-` or
/// `_` and a script subtag equal to `Latn` (in any case). Anything after the
/// script is ignored. `"zh-Latn"` and `"ja_latn_JP"` qualify; `"zh-TW"`,
/// `"en"` and `"zh"` do not.
///
/// # Example
///
/// ```
/// use addrfmt::interpreter::is_explicit_latin_script;
///
/// assert!(is_explicit_latin_script("zh-Latn"));
/// assert!(!is_explicit_latin_script("zh-Hant"));
/// ```
pub fn is_explicit_latin_script(language_tag: &str) -> bool {
    let mut subtags = language_tag.split(['-', '_']);
    let (Some(language), Some(script)) = (subtags.next(), subtags.next()) else {
        return false;
    };
    if !(2..=3).contains(&language.len()) || Language::try_from_str(language).is_err() {
        return false;
    }
    Script::try_from_str(script).is_ok_and(|script| script == script!("Latn"))
}
