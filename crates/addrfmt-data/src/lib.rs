//! Static region metadata shared by the `addrfmt` runtime and its tools.
//!
//! Each entry pairs a two-letter region code with a JSON object describing
//! how addresses in that region are laid out: the envelope template (`fmt`),
//! the Latin-script template (`lfmt`), required field codes (`require`),
//! width overrides, default language and so on. This crate only stores the
//! raw strings; parsing happens in `addrfmt`.

mod regions;

pub use regions::REGION_DATA;

/// Region code of the entry every lookup falls back to.
pub const DEFAULT_REGION: &str = "ZZ";

/// Find the raw metadata string for `region`.
///
/// The code must match exactly; callers normalize case first.
pub fn lookup(region: &str) -> Option<&'static str> {
    REGION_DATA
        .binary_search_by(|(code, _)| (*code).cmp(region))
        .ok()
        .map(|index| REGION_DATA[index].1)
}

/// Iterate over every region code in the table, in sorted order.
pub fn region_codes() -> impl Iterator<Item = &'static str> {
    REGION_DATA.iter().map(|(code, _)| *code)
}
