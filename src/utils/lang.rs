//! Language tag helpers.
//!
//! Requested languages arrive as locale-like strings (`"ja-JP"`, `"zh-Hans"`,
//! `"pt_BR"`). Routing only ever needs the primary subtag, compared
//! case-insensitively.

/// Returns the primary subtag of a locale-like language tag.
///
/// The primary subtag is everything before the first `-` or `_`, lowercased.
/// `"ja-JP"` -> `"ja"`, `"zh-Hans"` -> `"zh"`, `"DE"` -> `"de"`.
#[must_use]
pub fn primary_subtag(tag: &str) -> String {
    tag.split(['-', '_'])
        .next()
        .unwrap_or(tag)
        .to_ascii_lowercase()
}

/// Whether two language tags share a primary subtag, case-insensitively.
#[must_use]
pub fn subtags_match(a: &str, b: &str) -> bool {
    let a = primary_subtag(a);
    !a.is_empty() && a == primary_subtag(b)
}

/// Finds the first capability entry whose primary subtag matches the
/// requested tag.
#[must_use]
pub fn find_matching_tag<'a>(requested: &str, capabilities: &'a [String]) -> Option<&'a str> {
    capabilities
        .iter()
        .find(|entry| subtags_match(requested, entry))
        .map(String::as_str)
}
