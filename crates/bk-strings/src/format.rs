//! Small text formatters.

use bk_common::Sample;

/// Trim `s` and collapse every inner whitespace run to a single space.
pub fn trim_spaces(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `"{count} {base}"`, pluralised with a trailing `s` unless `count` is
/// numerically one.
///
/// The count is rendered through [`Sample`]'s `Display`, so a textual
/// `"1.0"` prints as-is and still counts as singular.
pub fn plural_handler(count: &Sample, base: &str) -> String {
    let singular = count.as_number() == Some(1.0);
    format!("{} {}{}", count, base, if singular { "" } else { "s" })
}
