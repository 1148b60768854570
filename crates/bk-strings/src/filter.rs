//! Mask-driven string filtering.
//!
//! Disallowed characters are dropped outright, never replaced or escaped.

use crate::char_class::{classify, CharClass};

/// Keep only the chars of `input` that belong to a category in `mask`.
pub fn filter(input: &str, mask: CharClass) -> String {
    input.chars().filter(|&c| classify(c, mask)).collect()
}

/// Drop the chars of `input` that belong to a category in `mask`.
pub fn remove(input: &str, mask: CharClass) -> String {
    input.chars().filter(|&c| !classify(c, mask)).collect()
}
