//! String shape predicates.

use once_cell::sync::Lazy;
use regex::Regex;

// scheme://authority[/path|?query|#fragment], no whitespace anywhere
static RE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[^/\s?#]+(?:[/?#]\S*)?$").unwrap()
});

// Two or more digit runs joined by single dots
static RE_VERSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]+)+$").unwrap());

/// Whether `s` is an absolute URL with a scheme and a non-empty host.
pub fn is_url(s: &str) -> bool {
    RE_URL.is_match(s)
}

/// Whether `s` is a dotted numeric version such as `1.0` or `1.2.3.4`.
pub fn is_version(s: &str) -> bool {
    RE_VERSION.is_match(s)
}

/// Non-empty and every char is an ASCII letter or digit.
pub fn is_alnum(s: &str) -> bool {
    all_ascii(s, |c| c.is_ascii_alphanumeric())
}

/// Non-empty and every char is an ASCII letter.
pub fn is_alpha(s: &str) -> bool {
    all_ascii(s, |c| c.is_ascii_alphabetic())
}

/// Non-empty and every char is an ASCII digit.
pub fn is_digit(s: &str) -> bool {
    all_ascii(s, |c| c.is_ascii_digit())
}

/// Non-empty and every char is an ASCII uppercase letter.
pub fn is_upper(s: &str) -> bool {
    all_ascii(s, |c| c.is_ascii_uppercase())
}

fn all_ascii(s: &str, pred: impl Fn(char) -> bool) -> bool {
    !s.is_empty() && s.chars().all(pred)
}
