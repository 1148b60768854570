//! Test-profile identifier sanitization.

use bk_strings::{filter, CharClass};

/// Characters allowed in a test-profile identifier.
pub const PROFILE_MASK: CharClass = CharClass::LETTER
    .union(CharClass::NUMERIC)
    .union(CharClass::DASH);

/// Lowercase `name`, turn each space into `-`, and drop everything outside
/// [`PROFILE_MASK`].
///
/// Runs of spaces are not collapsed: `"Test  Profile"` becomes
/// `"test--profile"`.
pub fn sanitize_test_profile_base(name: &str) -> String {
    filter(&name.replace(' ', "-").to_ascii_lowercase(), PROFILE_MASK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures() {
        let cases = [
            ("Test Profile", "test-profile"),
            ("Test  Profile", "test--profile"),
            ("Foo123", "foo123"),
            ("Invalid!@#Chars", "invalidchars"),
            ("A-B", "a-b"),
            ("   ", "---"),
            ("", ""),
            ("a b c", "a-b-c"),
            ("CamelCase", "camelcase"),
            ("Mixed 123-Text", "mixed-123-text"),
            ("Hello_World", "helloworld"),
            ("Foo.Bar", "foobar"),
        ];
        for (input, expected) in cases {
            assert_eq!(
                sanitize_test_profile_base(input),
                expected,
                "sanitize_test_profile_base({:?})",
                input
            );
        }
    }

    #[test]
    fn non_ascii_dropped() {
        assert_eq!(sanitize_test_profile_base("Ünïcode Tëst"), "ncode-tst");
    }
}
