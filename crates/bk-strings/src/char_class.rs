//! Character categories and mask classification.

use crate::{Result, StringsError};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Named character categories.
    ///
    /// A char belongs to zero or more categories; masks are unions built with
    /// `|`. Only ASCII characters belong to any category.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct CharClass: u32 {
        /// `A-Z`, `a-z`
        const LETTER = 1 << 0;
        /// `0-9`
        const NUMERIC = 1 << 1;
        /// `.`
        const DECIMAL = 1 << 2;
        /// ` ` (plain space only)
        const SPACE = 1 << 3;
        /// `-`
        const DASH = 1 << 4;
        /// `_`
        const UNDERSCORE = 1 << 5;
        /// `:`
        const COLON = 1 << 6;
        /// `,`
        const COMMA = 1 << 7;
        /// `/` and `\`
        const SLASH = 1 << 8;
        /// `@`
        const AT = 1 << 9;
        /// `+`
        const PLUS = 1 << 10;
        /// `;`
        const SEMICOLON = 1 << 11;
        /// `=`
        const EQUAL = 1 << 12;
    }
}

impl CharClass {
    /// The categories `c` belongs to.
    pub fn of(c: char) -> CharClass {
        match c {
            'A'..='Z' | 'a'..='z' => CharClass::LETTER,
            '0'..='9' => CharClass::NUMERIC,
            '.' => CharClass::DECIMAL,
            ' ' => CharClass::SPACE,
            '-' => CharClass::DASH,
            '_' => CharClass::UNDERSCORE,
            ':' => CharClass::COLON,
            ',' => CharClass::COMMA,
            '/' | '\\' => CharClass::SLASH,
            '@' => CharClass::AT,
            '+' => CharClass::PLUS,
            ';' => CharClass::SEMICOLON,
            '=' => CharClass::EQUAL,
            _ => CharClass::empty(),
        }
    }

    /// Parse a mask from category names separated by `|` or `,`.
    ///
    /// Names are case-insensitive (`"letter|Numeric"`). An empty string is the
    /// empty mask.
    pub fn parse_names(s: &str) -> Result<CharClass> {
        s.split(['|', ','])
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .try_fold(CharClass::empty(), |mask, name| {
                CharClass::from_name(&name.to_ascii_uppercase())
                    .map(|flag| mask | flag)
                    .ok_or_else(|| StringsError::UnknownCategory(name.to_string()))
            })
    }
}

/// Whether `c` belongs to at least one category in `mask`.
pub fn classify(c: char, mask: CharClass) -> bool {
    CharClass::of(c).intersects(mask)
}

/// String form of [`classify`].
///
/// Rejects anything that is not exactly one char instead of silently
/// looking at the first one.
pub fn classify_str(s: &str, mask: CharClass) -> Result<bool> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(classify(c, mask)),
        _ => Err(StringsError::NotSingleChar {
            len: s.chars().count(),
        }),
    }
}
