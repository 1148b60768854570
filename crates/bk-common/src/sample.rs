//! Loosely-typed sample values.
//!
//! Benchmark results reach the toolkit as whatever the producer wrote: plain
//! integers, floats, numeric strings, booleans, nulls or garbage. [`Sample`]
//! keeps that shape intact so every consumer applies one explicit coercion
//! rule instead of guessing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single, possibly non-numeric, input value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Sample {
    /// Missing value.
    Null,
    /// Boolean flag; counts as `1` or `0` numerically.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Free text; numeric only if it parses as a decimal literal.
    Text(String),
}

impl Sample {
    /// Strict numeric interpretation.
    ///
    /// Returns `None` for `Null` and for text that is not a plain decimal
    /// literal. Booleans map to `1`/`0`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Sample::Null => None,
            Sample::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Sample::Int(i) => Some(*i as f64),
            Sample::Float(f) => Some(*f),
            Sample::Text(s) => parse_numeric_text(s),
        }
    }

    /// Whether [`Sample::as_number`] yields a value.
    pub fn is_numeric(&self) -> bool {
        self.as_number().is_some()
    }
}

/// Parse text as a decimal literal: optional sign, digits, optional
/// fraction, optional exponent, surrounded by optional ASCII whitespace.
fn parse_numeric_text(s: &str) -> Option<f64> {
    let trimmed = s.trim_matches(|c: char| c.is_ascii_whitespace());
    if trimmed.is_empty() {
        return None;
    }
    // Rust's float parser also accepts "inf", "infinity" and "nan"; those are
    // words, not numbers, in result files.
    if trimmed
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Loose rendering: `Null` and `false` print as nothing, `true` as `1`.
///
/// Floats use Rust's shortest round-trip form without exponent notation, so
/// `1.0` prints as `1` and `1e20` as `100000000000000000000`.
impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sample::Null | Sample::Bool(false) => Ok(()),
            Sample::Bool(true) => write!(f, "1"),
            Sample::Int(i) => write!(f, "{}", i),
            Sample::Float(v) => write!(f, "{}", v),
            Sample::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Sample {
    fn from(v: i64) -> Self {
        Sample::Int(v)
    }
}

impl From<i32> for Sample {
    fn from(v: i32) -> Self {
        Sample::Int(i64::from(v))
    }
}

impl From<u32> for Sample {
    fn from(v: u32) -> Self {
        Sample::Int(i64::from(v))
    }
}

impl From<f64> for Sample {
    fn from(v: f64) -> Self {
        Sample::Float(v)
    }
}

impl From<f32> for Sample {
    fn from(v: f32) -> Self {
        Sample::Float(f64::from(v))
    }
}

impl From<bool> for Sample {
    fn from(v: bool) -> Self {
        Sample::Bool(v)
    }
}

impl From<&str> for Sample {
    fn from(v: &str) -> Self {
        Sample::Text(v.to_string())
    }
}

impl From<String> for Sample {
    fn from(v: String) -> Self {
        Sample::Text(v)
    }
}

impl<T: Into<Sample>> From<Option<T>> for Sample {
    fn from(v: Option<T>) -> Self {
        v.map_or(Sample::Null, Into::into)
    }
}

/// Collect anything convertible into a sample set.
pub fn samples<T: Into<Sample>>(values: impl IntoIterator<Item = T>) -> Vec<Sample> {
    values.into_iter().map(Into::into).collect()
}
