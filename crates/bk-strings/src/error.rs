//! Error types for string classification.

use thiserror::Error;

/// Result type for string operations that can reject their input.
pub type Result<T> = std::result::Result<T, StringsError>;

/// Errors from the string-form entry points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StringsError {
    /// Classification was asked for something other than exactly one char.
    #[error("expected exactly one character, got {len}")]
    NotSingleChar { len: usize },

    /// A mask name did not match any category.
    #[error("unknown character category: {0}")]
    UnknownCategory(String),
}
