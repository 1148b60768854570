//! Character-class masks and string utilities.
//!
//! The core of this crate is [`CharClass`], a small set of named character
//! categories combined into masks. A mask expresses an allowed-character
//! policy once, and [`filter`] applies it:
//!
//! ```
//! use bk_strings::{filter, CharClass};
//!
//! let mask = CharClass::LETTER | CharClass::NUMERIC | CharClass::DASH;
//! assert_eq!(filter("rm -rf /; echo `id`", mask), "rm-rfechoid");
//! ```
//!
//! Alongside the mask filter live the plain string predicates
//! ([`is_url`], [`is_version`], ...) and small text formatters
//! ([`trim_spaces`], [`plural_handler`]).

pub mod char_class;
pub mod error;
pub mod filter;
pub mod format;
pub mod predicates;

pub use char_class::{classify, classify_str, CharClass};
pub use error::{Result, StringsError};
pub use filter::{filter, remove};
pub use format::{plural_handler, trim_spaces};
pub use predicates::{is_alnum, is_alpha, is_digit, is_upper, is_url, is_version};
