//! Benchkit shared types.
//!
//! - [`Sample`]: a loosely-typed measurement value as it arrives from result
//!   files, JSON payloads or user input.
//! - [`Error`]: the error type for everything that touches the filesystem or
//!   a parser (config loading, logging setup).
//! - [`config`]: extension-dispatched config file loading.
//! - [`logging`]: tracing subscriber setup shared by every benchkit binary.

pub mod config;
pub mod error;
pub mod logging;
pub mod sample;

pub use error::{Error, Result};
pub use sample::{samples, Sample};
