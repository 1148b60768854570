//! Fuzz target for coercion policy parsing.
//!
//! Tests that policy parsing handles arbitrary input without panicking.

#![no_main]

use bk_common::config::{parse_str, ConfigFormat};
use bk_math::CoercionPolicy;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let _ = parse_str::<CoercionPolicy>(data, ConfigFormat::Json);
    let _ = parse_str::<CoercionPolicy>(data, ConfigFormat::Toml);
});
