//! Fuzz target for the host-identifier sanitizer.
//!
//! The output must always be `HOST:PORT` with a mask-only host part.

#![no_main]

use bk_strings::classify;
use bk_validation::{server_identifier, HOST_MASK};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u16, &str)| {
    let (port, host) = input;
    let out = server_identifier(host, port);
    let suffix = format!(":{}", port);
    assert!(out.ends_with(&suffix));
    let head = &out[..out.len() - suffix.len()];
    assert!(head.chars().all(|c| c != ':' && classify(c, HOST_MASK)));
});
