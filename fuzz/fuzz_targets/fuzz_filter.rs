//! Fuzz target for mask filtering.
//!
//! Checks that `filter` only emits mask characters and is idempotent.

#![no_main]

use bk_strings::{classify, filter, CharClass};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u32, &str)| {
    let (bits, s) = input;
    let mask = CharClass::from_bits_truncate(bits);
    let out = filter(s, mask);
    assert!(out.chars().all(|c| classify(c, mask)));
    assert_eq!(filter(&out, mask), out);
});
