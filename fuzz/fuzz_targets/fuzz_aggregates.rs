//! Fuzz target for the aggregates.
//!
//! Tests that arbitrary JSON sample arrays never panic any aggregate.

#![no_main]

use bk_common::Sample;
use bk_math::{
    arithmetic_mean, geometric_mean, harmonic_mean, percent_standard_deviation, set_precision,
    standard_error,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(values) = serde_json::from_slice::<Vec<Sample>>(data) else {
        return;
    };
    let _ = arithmetic_mean(&values);
    let _ = geometric_mean(&values);
    let _ = harmonic_mean(&values);
    let _ = percent_standard_deviation(&values);
    let _ = standard_error(&values);
    for v in &values {
        let _ = set_precision(v, 4);
    }
});
