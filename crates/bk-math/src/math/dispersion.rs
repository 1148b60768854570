//! Spread statistics for repeated benchmark runs.

use crate::math::coerce::{coerce_all, CoercionPolicy};
use crate::math::mean::mean_of;
use bk_common::Sample;

/// Sample standard deviation (`n - 1` denominator).
///
/// Fewer than two samples yield `0`.
pub fn standard_deviation(values: &[Sample]) -> f64 {
    standard_deviation_with_policy(values, &CoercionPolicy::default())
}

/// [`standard_deviation`] under an explicit coercion policy.
pub fn standard_deviation_with_policy(values: &[Sample], policy: &CoercionPolicy) -> f64 {
    stddev_of(&coerce_all(values, policy))
}

fn stddev_of(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = mean_of(values);
    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

/// Standard deviation as a percentage of the mean.
///
/// A zero mean yields `0`.
pub fn percent_standard_deviation(values: &[Sample]) -> f64 {
    percent_standard_deviation_with_policy(values, &CoercionPolicy::default())
}

/// [`percent_standard_deviation`] under an explicit coercion policy.
pub fn percent_standard_deviation_with_policy(
    values: &[Sample],
    policy: &CoercionPolicy,
) -> f64 {
    let coerced = coerce_all(values, policy);
    let mean = mean_of(&coerced);
    if mean == 0.0 {
        return 0.0;
    }
    stddev_of(&coerced) / mean * 100.0
}

/// Standard error of the mean: `stddev / sqrt(n)`.
///
/// Empty input yields `0`.
pub fn standard_error(values: &[Sample]) -> f64 {
    standard_error_with_policy(values, &CoercionPolicy::default())
}

/// [`standard_error`] under an explicit coercion policy.
pub fn standard_error_with_policy(values: &[Sample], policy: &CoercionPolicy) -> f64 {
    let coerced = coerce_all(values, policy);
    if coerced.is_empty() {
        return 0.0;
    }
    stddev_of(&coerced) / (coerced.len() as f64).sqrt()
}
