//! Arithmetic, geometric and harmonic means over loosely-typed samples.

use crate::math::coerce::{coerce_all, CoercionPolicy};
use bk_common::Sample;

/// Arithmetic mean with the default coercion policy.
///
/// Empty input yields `0`.
pub fn arithmetic_mean(values: &[Sample]) -> f64 {
    arithmetic_mean_with_policy(values, &CoercionPolicy::default())
}

/// Arithmetic mean under an explicit coercion policy.
///
/// `sum / count` in f64. There is no overflow guard: sums past `f64::MAX`
/// become infinite.
pub fn arithmetic_mean_with_policy(values: &[Sample], policy: &CoercionPolicy) -> f64 {
    mean_of(&coerce_all(values, policy))
}

pub(crate) fn mean_of(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Geometric mean with the default coercion policy.
pub fn geometric_mean(values: &[Sample]) -> f64 {
    geometric_mean_with_policy(values, &CoercionPolicy::default())
}

/// Geometric mean under an explicit coercion policy.
///
/// Scans in input order and stops at the first zero (returns `0`) or the
/// first negative (returns `NaN`), whichever comes first, so `[0, -1]` and
/// `[-1, 0]` differ. Otherwise computes `exp(mean(ln x))`, which stays finite
/// for thousands of samples at magnitudes where a running product would
/// overflow or underflow. Empty input yields `0`.
pub fn geometric_mean_with_policy(values: &[Sample], policy: &CoercionPolicy) -> f64 {
    let coerced = coerce_all(values, policy);
    if coerced.is_empty() {
        return 0.0;
    }

    let mut log_sum = 0.0;
    for &v in &coerced {
        if v == 0.0 {
            return 0.0;
        }
        if v < 0.0 {
            return f64::NAN;
        }
        log_sum += v.ln();
    }
    (log_sum / coerced.len() as f64).exp()
}

/// Harmonic mean with the default coercion policy.
pub fn harmonic_mean(values: &[Sample]) -> f64 {
    harmonic_mean_with_policy(values, &CoercionPolicy::default())
}

/// Harmonic mean under an explicit coercion policy.
///
/// Same short-circuit rule as [`geometric_mean_with_policy`]: first zero
/// gives `0`, first negative gives `NaN`. Empty input yields `0`.
pub fn harmonic_mean_with_policy(values: &[Sample], policy: &CoercionPolicy) -> f64 {
    let coerced = coerce_all(values, policy);
    if coerced.is_empty() {
        return 0.0;
    }

    let mut reciprocal_sum = 0.0;
    for &v in &coerced {
        if v == 0.0 {
            return 0.0;
        }
        if v < 0.0 {
            return f64::NAN;
        }
        reciprocal_sum += 1.0 / v;
    }
    coerced.len() as f64 / reciprocal_sum
}
