//! Sample coercion policy.
//!
//! One rule, applied by every aggregate, decides what a non-numeric sample
//! is worth.

use bk_common::{config, Sample};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What to do with samples that have no numeric interpretation
/// (`Null`, unparseable text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonNumeric {
    /// Count the sample as `0`; it stays in the denominator.
    #[default]
    Zero,
    /// Drop the sample before counting.
    Skip,
}

/// Coercion settings shared by the aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CoercionPolicy {
    #[serde(default)]
    pub non_numeric: NonNumeric,
}

impl CoercionPolicy {
    /// Policy that drops non-numeric samples.
    pub fn skipping() -> Self {
        Self {
            non_numeric: NonNumeric::Skip,
        }
    }

    /// Load a policy from a `.toml` or `.json` file.
    pub fn load<P: AsRef<Path>>(path: P) -> bk_common::Result<Self> {
        config::load_file(path)
    }
}

/// Numeric value of `value` under `policy`.
///
/// Numbers pass through, numeric text parses, booleans are `1`/`0`.
/// Anything else is `0` under [`NonNumeric::Zero`] and `None` under
/// [`NonNumeric::Skip`].
pub fn coerce_to_number(value: &Sample, policy: &CoercionPolicy) -> Option<f64> {
    match value.as_number() {
        Some(v) => Some(v),
        None => match policy.non_numeric {
            NonNumeric::Zero => Some(0.0),
            NonNumeric::Skip => None,
        },
    }
}

/// Coerce a whole sample set, preserving input order.
pub(crate) fn coerce_all(values: &[Sample], policy: &CoercionPolicy) -> Vec<f64> {
    let coerced: Vec<f64> = values
        .iter()
        .filter_map(|v| coerce_to_number(v, policy))
        .collect();
    let non_numeric = values.iter().filter(|v| !v.is_numeric()).count();
    if non_numeric > 0 {
        tracing::debug!(
            total = values.len(),
            non_numeric,
            policy = ?policy.non_numeric,
            "coerced non-numeric samples"
        );
    }
    coerced
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_pass_through() {
        let policy = CoercionPolicy::default();
        assert_eq!(coerce_to_number(&Sample::Int(3), &policy), Some(3.0));
        assert_eq!(coerce_to_number(&Sample::Float(-2.5), &policy), Some(-2.5));
        assert_eq!(coerce_to_number(&Sample::from("4.5"), &policy), Some(4.5));
        assert_eq!(coerce_to_number(&Sample::Bool(true), &policy), Some(1.0));
        assert_eq!(coerce_to_number(&Sample::Bool(false), &policy), Some(0.0));
    }

    #[test]
    fn zero_policy() {
        let policy = CoercionPolicy::default();
        assert_eq!(coerce_to_number(&Sample::Null, &policy), Some(0.0));
        assert_eq!(coerce_to_number(&Sample::from("abc"), &policy), Some(0.0));
    }

    #[test]
    fn skip_policy() {
        let policy = CoercionPolicy::skipping();
        assert_eq!(coerce_to_number(&Sample::Null, &policy), None);
        assert_eq!(coerce_to_number(&Sample::from("abc"), &policy), None);
        // booleans are numeric, never skipped
        assert_eq!(coerce_to_number(&Sample::Bool(false), &policy), Some(0.0));
    }

    #[test]
    fn coerce_all_keeps_order() {
        let values = vec![Sample::Int(3), Sample::from("x"), Sample::Float(1.5)];
        assert_eq!(
            coerce_all(&values, &CoercionPolicy::default()),
            vec![3.0, 0.0, 1.5]
        );
        assert_eq!(
            coerce_all(&values, &CoercionPolicy::skipping()),
            vec![3.0, 1.5]
        );
    }

    #[test]
    fn policy_serde() {
        let parsed: CoercionPolicy = serde_json::from_str(r#"{"non_numeric": "skip"}"#).unwrap();
        assert_eq!(parsed, CoercionPolicy::skipping());
        let defaulted: CoercionPolicy = serde_json::from_str("{}").unwrap();
        assert_eq!(defaulted.non_numeric, NonNumeric::Zero);
    }
}
