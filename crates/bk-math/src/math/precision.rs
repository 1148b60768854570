//! Fixed-point formatting.

use bk_common::Sample;

/// Fractional digits used when the caller does not pick a precision.
pub const DEFAULT_PRECISION: usize = 2;

/// Format a sample with exactly `precision` fractional digits.
///
/// Non-numeric samples come back unchanged (their `Display` form). Numeric
/// samples are rounded half away from zero.
pub fn set_precision(value: &Sample, precision: usize) -> String {
    match value.as_number() {
        Some(v) => format_fixed(v, precision),
        None => value.to_string(),
    }
}

/// [`set_precision`] with [`DEFAULT_PRECISION`].
pub fn set_default_precision(value: &Sample) -> String {
    set_precision(value, DEFAULT_PRECISION)
}

/// Significant digits kept before the half-away step.
///
/// Matches what the shortest decimal form of an f64 can promise, so a sample
/// written as `2.675` rounds like the literal and not like its binary
/// approximation `2.67499999...`.
const SIGNIFICANT_DIGITS: usize = 15;

/// Format `value` with exactly `precision` fractional digits, rounding half
/// away from zero.
///
/// The value is first reduced to [`SIGNIFICANT_DIGITS`] significant decimal
/// digits; rounding then happens on those digits. Magnitudes beyond 15
/// digits print with trailing zeros in place of binary noise.
///
/// Non-finite values print as `inf`, `-inf` or `NaN`. A result that rounds
/// to zero never carries a minus sign.
pub fn format_fixed(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let Some(mut decimal) = Decimal::from_f64(value.abs()) else {
        return format!("{:.*}", precision, value);
    };
    decimal.round_half_away(precision);
    decimal.render(value.is_sign_negative(), precision)
}

/// Unsigned decimal `0.d1d2d3... * 10^point`.
#[derive(Debug)]
struct Decimal {
    digits: Vec<u8>,
    point: i64,
}

impl Decimal {
    fn from_f64(magnitude: f64) -> Option<Self> {
        let sci = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, magnitude);
        let (mantissa, exp) = sci.split_once('e')?;
        let exp: i64 = exp.parse().ok()?;
        let digits = mantissa
            .bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| b - b'0')
            .collect();
        Some(Decimal {
            digits,
            point: exp + 1,
        })
    }

    fn round_half_away(&mut self, precision: usize) {
        let precision = i64::try_from(precision).unwrap_or(i64::MAX);
        let keep = self.point.saturating_add(precision);
        if keep < 0 {
            self.digits.clear();
            return;
        }
        let Ok(keep) = usize::try_from(keep) else {
            return;
        };
        if keep >= self.digits.len() {
            return;
        }

        let round_up = self.digits[keep] >= 5;
        self.digits.truncate(keep);
        if !round_up {
            return;
        }
        for d in self.digits.iter_mut().rev() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                return;
            }
        }
        // carried out of the leading digit
        self.digits.insert(0, 1);
        self.point += 1;
    }

    fn digit_at(&self, index: i64) -> u8 {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.digits.get(i).copied())
            .unwrap_or(0)
    }

    fn render(&self, negative: bool, precision: usize) -> String {
        let mut out = String::new();
        if negative && self.digits.iter().any(|&d| d != 0) {
            out.push('-');
        }

        if self.point <= 0 {
            out.push('0');
        } else {
            out.extend((0..self.point).map(|i| char::from(b'0' + self.digit_at(i))));
        }

        if precision > 0 {
            out.push('.');
            let mut index = self.point;
            for _ in 0..precision {
                out.push(char::from(b'0' + self.digit_at(index)));
                index = index.saturating_add(1);
            }
        }
        out
    }
}
