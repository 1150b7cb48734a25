//! Deterministic numeric helpers.
//!
//! Every scoring formula in peerlens funnels its divisions through these
//! helpers so that degenerate inputs (empty documents, zero sentences) produce
//! `0.0` instead of `NaN` or infinity.

#![forbid(unsafe_code)]

/// Round a floating point value to `decimals` decimal places.
#[must_use]
pub fn round_f64(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Return `numer / denom`, or `0.0` when the denominator is zero.
#[must_use]
pub fn ratio(numer: usize, denom: usize) -> f64 {
    if denom == 0 {
        0.0
    } else {
        numer as f64 / denom as f64
    }
}

/// Return a ratio rounded to `decimals` places and guard division by zero.
#[must_use]
pub fn safe_ratio(numer: usize, denom: usize, decimals: u32) -> f64 {
    round_f64(ratio(numer, denom), decimals)
}

/// Arithmetic mean; `0.0` for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    finite_or_zero(values.iter().sum::<f64>() / values.len() as f64)
}

/// Collapse `NaN` and infinities to `0.0`.
#[must_use]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Saturating "start at 100 and deduct" score used by every penalty-based metric.
#[must_use]
pub fn penalty_score(deduction: usize) -> u32 {
    100usize.saturating_sub(deduction) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_f64_rounds_expected_precision() {
        let value = 12.34567;
        assert_eq!(round_f64(value, 2), 12.35);
        assert_eq!(round_f64(value, 4), 12.3457);
    }

    #[test]
    fn ratio_guards_divide_by_zero() {
        assert_eq!(ratio(5, 0), 0.0);
        assert_eq!(ratio(1, 4), 0.25);
    }

    #[test]
    fn safe_ratio_rounds() {
        assert_eq!(safe_ratio(1, 3, 2), 0.33);
        assert_eq!(safe_ratio(7, 0, 2), 0.0);
    }

    #[test]
    fn mean_handles_empty_and_values() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[80.0, 60.0, 40.0]), 60.0);
    }

    #[test]
    fn finite_or_zero_collapses_nan() {
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
        assert_eq!(finite_or_zero(f64::INFINITY), 0.0);
        assert_eq!(finite_or_zero(-3.5), -3.5);
    }

    #[test]
    fn penalty_score_saturates_at_zero() {
        assert_eq!(penalty_score(0), 100);
        assert_eq!(penalty_score(30), 70);
        assert_eq!(penalty_score(250), 0);
    }
}
