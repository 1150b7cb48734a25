use peerlens_math::{finite_or_zero, mean, penalty_score, ratio, round_f64, safe_ratio};
use proptest::prelude::*;

proptest! {
    #[test]
    fn ratio_zero_denominator_is_zero(numer in 0usize..10000) {
        prop_assert_eq!(ratio(numer, 0), 0.0);
    }

    #[test]
    fn ratio_identity_is_one(value in 1usize..10000) {
        prop_assert_eq!(ratio(value, value), 1.0);
    }

    #[test]
    fn ratio_of_subset_is_unit_range(denom in 1usize..10000, frac in 0.0f64..=1.0) {
        let numer = (denom as f64 * frac) as usize;
        let got = ratio(numer, denom);
        prop_assert!((0.0..=1.0).contains(&got));
    }

    #[test]
    fn round_is_idempotent(value in -1.0e6f64..1.0e6, decimals in 0u32..6) {
        let once = round_f64(value, decimals);
        prop_assert_eq!(once, round_f64(once, decimals));
    }

    #[test]
    fn safe_ratio_is_finite(numer in 0usize..10000, denom in 0usize..10000) {
        prop_assert!(safe_ratio(numer, denom, 2).is_finite());
    }

    #[test]
    fn mean_is_between_min_and_max(values in prop::collection::vec(-1000.0f64..1000.0, 1..50)) {
        let got = mean(&values);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(got >= min - 1e-9 && got <= max + 1e-9);
    }

    #[test]
    fn finite_or_zero_is_always_finite(bits in any::<u64>()) {
        prop_assert!(finite_or_zero(f64::from_bits(bits)).is_finite());
    }

    #[test]
    fn penalty_score_is_bounded(deduction in 0usize..100_000) {
        prop_assert!(penalty_score(deduction) <= 100);
    }
}
