//! Percentage helpers shared by every derived share.

/// Rounds to two decimal places; exact ties go to the even hundredth.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Share of `part` in `total` as a percentage rounded to two decimals.
///
/// Returns `0.0` when `total` is zero instead of dividing by it.
pub fn percent_of(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(part as f64 / total as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_total_is_zero_percent() {
        assert_eq!(percent_of(0, 0), 0.0);
        assert_eq!(percent_of(5, 0), 0.0);
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(percent_of(1, 3), 33.33);
        assert_eq!(percent_of(2, 3), 66.67);
        assert_eq!(percent_of(120, 200), 60.0);
        assert_eq!(round2(12.3456), 12.35);
    }

    #[test]
    fn exact_ties_round_to_even() {
        assert_eq!(percent_of(1, 32), 3.12);
        assert_eq!(percent_of(5, 32), 15.62);
        assert_eq!(percent_of(9, 32), 28.12);
        assert_eq!(percent_of(3, 8), 37.5);
        assert_eq!(percent_of(31, 32), 96.88);
    }
}
