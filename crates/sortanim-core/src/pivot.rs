//! Median-of-three pivot selection.

use crate::sequence::NumberSequence;

/// Pick the pivot index for `[low, high]` as the median of the values at
/// `low`, `mid` and `high`, where `mid = low + (high - low) / 2`.
///
/// Ties resolve in the order mid, low, high: `mid` wins if its value is
/// bracketed (inclusively) by the other two, then `low`, otherwise `high`.
/// The choice depends only on the three values, so the emitted step
/// sequence is reproducible.
///
/// # Panics
///
/// Panics if `low > high` or `high` is out of range.
#[must_use]
pub fn select_pivot_index(sequence: &NumberSequence, low: usize, high: usize) -> usize {
    assert!(low <= high, "invalid range [{low}, {high}]");
    let mid = low + (high - low) / 2;

    let a = sequence.get(low);
    let b = sequence.get(mid);
    let c = sequence.get(high);

    if (a <= b && b <= c) || (c <= b && b <= a) {
        mid
    } else if (b <= a && a <= c) || (c <= a && a <= b) {
        low
    } else {
        high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pick(values: &[i32], low: usize, high: usize) -> usize {
        select_pivot_index(&NumberSequence::new(values.to_vec()), low, high)
    }

    #[test]
    fn median_at_high() {
        assert_eq!(pick(&[10, 50, 30], 0, 2), 2);
    }

    #[test]
    fn median_at_mid() {
        assert_eq!(pick(&[10, 20, 30], 0, 2), 1);
        assert_eq!(pick(&[30, 20, 10], 0, 2), 1);
    }

    #[test]
    fn median_at_low() {
        assert_eq!(pick(&[20, 10, 30], 0, 2), 0);
        assert_eq!(pick(&[20, 30, 10], 0, 2), 0);
    }

    #[test]
    fn all_equal_prefers_mid() {
        assert_eq!(pick(&[5, 5, 5], 0, 2), 1);
    }

    #[test]
    fn low_equals_mid_prefers_mid() {
        // a == b, so b is bracketed by (a, c)
        assert_eq!(pick(&[5, 5, 9], 0, 2), 1);
        assert_eq!(pick(&[5, 5, 1], 0, 2), 1);
    }

    #[test]
    fn low_equals_high_prefers_low_when_mid_outside() {
        // b is not bracketed, a is bracketed by (b, c) since a == c
        assert_eq!(pick(&[5, 9, 5], 0, 2), 0);
        assert_eq!(pick(&[5, 1, 5], 0, 2), 0);
    }

    #[test]
    fn two_element_range_uses_low_as_mid() {
        // mid == low for a two-element range
        assert_eq!(pick(&[8, 3], 0, 1), 0);
        assert_eq!(pick(&[3, 8], 0, 1), 0);
    }

    #[test]
    fn single_element_range() {
        assert_eq!(pick(&[4, 7, 1], 1, 1), 1);
    }

    #[test]
    fn sub_range_offsets() {
        // range [2, 6], mid = 4: values 1, 100, 50 -> median 50 at high
        assert_eq!(pick(&[0, 0, 1, 0, 100, 0, 50], 2, 6), 6);
    }

    #[test]
    fn result_is_always_median_value() {
        let cases: [[i32; 3]; 6] = [
            [1, 2, 3],
            [1, 3, 2],
            [2, 1, 3],
            [2, 3, 1],
            [3, 1, 2],
            [3, 2, 1],
        ];
        for values in cases {
            let idx = pick(&values, 0, 2);
            assert_eq!(values[idx], 2, "case {values:?}");
        }
    }

    #[test]
    #[should_panic(expected = "invalid range")]
    fn inverted_range_panics() {
        let _ = pick(&[1, 2, 3], 2, 1);
    }
}
