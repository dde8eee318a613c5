//! Random operand generation.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::constants::{MAX_VALUE, MIN_VALUE, SMALL_VALUE_MAX};
use crate::engine::SortError;
use crate::sequence::NumberSequence;

/// Generate `count` values: `count - 1` in `(SMALL_VALUE_MAX, MAX_VALUE]`
/// and one in `[MIN_VALUE, SMALL_VALUE_MAX]`, shuffled.
pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Result<NumberSequence, SortError> {
    if count == 0 {
        return Err(SortError::InvalidCount(0));
    }
    let mut values: Vec<i32> = (0..count - 1)
        .map(|_| rng.gen_range(SMALL_VALUE_MAX + 1..=MAX_VALUE))
        .collect();
    values.push(rng.gen_range(MIN_VALUE..=SMALL_VALUE_MAX));
    values.shuffle(rng);
    Ok(NumberSequence::new(values))
}

/// Reproducible generation from a seed.
pub fn generate_seeded(count: usize, seed: u64) -> Result<NumberSequence, SortError> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(count, &mut rng)
}

/// Generation from the thread-local RNG.
pub fn generate_random(count: usize) -> Result<NumberSequence, SortError> {
    generate(count, &mut rand::thread_rng())
}

/// Whether `value` may be picked to regenerate the sequence.
#[must_use]
pub fn is_regenerate_trigger(value: i32) -> bool {
    value <= SMALL_VALUE_MAX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_count_is_rejected() {
        assert_eq!(generate_seeded(0, 1), Err(SortError::InvalidCount(0)));
    }

    #[test]
    fn single_value_is_small() {
        let seq = generate_seeded(1, 42).unwrap();
        assert_eq!(seq.len(), 1);
        assert!(is_regenerate_trigger(seq.get(0)));
    }

    #[test]
    fn values_respect_bounds() {
        for seed in 0..20 {
            let seq = generate_seeded(50, seed).unwrap();
            assert_eq!(seq.len(), 50);
            assert!(seq
                .as_slice()
                .iter()
                .all(|v| (MIN_VALUE..=MAX_VALUE).contains(v)));
            let small = seq
                .as_slice()
                .iter()
                .filter(|&&v| is_regenerate_trigger(v))
                .count();
            assert_eq!(small, 1, "seed {seed}");
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        assert_eq!(generate_seeded(30, 7).unwrap(), generate_seeded(30, 7).unwrap());
    }

    #[test]
    fn random_generation_has_requested_length() {
        assert_eq!(generate_random(12).unwrap().len(), 12);
    }

    #[test]
    fn trigger_threshold() {
        assert!(is_regenerate_trigger(30));
        assert!(!is_regenerate_trigger(31));
    }
}
