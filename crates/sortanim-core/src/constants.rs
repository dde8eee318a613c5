//! Constants for sequence generation, animation pacing, and exit codes.

use std::time::Duration;

/// Smallest value a generated sequence may contain.
pub const MIN_VALUE: i32 = 1;

/// Largest value a generated sequence may contain.
pub const MAX_VALUE: i32 = 1000;

/// Upper bound (inclusive) of the "small" values that act as a regenerate trigger.
///
/// Every generated sequence contains exactly one value in `[MIN_VALUE, SMALL_VALUE_MAX]`.
pub const SMALL_VALUE_MAX: i32 = 30;

/// Default display delay for a highlight frame, in milliseconds.
pub const DEFAULT_STEP_DELAY_MS: u64 = 50;

/// Default display delay for a highlight frame.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(DEFAULT_STEP_DELAY_MS);

/// Longest display delay a `Pacing` is allowed to hold.
pub const MAX_STEP_DELAY: Duration = Duration::from_secs(10);

/// Maximum number of values shown per column by grid renderers.
pub const COLUMN_HEIGHT: usize = 10;

/// Exit codes used by the binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Run cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_bounds_are_ordered() {
        assert!(MIN_VALUE <= SMALL_VALUE_MAX);
        assert!(SMALL_VALUE_MAX < MAX_VALUE);
    }

    #[test]
    fn default_delay_matches_millis() {
        assert_eq!(DEFAULT_STEP_DELAY.as_millis(), u128::from(DEFAULT_STEP_DELAY_MS));
    }
}
