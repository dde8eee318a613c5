//! Count prompt parsing.

/// Rejected prompt input. The messages are shown verbatim under the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Enter a valid number.")]
    NotANumber,
    #[error("Enter a positive number.")]
    NotPositive,
}

/// Parse the number of values to generate.
pub fn parse_count(input: &str) -> Result<usize, InputError> {
    let count: i64 = input.trim().parse().map_err(|_| InputError::NotANumber)?;
    if count <= 0 {
        return Err(InputError::NotPositive);
    }
    usize::try_from(count).map_err(|_| InputError::NotANumber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_numbers() {
        assert_eq!(parse_count("5"), Ok(5));
        assert_eq!(parse_count("  42 "), Ok(42));
        assert_eq!(parse_count("1"), Ok(1));
    }

    #[test]
    fn rejects_non_numbers() {
        assert_eq!(parse_count("abc"), Err(InputError::NotANumber));
        assert_eq!(parse_count(""), Err(InputError::NotANumber));
        assert_eq!(parse_count("4.5"), Err(InputError::NotANumber));
        assert_eq!(parse_count("99999999999999999999"), Err(InputError::NotANumber));
    }

    #[test]
    fn rejects_zero_and_negatives() {
        assert_eq!(parse_count("0"), Err(InputError::NotPositive));
        assert_eq!(parse_count("-3"), Err(InputError::NotPositive));
    }

    #[test]
    fn messages() {
        assert_eq!(InputError::NotANumber.to_string(), "Enter a valid number.");
        assert_eq!(InputError::NotPositive.to_string(), "Enter a positive number.");
    }
}
