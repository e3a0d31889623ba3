//! Validation of raw player input.
//!
//! Checks run in a fixed order and stop at the first failure:
//! length, digits only, no zero, no repeats.

use std::str::FromStr;

use thiserror::Error;

use crate::digits::Guess;
use crate::{DIGIT_COUNT, MAX_DIGIT, MIN_DIGIT};

/// Why a piece of input is not a valid guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a 3-digit number.")]
    WrongLength { found: usize },

    #[error("Please enter digits only.")]
    NonDigit,

    /// A digit outside 1-9; from text input this is always a 0.
    #[error("Please use digits between 1 and 9.")]
    OutOfRange { digit: u8 },

    #[error("Please enter 3 different digits.")]
    DuplicateDigits,
}

impl Guess {
    /// Validate raw text and turn it into a guess.
    ///
    /// Length is measured in characters. Surrounding whitespace is not
    /// trimmed here.
    pub fn parse(input: &str) -> Result<Self, InputError> {
        let found = input.chars().count();
        if found != DIGIT_COUNT {
            return Err(InputError::WrongLength { found });
        }

        let mut digits = [0u8; DIGIT_COUNT];
        for (slot, c) in digits.iter_mut().zip(input.chars()) {
            if !c.is_ascii_digit() {
                return Err(InputError::NonDigit);
            }
            *slot = c as u8 - b'0';
        }

        check_digits(&digits)?;
        Ok(Guess::from_checked(digits))
    }
}

impl FromStr for Guess {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Guess::parse(s)
    }
}

/// Range then distinctness, shared by every checked constructor.
pub(crate) fn check_digits(digits: &[u8; DIGIT_COUNT]) -> Result<(), InputError> {
    if let Some(&digit) = digits.iter().find(|d| !(MIN_DIGIT..=MAX_DIGIT).contains(*d)) {
        return Err(InputError::OutOfRange { digit });
    }
    for i in 0..DIGIT_COUNT {
        if digits[i + 1..].contains(&digits[i]) {
            return Err(InputError::DuplicateDigits);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_order_short_circuits() {
        // too long and non-digit: length wins
        assert_eq!(Guess::parse("abcd"), Err(InputError::WrongLength { found: 4 }));
        // non-digit and zero: non-digit wins
        assert_eq!(Guess::parse("0a1"), Err(InputError::NonDigit));
        // zero and duplicate: zero wins
        assert_eq!(Guess::parse("100"), Err(InputError::OutOfRange { digit: 0 }));
    }

    #[test]
    fn length_counts_characters() {
        assert_eq!(Guess::parse("１２３"), Err(InputError::NonDigit));
        assert_eq!(Guess::parse("é1"), Err(InputError::WrongLength { found: 2 }));
    }
}
