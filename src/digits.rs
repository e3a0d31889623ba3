//! Secret and guess combinations.
//!
//! Both are three pairwise-distinct digits drawn from 1-9. The newtypes can
//! only be built through checked constructors, so any `Secret` or `Guess` in
//! hand already satisfies that invariant.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::validate::{check_digits, InputError};
use crate::{DIGIT_COUNT, MAX_DIGIT, MIN_DIGIT};

/// The hidden answer for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Secret([u8; DIGIT_COUNT]);

impl Secret {
    /// Pick three distinct digits uniformly at random, in random order.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut pool: Vec<u8> = (MIN_DIGIT..=MAX_DIGIT).collect();
        let (chosen, _) = pool.partial_shuffle(rng, DIGIT_COUNT);
        let mut digits = [0u8; DIGIT_COUNT];
        digits.copy_from_slice(chosen);
        Self(digits)
    }

    pub fn from_digits(digits: [u8; DIGIT_COUNT]) -> Result<Self, InputError> {
        check_digits(&digits)?;
        Ok(Self(digits))
    }

    pub fn digits(&self) -> &[u8; DIGIT_COUNT] {
        &self.0
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_digits(f, &self.0)
    }
}

/// A validated player guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guess([u8; DIGIT_COUNT]);

impl Guess {
    pub fn from_digits(digits: [u8; DIGIT_COUNT]) -> Result<Self, InputError> {
        check_digits(&digits)?;
        Ok(Self(digits))
    }

    pub(crate) fn from_checked(digits: [u8; DIGIT_COUNT]) -> Self {
        debug_assert!(check_digits(&digits).is_ok());
        Self(digits)
    }

    pub fn digits(&self) -> &[u8; DIGIT_COUNT] {
        &self.0
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_digits(f, &self.0)
    }
}

fn write_digits(f: &mut fmt::Formatter<'_>, digits: &[u8; DIGIT_COUNT]) -> fmt::Result {
    for d in digits {
        write!(f, "{}", d)?;
    }
    Ok(())
}

/// Every valid combination in ascending numeric order (9 * 8 * 7 = 504).
pub fn all_combinations() -> Vec<[u8; DIGIT_COUNT]> {
    let mut combos = Vec::with_capacity(504);
    for a in MIN_DIGIT..=MAX_DIGIT {
        for b in MIN_DIGIT..=MAX_DIGIT {
            for c in MIN_DIGIT..=MAX_DIGIT {
                if a != b && b != c && a != c {
                    combos.push([a, b, c]);
                }
            }
        }
    }
    combos
}
