//! Scoring a guess against the secret.
//!
//! For each position: same digit in the same place is a strike, otherwise a
//! digit that appears anywhere in the secret is a ball. Because combinations
//! never repeat a digit, each guess digit counts at most once.

use std::fmt;

use crate::digits::{Guess, Secret};
use crate::DIGIT_COUNT;

/// Shown when all three digits are strikes
pub const WIN_MESSAGE: &str = "3S - Correct!";

/// Shown when no digit of the guess is in the secret
pub const OUT_MESSAGE: &str = "out";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    pub strikes: u8,
    pub balls: u8,
}

impl Score {
    pub const WIN: Self = Self {
        strikes: DIGIT_COUNT as u8,
        balls: 0,
    };

    pub fn new(strikes: u8, balls: u8) -> Self {
        debug_assert!(strikes as usize + balls as usize <= DIGIT_COUNT);
        Self { strikes, balls }
    }

    /// Score a validated guess against the secret.
    pub fn calculate(secret: &Secret, guess: &Guess) -> Self {
        Self::between(secret.digits(), guess.digits())
    }

    /// Score raw digit arrays; both must hold distinct digits.
    pub fn between(secret: &[u8; DIGIT_COUNT], guess: &[u8; DIGIT_COUNT]) -> Self {
        let mut score = Self::default();
        for (i, digit) in guess.iter().enumerate() {
            if secret[i] == *digit {
                score.strikes += 1;
            } else if secret.contains(digit) {
                score.balls += 1;
            }
        }
        score
    }

    pub fn is_win(self) -> bool {
        self.strikes as usize == DIGIT_COUNT
    }

    pub fn is_out(self) -> bool {
        self.strikes == 0 && self.balls == 0
    }

    /// Text shown to the player, e.g. `"1S 2B"`, `"3B"` or `"out"`.
    pub fn to_display_string(self) -> String {
        if self.is_win() {
            return WIN_MESSAGE.to_string();
        }
        if self.is_out() {
            return OUT_MESSAGE.to_string();
        }

        let mut parts = Vec::with_capacity(2);
        if self.strikes > 0 {
            parts.push(format!("{}S", self.strikes));
        }
        if self.balls > 0 {
            parts.push(format!("{}B", self.balls));
        }
        parts.join(" ")
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}
