//! # Number Baseball
//!
//! A console guessing game. The computer picks three distinct digits from 1-9
//! and the player has nine attempts to find them, guided by strikes (right
//! digit, right place) and balls (right digit, wrong place).
//!
//! The engine is a handful of pure pieces:
//!
//! - [`Secret::generate`] picks the answer.
//! - [`Guess::parse`] validates raw input.
//! - [`Score::calculate`] compares a guess to the secret.
//! - [`Score`]'s `Display` turns the result into the text shown to the player.
//!
//! [`Session`] strings them together into the interactive loop.

pub mod config;
pub mod digits;
pub mod greeting;
pub mod score;
pub mod selfcheck;
pub mod session;
pub mod solver;
pub mod validate;

pub use config::GameConfig;
pub use digits::{all_combinations, Guess, Secret};
pub use score::Score;
pub use selfcheck::{run_self_check, SelfCheckReport};
pub use session::{Outcome, Session};
pub use solver::Solver;
pub use validate::InputError;

/// Number of digits in a secret or guess
pub const DIGIT_COUNT: usize = 3;

/// Attempts the player gets before the secret is revealed
pub const MAX_ATTEMPTS: usize = 9;

/// Smallest digit allowed in a combination (0 is excluded by rule)
pub const MIN_DIGIT: u8 = 1;

/// Largest digit allowed in a combination
pub const MAX_DIGIT: u8 = 9;
