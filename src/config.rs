//! Game configuration.

use log::warn;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::digits::Secret;
use crate::MAX_ATTEMPTS;

/// Environment variable holding an optional seed for reproducible games
pub const SEED_ENV_VAR: &str = "NUMBER_BASEBALL_SEED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Valid guesses allowed before the game is lost
    pub max_attempts: usize,
    /// Seed for the secret; `None` draws from the thread RNG
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the configuration from the process environment.
    ///
    /// An unparsable seed is ignored so a typo never blocks a game.
    pub fn from_env() -> Self {
        Self::from_seed_var(std::env::var(SEED_ENV_VAR).ok().as_deref())
    }

    fn from_seed_var(value: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = value {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(err) => warn!("ignoring {}={:?}: {}", SEED_ENV_VAR, raw, err),
            }
        }
        config
    }

    /// Draw a secret according to this configuration.
    pub fn generate_secret(&self) -> Secret {
        match self.seed {
            Some(seed) => Secret::generate(&mut ChaCha8Rng::seed_from_u64(seed)),
            None => Secret::generate(&mut rand::thread_rng()),
        }
    }
}
