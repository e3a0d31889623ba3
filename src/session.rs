//! The interactive game loop.
//!
//! Input and output are injected so the loop can be driven from tests with
//! in-memory buffers. Invalid input is reported and retried without using up
//! an attempt; only valid guesses count toward the limit.

use std::io::{self, BufRead, Write};

use log::{debug, trace};

use crate::config::GameConfig;
use crate::digits::{Guess, Secret};
use crate::score::Score;

const BANNER_TEXT: &str = include_str!("text/banner.txt");

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Three strikes after `attempts` valid guesses
    Won { attempts: usize },
    /// Every attempt used without finding the secret
    Lost { secret: Secret },
    /// Input ran out before the game finished
    Abandoned { attempts: usize },
}

pub struct Session<R, W> {
    input: R,
    output: W,
    max_attempts: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: &GameConfig, input: R, output: W) -> Self {
        Self {
            input,
            output,
            max_attempts: config.max_attempts,
        }
    }

    pub fn print_banner(&mut self) -> io::Result<()> {
        let rule = "=".repeat(40);
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "⚾ Welcome to Number Baseball! ⚾")?;
        writeln!(self.output, "{}", rule)?;
        write!(self.output, "{}", BANNER_TEXT)?;
        writeln!(
            self.output,
            "- Find the answer within {} attempts!",
            self.max_attempts
        )?;
        writeln!(self.output, "{}", rule)
    }

    /// Play one game against `secret`.
    pub fn play(&mut self, secret: &Secret) -> io::Result<Outcome> {
        trace!("secret is {}", secret);
        let mut attempts = 0;

        while attempts < self.max_attempts {
            writeln!(self.output)?;
            writeln!(self.output, "Attempt {}/{}", attempts + 1, self.max_attempts)?;

            let guess = loop {
                let Some(line) = self.prompt()? else {
                    debug!("input closed after {} attempts", attempts);
                    return Ok(Outcome::Abandoned { attempts });
                };
                match Guess::parse(line.trim()) {
                    Ok(guess) => break guess,
                    Err(err) => {
                        debug!("rejected {:?}: {:?}", line.trim(), err);
                        writeln!(self.output, "❌ {}", err)?;
                    }
                }
            };

            attempts += 1;
            let score = Score::calculate(secret, &guess);
            debug!("attempt {}: {} -> {:?}", attempts, guess, score);
            writeln!(self.output, "Result: {}", score)?;

            if score.is_win() {
                writeln!(self.output)?;
                writeln!(
                    self.output,
                    "🎉 Congratulations! You got it in {} attempts! 🎉",
                    attempts
                )?;
                return Ok(Outcome::Won { attempts });
            }
        }

        writeln!(self.output)?;
        writeln!(
            self.output,
            "😢 Too bad! You used all {} attempts.",
            self.max_attempts
        )?;
        writeln!(self.output, "The answer was {}.", secret)?;
        Ok(Outcome::Lost { secret: *secret })
    }

    /// Print the prompt and read one line; `None` at end of input.
    fn prompt(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "Enter a 3-digit number: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
