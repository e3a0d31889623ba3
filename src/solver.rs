//! Automated player using an entropy-based strategy.
//!
//! Each guess is the combination whose score best splits the remaining
//! candidates, i.e. the one with the highest expected information gain.
//! Used by the `solve` and `bench` subcommands.

use rayon::prelude::*;

use crate::digits::{all_combinations, Guess, Secret};
use crate::score::Score;
use crate::DIGIT_COUNT;

/// Distinct (strikes, balls) outcomes, indexed as `strikes * 4 + balls`
const NUM_SCORES: usize = (DIGIT_COUNT + 1) * (DIGIT_COUNT + 1);

fn score_index(score: Score) -> usize {
    score.strikes as usize * (DIGIT_COUNT + 1) + score.balls as usize
}

/// Result of analyzing a potential guess
#[derive(Debug, Clone)]
pub struct GuessAnalysis {
    pub guess: Guess,
    pub entropy: f64,
    pub is_possible_answer: bool,
}

#[derive(Debug, Clone)]
pub struct Solver {
    all: Vec<[u8; DIGIT_COUNT]>,
    remaining: Vec<[u8; DIGIT_COUNT]>,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    pub fn new() -> Self {
        let all = all_combinations();
        Self {
            remaining: all.clone(),
            all,
        }
    }

    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    pub fn reset(&mut self) {
        self.remaining = self.all.clone();
    }

    /// Keep only candidates that would have produced `score` for `guess`.
    pub fn apply_feedback(&mut self, guess: &Guess, score: Score) {
        self.remaining
            .retain(|candidate| Score::between(candidate, guess.digits()) == score);
    }

    pub fn entropy_of(&self, guess: &[u8; DIGIT_COUNT]) -> f64 {
        let n = self.remaining.len() as f64;
        if n <= 1.0 {
            return 0.0;
        }

        let mut counts = [0u32; NUM_SCORES];
        for candidate in &self.remaining {
            counts[score_index(Score::between(candidate, guess))] += 1;
        }

        counts
            .iter()
            .filter(|&&count| count > 0)
            .map(|&count| {
                let p = count as f64 / n;
                -p * p.log2()
            })
            .sum()
    }

    /// Best next guess, or `None` once no candidate is left.
    pub fn suggest(&self) -> Option<GuessAnalysis> {
        if self.remaining.len() <= 2 {
            return self.remaining.first().map(|&digits| GuessAnalysis {
                guess: Guess::from_checked(digits),
                entropy: if self.remaining.len() == 2 { 1.0 } else { 0.0 },
                is_possible_answer: true,
            });
        }

        let mut analyses: Vec<GuessAnalysis> = self
            .all
            .par_iter()
            .map(|digits| GuessAnalysis {
                guess: Guess::from_checked(*digits),
                entropy: self.entropy_of(digits),
                is_possible_answer: self.remaining.contains(digits),
            })
            .collect();

        analyses.sort_by(|a, b| match b.entropy.partial_cmp(&a.entropy) {
            Some(std::cmp::Ordering::Equal) => b.is_possible_answer.cmp(&a.is_possible_answer),
            Some(ord) => ord,
            None => std::cmp::Ordering::Equal,
        });
        analyses.into_iter().next()
    }

    /// Play a full game against `secret`, returning every guess and its score.
    ///
    /// The secret is never eliminated and every non-winning guess strictly
    /// shrinks the candidate set, so this always ends in a win.
    pub fn solve_for(&mut self, secret: &Secret) -> Vec<(Guess, Score)> {
        let mut history = Vec::new();

        while let Some(best) = self.suggest() {
            let score = Score::calculate(secret, &best.guess);
            history.push((best.guess, score));
            if score.is_win() {
                break;
            }
            self.apply_feedback(&best.guess, score);
        }

        history
    }

    /// Number of guesses needed for every possible secret, as
    /// `(guesses, count)` pairs in ascending order of guesses.
    pub fn benchmark_distribution(&self) -> Vec<(usize, usize)> {
        let guess_counts: Vec<usize> = self
            .all
            .par_iter()
            .filter_map(|digits| Secret::from_digits(*digits).ok())
            .map(|secret| {
                let mut solver = self.clone();
                solver.reset();
                solver.solve_for(&secret).len()
            })
            .collect();

        let max_guesses = guess_counts.iter().copied().max().unwrap_or(0);
        let mut distribution = vec![0usize; max_guesses + 1];
        for count in guess_counts {
            distribution[count] += 1;
        }

        distribution
            .into_iter()
            .enumerate()
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}
