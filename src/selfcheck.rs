//! Built-in self-check run by `number-baseball test`.
//!
//! Scores a fixed table of guesses against the secret 123 and validates a
//! fixed table of inputs, printing expected against actual for each row.

use std::io::{self, Write};

use log::warn;

use crate::digits::{Guess, Secret};
use crate::score::Score;

/// Guess digits and the (strikes, balls) they should score against 123
const SCORE_CASES: [([u8; 3], (u8, u8)); 6] = [
    ([1, 2, 3], (3, 0)),
    ([1, 2, 4], (2, 0)),
    ([1, 3, 2], (1, 2)),
    ([2, 3, 1], (0, 3)),
    ([4, 5, 6], (0, 0)),
    ([1, 4, 5], (1, 0)),
];

/// Raw input and whether it should be accepted
const VALIDATION_CASES: [(&str, bool); 6] = [
    ("123", true),
    ("12", false),
    ("1234", false),
    ("abc", false),
    ("112", false),
    ("012", false),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelfCheckReport {
    pub passed: usize,
    pub failed: usize,
}

impl SelfCheckReport {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    fn record(&mut self, ok: bool) -> &'static str {
        if ok {
            self.passed += 1;
            "✓"
        } else {
            self.failed += 1;
            "✗"
        }
    }
}

pub fn run_self_check<W: Write>(out: &mut W) -> io::Result<SelfCheckReport> {
    let mut report = SelfCheckReport::default();

    writeln!(out, "Running game logic self-check...")?;
    let secret = Secret::from_digits([1, 2, 3])
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    writeln!(out, "Test secret: {}", secret)?;
    writeln!(out)?;

    writeln!(out, "Scoring:")?;
    for (digits, (strikes, balls)) in SCORE_CASES {
        let expected = Score::new(strikes, balls);
        let actual = Guess::from_digits(digits)
            .map(|guess| Score::calculate(&secret, &guess))
            .ok();
        let mark = report.record(actual == Some(expected));
        let shown = actual.map_or_else(|| "invalid guess".to_string(), |s| s.to_string());
        writeln!(
            out,
            "{} guess {:?} -> {} (expected: {})",
            mark, digits, shown, expected
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Input validation:")?;
    for (input, should_be_valid) in VALIDATION_CASES {
        let result = Guess::parse(input);
        let mark = report.record(result.is_ok() == should_be_valid);
        let shown = match &result {
            Ok(guess) => format!("valid {}", guess),
            Err(err) => format!("invalid ({})", err),
        };
        writeln!(
            out,
            "{} input {:?}: {} (expected: {})",
            mark,
            input,
            shown,
            if should_be_valid { "valid" } else { "invalid" }
        )?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Self-check finished: {} passed, {} failed.",
        report.passed, report.failed
    )?;
    if !report.all_passed() {
        warn!("self-check had {} failing cases", report.failed);
    }
    Ok(report)
}
