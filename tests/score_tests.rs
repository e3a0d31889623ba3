use number_baseball::score::{OUT_MESSAGE, WIN_MESSAGE};
use number_baseball::{Guess, Score, Secret};
use proptest::prelude::*;

fn secret(digits: [u8; 3]) -> Secret {
    Secret::from_digits(digits).unwrap()
}

fn guess(text: &str) -> Guess {
    Guess::parse(text).unwrap()
}

fn distinct_digits() -> impl Strategy<Value = [u8; 3]> {
    proptest::sample::subsequence((1u8..=9).collect::<Vec<_>>(), 3)
        .prop_shuffle()
        .prop_map(|v| [v[0], v[1], v[2]])
}

#[test]
fn test_documented_examples() {
    let s = secret([1, 2, 3]);
    let cases = [
        ("124", Score::new(2, 0), "2S"),
        ("132", Score::new(1, 2), "1S 2B"),
        ("231", Score::new(0, 3), "3B"),
        ("456", Score::new(0, 0), "out"),
        ("145", Score::new(1, 0), "1S"),
        ("123", Score::new(3, 0), "3S - Correct!"),
    ];
    for (text, expected, shown) in cases {
        let score = Score::calculate(&s, &guess(text));
        assert_eq!(score, expected, "guess {}", text);
        assert_eq!(score.to_string(), shown, "guess {}", text);
    }
}

#[test]
fn test_formatter_covers_every_score() {
    assert_eq!(Score::new(3, 0).to_display_string(), WIN_MESSAGE);
    assert_eq!(Score::new(0, 0).to_display_string(), OUT_MESSAGE);
    assert_eq!(Score::new(0, 1).to_display_string(), "1B");
    assert_eq!(Score::new(0, 2).to_display_string(), "2B");
    assert_eq!(Score::new(1, 1).to_display_string(), "1S 1B");
    assert_eq!(Score::new(2, 1).to_display_string(), "2S 1B");
    assert_eq!(Score::new(2, 0).to_display_string(), "2S");
}

#[test]
fn test_win_and_out_flags() {
    assert!(Score::WIN.is_win());
    assert!(!Score::WIN.is_out());
    assert!(Score::new(0, 0).is_out());
    assert!(!Score::new(0, 3).is_win());
}

#[test]
fn test_two_strikes_one_ball_never_happens() {
    // with distinct digits, two strikes leave exactly one slot for the last digit
    for s in number_baseball::all_combinations() {
        for g in number_baseball::all_combinations() {
            assert_ne!(Score::between(&s, &g), Score::new(2, 1));
        }
    }
}

proptest! {
    #[test]
    fn identical_guess_wins(digits in distinct_digits()) {
        let s = Secret::from_digits(digits).unwrap();
        let g = Guess::from_digits(digits).unwrap();
        let score = Score::calculate(&s, &g);
        prop_assert_eq!(score, Score::new(3, 0));
        prop_assert_eq!(score.to_string(), WIN_MESSAGE);
    }

    #[test]
    fn disjoint_guess_is_out(s in distinct_digits(), g in distinct_digits()) {
        prop_assume!(g.iter().all(|d| !s.contains(d)));
        let score = Score::between(&s, &g);
        prop_assert_eq!(score, Score::new(0, 0));
        prop_assert_eq!(score.to_string(), OUT_MESSAGE);
    }

    #[test]
    fn strikes_plus_balls_at_most_three(s in distinct_digits(), g in distinct_digits()) {
        let score = Score::between(&s, &g);
        let shared = g.iter().filter(|d| s.contains(d)).count();
        prop_assert!(score.strikes + score.balls <= 3);
        prop_assert_eq!((score.strikes + score.balls) as usize, shared);
    }

    #[test]
    fn scoring_is_symmetric(s in distinct_digits(), g in distinct_digits()) {
        prop_assert_eq!(Score::between(&s, &g), Score::between(&g, &s));
    }
}
