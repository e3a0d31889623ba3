use number_baseball::{all_combinations, Guess, Score, Secret, Solver};

#[test]
fn test_solver_creation() {
    let solver = Solver::new();
    assert_eq!(solver.remaining_count(), 504);
}

#[test]
fn test_apply_feedback() {
    let mut solver = Solver::new();
    let secret = Secret::from_digits([4, 7, 2]).unwrap();
    let guess = Guess::parse("123").unwrap();

    let score = Score::calculate(&secret, &guess);
    solver.apply_feedback(&guess, score);

    assert!(solver.remaining_count() < 504);
    assert!(solver.remaining_count() > 1);
}

#[test]
fn test_reset() {
    let mut solver = Solver::new();
    solver.apply_feedback(&Guess::parse("123").unwrap(), Score::new(0, 0));
    assert_eq!(solver.remaining_count(), 120);
    solver.reset();
    assert_eq!(solver.remaining_count(), 504);
}

#[test]
fn test_suggest_single_answer() {
    let mut solver = Solver::new();
    let guess = Guess::parse("123").unwrap();
    solver.apply_feedback(&guess, Score::WIN);

    assert_eq!(solver.remaining_count(), 1);
    let best = solver.suggest().unwrap();
    assert_eq!(best.guess, guess);
    assert!(best.is_possible_answer);
    assert_eq!(best.entropy, 0.0);
}

#[test]
fn test_suggest_none_when_contradictory() {
    let mut solver = Solver::new();
    solver.apply_feedback(&Guess::parse("123").unwrap(), Score::WIN);
    solver.apply_feedback(&Guess::parse("123").unwrap(), Score::new(0, 0));
    assert_eq!(solver.remaining_count(), 0);
    assert!(solver.suggest().is_none());
}

#[test]
fn test_opening_guess_has_positive_entropy() {
    let solver = Solver::new();
    let best = solver.suggest().unwrap();
    assert!(best.entropy > 0.0);
    assert!(best.entropy <= (13.0f64).log2());
}

#[test]
fn test_solve_for_ends_in_win() {
    for digits in [[1, 2, 3], [9, 8, 7], [4, 1, 6]] {
        let secret = Secret::from_digits(digits).unwrap();
        let mut solver = Solver::new();
        let history = solver.solve_for(&secret);

        let (last_guess, last_score) = history.last().unwrap();
        assert!(last_score.is_win());
        assert_eq!(last_guess.digits(), secret.digits());
        assert!(history[..history.len() - 1].iter().all(|(_, s)| !s.is_win()));
    }
}

#[test]
fn test_benchmark_covers_every_secret() {
    let solver = Solver::new();
    let distribution = solver.benchmark_distribution();

    let total: usize = distribution.iter().map(|(_, c)| c).sum();
    assert_eq!(total, all_combinations().len());
    assert!(distribution.windows(2).all(|w| w[0].0 < w[1].0));
    assert!(distribution.iter().all(|(guesses, _)| *guesses >= 1));
}
