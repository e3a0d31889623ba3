//! Number Baseball CLI
//!
//! Interactive console game, plus a rules self-check and a solver benchmark.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, info};
use number_baseball::{
    run_self_check, GameConfig, Guess, Outcome, Secret, Session, Solver, MAX_ATTEMPTS,
};

const USAGE_TEXT: &str = include_str!("text/usage.txt");

struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    fn new(message: &'static str) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();
        let handle = thread::spawn(move || {
            let frames = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
            let mut stdout = io::stdout();
            let mut i = 0;
            while running_clone.load(Ordering::Relaxed) {
                let _ = write!(stdout, "\r{} {}", frames[i % frames.len()], message);
                let _ = stdout.flush();
                thread::sleep(Duration::from_millis(80));
                i += 1;
            }
            let _ = write!(stdout, "\r{}\r", " ".repeat(message.len() + 3));
            let _ = stdout.flush();
        });
        Self {
            running,
            handle: Some(handle),
        }
    }

    fn stop(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

fn run_interactive() -> io::Result<()> {
    let config = GameConfig::from_env();
    info!(
        "starting game: {} attempts, seeded: {}",
        config.max_attempts,
        config.seed.is_some()
    );
    let secret = config.generate_secret();

    let stdin = io::stdin();
    let mut session = Session::new(&config, stdin.lock(), io::stdout());
    session.print_banner()?;
    let outcome = session.play(&secret)?;
    debug!("game over: {:?}", outcome);

    if let Outcome::Abandoned { .. } = outcome {
        println!();
        println!("Input closed. Goodbye!");
    }
    Ok(())
}

fn run_solve(target: &str) -> Result<(), String> {
    let secret = Guess::parse(target)
        .and_then(|guess| Secret::from_digits(*guess.digits()))
        .map_err(|err| format!("Invalid secret {:?}: {}", target, err))?;

    println!("Solving for: {}", secret);
    println!();

    let mut solver = Solver::new();
    let history = solver.solve_for(&secret);
    for (i, (guess, score)) in history.iter().enumerate() {
        println!("Guess {}: {} → {}", i + 1, guess, score);
    }

    println!();
    println!("Solved in {} guesses.", history.len());
    Ok(())
}

fn run_bench() {
    let solver = Solver::new();

    let spinner = Spinner::new("Solving every secret...");
    let start = std::time::Instant::now();
    let distribution = solver.benchmark_distribution();
    let elapsed = start.elapsed();
    spinner.stop();

    let total: usize = distribution.iter().map(|(_, c)| c).sum();
    let total_guesses: usize = distribution.iter().map(|(g, c)| g * c).sum();
    if total == 0 {
        println!("No secrets to solve.");
        return;
    }

    println!("Guess distribution:");
    for (guesses, count) in &distribution {
        let pct = *count as f64 / total as f64 * 100.0;
        let bar = "█".repeat((*count * 40 / total).max(1));
        println!("  {} guesses: {:>4} ({:>5.1}%) {}", guesses, count, pct, bar);
    }
    println!();
    println!("Average guesses: {:.3}", total_guesses as f64 / total as f64);
    println!("Total secrets: {}", total);
    println!("Time elapsed: {:.2?}", elapsed);

    let failures: usize = distribution
        .iter()
        .filter(|(g, _)| *g > MAX_ATTEMPTS)
        .map(|(_, c)| c)
        .sum();
    if failures > 0 {
        println!("Secrets not solved in {} guesses: {}", MAX_ATTEMPTS, failures);
    } else {
        println!("✓ All secrets solved within {} guesses!", MAX_ATTEMPTS);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--help" | "-h" => {
                println!("{}", USAGE_TEXT);
            }
            "test" => {
                let mut stdout = io::stdout();
                if let Err(err) = run_self_check(&mut stdout) {
                    eprintln!("Self-check aborted: {}", err);
                    std::process::exit(1);
                }
            }
            "solve" => {
                let Some(target) = args.get(2) else {
                    eprintln!("Usage: number-baseball solve <secret>");
                    std::process::exit(1);
                };
                if let Err(msg) = run_solve(target) {
                    eprintln!("{}", msg);
                    std::process::exit(1);
                }
            }
            "benchmark" | "bench" => run_bench(),
            _ => {
                eprintln!("Unknown command: {}", args[1]);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    } else if let Err(err) = run_interactive() {
        eprintln!("Game aborted: {}", err);
        std::process::exit(1);
    }
}
