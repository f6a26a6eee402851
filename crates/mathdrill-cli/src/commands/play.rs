//! The `mathdrill play` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use mathdrill_core::challenge::{Challenge, PLACEHOLDER};
use mathdrill_core::error::QuizError;
use mathdrill_core::record::AttemptRecord;
use mathdrill_core::session::{AnswerSource, RoundObserver, Session, SessionConfig, SessionSummary};

use crate::config::load_config_from;

/// Interactive answer source over stdin.
///
/// Non-integer input is reported and re-prompted without penalty; end of
/// input is fatal.
struct ConsoleAnswerSource;

impl AnswerSource for ConsoleAnswerSource {
    fn answer(&mut self, challenge: &Challenge) -> Result<i64, QuizError> {
        let stdin = io::stdin();
        let mut lines = stdin.lock();
        loop {
            print!("Calculate \"{PLACEHOLDER}\": {challenge}: ");
            io::stdout().flush()?;

            let mut line = String::new();
            if lines.read_line(&mut line)? == 0 {
                return Err(QuizError::InputClosed);
            }
            match line.trim().parse::<i64>() {
                Ok(n) => return Ok(n),
                Err(_) => println!("Not an integer! Try again."),
            }
        }
    }
}

/// Console progress observer.
struct ConsoleObserver {
    show_correct: bool,
}

impl RoundObserver for ConsoleObserver {
    fn on_round_complete(&self, record: &AttemptRecord) {
        if record.correct {
            println!("Correct!");
        } else if self.show_correct {
            let expected = Challenge::new(record.equation, record.concealed).concealed_value();
            println!("Wrong! Correct answer was: {expected}");
        } else {
            println!("Wrong!");
        }
    }

    fn on_session_complete(&self, summary: &SessionSummary) {
        println!(
            "\nSession complete: {}/{} correct ({:.1}s)",
            summary.correct,
            summary.rounds,
            summary.elapsed.as_secs_f64()
        );
    }
}

pub fn execute(
    name: Option<String>,
    rounds: Option<u32>,
    difficulty: Option<i64>,
    results_dir: Option<PathBuf>,
    config_path: Option<PathBuf>,
    hide_correct: bool,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let session_config = SessionConfig {
        rounds: rounds.unwrap_or(config.default_rounds),
        difficulty: difficulty.unwrap_or(config.default_difficulty),
    };
    let results_dir = results_dir.unwrap_or(config.results_dir);
    let show_correct = !hide_correct && config.show_correct;

    let player = match name {
        Some(n) => n,
        None => prompt_name()?,
    };

    let session = Session::new(player, session_config, &results_dir)?;
    tracing::info!(session_id = %session.id(), "starting session");

    let mut rng = rand::thread_rng();
    let summary = session.run(
        &mut rng,
        &mut ConsoleAnswerSource,
        &ConsoleObserver { show_correct },
    )?;

    println!("Results saved to: {}", summary.log_path.display());
    Ok(())
}

/// Prompt for the player name until a non-empty one is entered.
fn prompt_name() -> Result<String> {
    let stdin = io::stdin();
    let mut lines = stdin.lock();
    loop {
        print!("Please enter your name: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if lines.read_line(&mut line)? == 0 {
            anyhow::bail!("input ended before a name was entered");
        }
        let name = line.trim();
        if !name.is_empty() {
            return Ok(name.to_string());
        }
    }
}
