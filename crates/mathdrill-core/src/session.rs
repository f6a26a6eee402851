//! Session engine: the round loop.
//!
//! Coordinates equation generation, concealment, answer collection, and
//! logging for a fixed number of rounds. Each round is stateless and
//! independent; the round index is threaded explicitly into its record.
//! User interaction happens behind the [`AnswerSource`] seam so the engine
//! never touches stdin.

use std::path::Path;
use std::time::{Duration, Instant};

use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

use crate::challenge::Challenge;
use crate::equation::{Equation, Operator};
use crate::error::QuizError;
use crate::log::SessionLog;
use crate::record::AttemptRecord;

/// Source of answers to challenges.
///
/// The CLI implements this over interactive stdin; tests script it.
/// Implementations must return an integer or a fatal error; input
/// validation and re-prompting happen inside the source.
pub trait AnswerSource {
    fn answer(&mut self, challenge: &Challenge) -> Result<i64, QuizError>;
}

/// Round-by-round progress reporting.
pub trait RoundObserver {
    fn on_round_complete(&self, record: &AttemptRecord);
    fn on_session_complete(&self, summary: &SessionSummary);
}

/// No-op progress observer.
pub struct NoopObserver;

impl RoundObserver for NoopObserver {
    fn on_round_complete(&self, _: &AttemptRecord) {}
    fn on_session_complete(&self, _: &SessionSummary) {}
}

/// Configuration for one session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Number of rounds to play.
    pub rounds: u32,
    /// Difficulty bound passed to the generator each round.
    pub difficulty: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rounds: 20,
            difficulty: 12,
        }
    }
}

/// Outcome of a completed session.
#[derive(Debug, Clone)]
pub struct SessionSummary {
    /// Rounds played.
    pub rounds: u32,
    /// Rounds answered correctly.
    pub correct: u32,
    /// Where the session log was written.
    pub log_path: std::path::PathBuf,
    /// Total wall-clock duration.
    pub elapsed: Duration,
}

/// One quiz session: a player, a fixed round count, and a log file.
#[derive(Debug)]
pub struct Session {
    player: String,
    id: Uuid,
    config: SessionConfig,
    log: SessionLog,
}

impl Session {
    /// Create a session, validating its configuration before any I/O.
    pub fn new(
        player: impl Into<String>,
        config: SessionConfig,
        results_dir: &Path,
    ) -> Result<Self, QuizError> {
        if config.rounds < 1 {
            return Err(QuizError::InvalidRounds(config.rounds));
        }
        if config.difficulty < 1 {
            return Err(QuizError::InvalidDifficulty(config.difficulty));
        }

        let id = Uuid::new_v4();
        let log = SessionLog::new(results_dir, &id.to_string());

        Ok(Self {
            player: player.into(),
            id,
            config,
            log,
        })
    }

    /// Session identifier, embedded in the log filename.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Where this session's log will be written.
    pub fn log_path(&self) -> &Path {
        self.log.path()
    }

    /// Run the full round loop, appending one record per round.
    ///
    /// Log write failures abort the session; answer-source failures do too.
    pub fn run<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        source: &mut dyn AnswerSource,
        observer: &dyn RoundObserver,
    ) -> Result<SessionSummary, QuizError> {
        let start = Instant::now();
        let mut correct_count = 0u32;

        for round in 1..=self.config.rounds {
            let operator = Operator::ALL[rng.gen_range(0..Operator::ALL.len())];
            let equation = Equation::generate(rng, operator, self.config.difficulty)?;
            let challenge = Challenge::conceal(equation, rng);

            let started_at = Utc::now();
            let answer = source.answer(&challenge)?;
            let finished_at = Utc::now();

            let correct = challenge.check(answer);
            if correct {
                correct_count += 1;
            }

            let record = AttemptRecord {
                equation,
                concealed: challenge.concealed,
                answer,
                correct,
                round,
                player: self.player.clone(),
                started_at,
                finished_at,
            };

            tracing::debug!(round, %equation, correct, "round complete");
            self.log.append(&record)?;
            observer.on_round_complete(&record);
        }

        let summary = SessionSummary {
            rounds: self.config.rounds,
            correct: correct_count,
            log_path: self.log.path().to_path_buf(),
            elapsed: start.elapsed(),
        };
        observer.on_session_complete(&summary);

        Ok(summary)
    }
}
