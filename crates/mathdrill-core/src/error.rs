//! Core error types.
//!
//! Defined in `mathdrill-core` so callers can distinguish invalid session
//! configuration from log I/O failures without string matching.

use thiserror::Error;

/// Errors that can occur while generating equations or running a session.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The difficulty bound was below 1.
    #[error("difficulty bound must be at least 1, got {0}")]
    InvalidDifficulty(i64),

    /// The round count was below 1.
    #[error("round count must be at least 1, got {0}")]
    InvalidRounds(u32),

    /// A session log row could not be parsed back into an attempt record.
    #[error("malformed log row: {0}")]
    MalformedRecord(String),

    /// The answer source was exhausted before the session finished.
    #[error("answer input ended unexpectedly")]
    InputClosed,

    /// A log directory or file operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl QuizError {
    /// Returns `true` if this error is a configuration problem the caller
    /// can fix, as opposed to an I/O failure.
    pub fn is_invalid_config(&self) -> bool {
        matches!(
            self,
            QuizError::InvalidDifficulty(_) | QuizError::InvalidRounds(_)
        )
    }
}
