//! Per-session CSV log files.
//!
//! Each session writes one file under a results directory, named with the
//! session identifier and a creation timestamp to the second. The header
//! row is written exactly once, on first append.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::QuizError;
use crate::record::{AttemptRecord, CSV_HEADER};

/// Append-only CSV log for one session.
#[derive(Debug)]
pub struct SessionLog {
    path: PathBuf,
}

impl SessionLog {
    /// Create the log handle for a session. Nothing is written until the
    /// first [`append`](Self::append).
    pub fn new(results_dir: &Path, session_id: &str) -> Self {
        let filename = format!(
            "Results_{}_{}.csv",
            session_id,
            Utc::now().format("%Y%m%d-%H%M%S")
        );
        Self {
            path: results_dir.join(filename),
        }
    }

    /// A log handle over an existing file, for reading it back.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The log file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, creating the results directory and writing the
    /// header first if the file does not exist yet.
    pub fn append(&self, record: &AttemptRecord) -> Result<(), QuizError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let write_header = !self.path.exists();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        if write_header {
            writeln!(file, "{CSV_HEADER}")?;
        }
        writeln!(file, "{}", record.to_csv_row())?;
        Ok(())
    }

    /// Read all records back from the log file.
    ///
    /// Fails on a missing header, an unexpected header, or any row that
    /// does not parse.
    pub fn read_all(&self) -> Result<Vec<AttemptRecord>, QuizError> {
        let content = std::fs::read_to_string(&self.path)?;
        let mut rows = split_rows(&content).into_iter();

        match rows.next() {
            Some(header) if header == CSV_HEADER => {}
            Some(other) => {
                return Err(QuizError::MalformedRecord(format!(
                    "unexpected header: {other}"
                )))
            }
            None => return Err(QuizError::MalformedRecord("empty log file".into())),
        }

        rows.map(|row| AttemptRecord::from_csv_row(&row)).collect()
    }
}

/// Split log content into logical rows. A newline inside a quoted field
/// (a player name can contain one) is part of the field, not a row break.
fn split_rows(content: &str) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in content.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                current.push(c);
            }
            '\n' if !in_quotes => rows.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}
