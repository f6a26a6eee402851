//! Attempt records and their CSV row format.
//!
//! One record is created per round, serialized immediately to the session
//! log, and never mutated afterward. The column set and order match the
//! session log header in [`CSV_HEADER`].

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::challenge::ConcealedField;
use crate::equation::{Equation, Operator};
use crate::error::QuizError;

/// Header row written once at the top of every session log.
pub const CSV_HEADER: &str =
    "Op,Left,Right,Result,TimeBegin,EqResult,LeftOut,UserAnswer,TimeEnd,EqNumber,Name";

/// The logged outcome of one quiz round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// The full equation that was posed.
    pub equation: Equation,
    /// Which field was concealed.
    pub concealed: ConcealedField,
    /// The user's answer, as entered.
    pub answer: i64,
    /// Whether the answer matched the concealed value exactly.
    pub correct: bool,
    /// 1-based round index within the session.
    pub round: u32,
    /// Player name.
    pub player: String,
    /// When the challenge was shown.
    pub started_at: DateTime<Utc>,
    /// When the answer was received.
    pub finished_at: DateTime<Utc>,
}

impl AttemptRecord {
    /// Serialize to one CSV row matching [`CSV_HEADER`].
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{},{},{}",
            self.equation.operator,
            self.equation.left,
            self.equation.right,
            self.equation.result,
            format_timestamp(&self.started_at),
            self.correct,
            self.concealed,
            self.answer,
            format_timestamp(&self.finished_at),
            self.round,
            escape_field(&self.player),
        )
    }

    /// Parse one CSV row back into a record.
    pub fn from_csv_row(row: &str) -> Result<Self, QuizError> {
        let fields = split_row(row);
        if fields.len() != 11 {
            return Err(QuizError::MalformedRecord(format!(
                "expected 11 fields, got {}: {row}",
                fields.len()
            )));
        }

        let malformed = |what: &str| QuizError::MalformedRecord(format!("{what}: {row}"));

        let operator: Operator = fields[0].parse().map_err(|_| malformed("bad operator"))?;
        let left: i64 = fields[1].parse().map_err(|_| malformed("bad left"))?;
        let right: i64 = fields[2].parse().map_err(|_| malformed("bad right"))?;
        let result: i64 = fields[3].parse().map_err(|_| malformed("bad result"))?;
        let started_at = parse_timestamp(&fields[4]).ok_or_else(|| malformed("bad TimeBegin"))?;
        let correct: bool = fields[5].parse().map_err(|_| malformed("bad EqResult"))?;
        let concealed: ConcealedField =
            fields[6].parse().map_err(|_| malformed("bad LeftOut"))?;
        let answer: i64 = fields[7].parse().map_err(|_| malformed("bad UserAnswer"))?;
        let finished_at = parse_timestamp(&fields[8]).ok_or_else(|| malformed("bad TimeEnd"))?;
        let round: u32 = fields[9].parse().map_err(|_| malformed("bad EqNumber"))?;
        let player = fields[10].clone();

        Ok(Self {
            equation: Equation {
                operator,
                left,
                right,
                result,
            },
            concealed,
            answer,
            correct,
            round,
            player,
            started_at,
            finished_at,
        })
    }
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    // Nanosecond precision so rows parse back to the exact instant.
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Quote a field if it contains a comma, quote, or newline.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Split a CSV row into fields, honoring double-quoted fields with `""`
/// escapes. Only the player name is ever quoted in practice.
fn split_row(row: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = row.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if current.is_empty() => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_record(player: &str) -> AttemptRecord {
        AttemptRecord {
            equation: Equation::new(Operator::Multiply, 3, 4),
            concealed: ConcealedField::Result,
            answer: 12,
            correct: true,
            round: 1,
            player: player.into(),
            started_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            finished_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 3).unwrap(),
        }
    }

    #[test]
    fn header_matches_row_field_count() {
        let row = sample_record("alice").to_csv_row();
        assert_eq!(
            split_row(&row).len(),
            CSV_HEADER.split(',').count(),
            "row: {row}"
        );
    }

    #[test]
    fn row_round_trip() {
        let record = sample_record("alice");
        let parsed = AttemptRecord::from_csv_row(&record.to_csv_row()).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn round_trip_preserves_live_timestamps() {
        let mut record = sample_record("bob");
        record.started_at = Utc::now();
        record.finished_at = Utc::now();
        let parsed = AttemptRecord::from_csv_row(&record.to_csv_row()).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn round_trip_with_comma_in_name() {
        let record = sample_record("Smith, Jane \"JJ\"");
        let row = record.to_csv_row();
        let parsed = AttemptRecord::from_csv_row(&row).unwrap();
        assert_eq!(parsed.player, "Smith, Jane \"JJ\"");
        assert_eq!(parsed, record);
    }

    #[test]
    fn negative_result_round_trips() {
        let mut record = sample_record("carol");
        record.equation = Equation::new(Operator::Subtract, 2, 9);
        record.concealed = ConcealedField::Result;
        record.answer = -7;
        record.correct = true;
        let parsed = AttemptRecord::from_csv_row(&record.to_csv_row()).unwrap();
        assert_eq!(parsed.answer, -7);
        assert_eq!(parsed.equation.result, -7);
    }

    #[test]
    fn rejects_wrong_field_count() {
        let err = AttemptRecord::from_csv_row("1,2,3").unwrap_err();
        assert!(matches!(err, QuizError::MalformedRecord(_)));
    }

    #[test]
    fn rejects_garbage_fields() {
        let good = sample_record("alice").to_csv_row();
        let bad = good.replacen('*', "%", 1);
        assert!(AttemptRecord::from_csv_row(&bad).is_err());
    }
}
