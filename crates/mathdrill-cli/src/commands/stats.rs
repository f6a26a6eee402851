//! The `mathdrill stats` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use mathdrill_core::equation::Operator;
use mathdrill_core::log::SessionLog;
use mathdrill_core::record::AttemptRecord;

pub fn execute(log_path: PathBuf) -> Result<()> {
    let records = SessionLog::open(&log_path)
        .read_all()
        .with_context(|| format!("failed to read session log: {}", log_path.display()))?;

    anyhow::ensure!(!records.is_empty(), "session log has no rounds");

    println!("Session log: {}", log_path.display());
    println!("Player: {}", records[0].player);

    let mut table = Table::new();
    table.set_header(vec!["Operator", "Rounds", "Correct", "Accuracy", "Avg Time"]);

    for op in Operator::ALL {
        let group: Vec<&AttemptRecord> = records
            .iter()
            .filter(|r| r.equation.operator == op)
            .collect();
        if group.is_empty() {
            continue;
        }
        table.add_row(stat_row(op.to_string(), &group));
    }

    let all: Vec<&AttemptRecord> = records.iter().collect();
    table.add_row(stat_row("Total".to_string(), &all));

    println!("\n{table}");
    Ok(())
}

fn stat_row(label: String, group: &[&AttemptRecord]) -> Vec<Cell> {
    let rounds = group.len();
    let correct = group.iter().filter(|r| r.correct).count();
    let total_ms: i64 = group
        .iter()
        .map(|r| r.finished_at.signed_duration_since(r.started_at).num_milliseconds())
        .sum();
    let avg_secs = total_ms as f64 / rounds as f64 / 1000.0;

    vec![
        Cell::new(label),
        Cell::new(rounds),
        Cell::new(correct),
        Cell::new(format!("{:.1}%", correct as f64 / rounds as f64 * 100.0)),
        Cell::new(format!("{avg_secs:.1}s")),
    ]
}
