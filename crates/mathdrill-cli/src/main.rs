//! mathdrill CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "mathdrill", version, about = "Arithmetic quiz generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a quiz session
    Play {
        /// Player name (prompted interactively if omitted)
        #[arg(long)]
        name: Option<String>,

        /// Number of rounds to play
        #[arg(long)]
        rounds: Option<u32>,

        /// Difficulty bound for operands
        #[arg(long)]
        difficulty: Option<i64>,

        /// Directory for session logs
        #[arg(long)]
        results_dir: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Do not reveal the correct answer after a wrong one
        #[arg(long)]
        hide_correct: bool,
    },

    /// Summarize a session log
    Stats {
        /// Path to a session log CSV
        #[arg(long)]
        log: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mathdrill=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            name,
            rounds,
            difficulty,
            results_dir,
            config,
            hide_correct,
        } => commands::play::execute(name, rounds, difficulty, results_dir, config, hide_correct),
        Commands::Stats { log } => commands::stats::execute(log),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
