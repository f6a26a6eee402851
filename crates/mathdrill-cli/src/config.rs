//! mathdrill configuration.
//!
//! An optional TOML file with session defaults. CLI flags always win over
//! the file; a missing file means the built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level mathdrill configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MathdrillConfig {
    /// Default number of rounds per session.
    #[serde(default = "default_rounds")]
    pub default_rounds: u32,
    /// Default difficulty bound for operands.
    #[serde(default = "default_difficulty")]
    pub default_difficulty: i64,
    /// Directory session logs are written to.
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,
    /// Whether to reveal the correct answer after a wrong one.
    #[serde(default = "default_show_correct")]
    pub show_correct: bool,
}

fn default_rounds() -> u32 {
    20
}
fn default_difficulty() -> i64 {
    12
}
fn default_results_dir() -> PathBuf {
    PathBuf::from("Results")
}
fn default_show_correct() -> bool {
    true
}

impl Default for MathdrillConfig {
    fn default() -> Self {
        Self {
            default_rounds: default_rounds(),
            default_difficulty: default_difficulty(),
            results_dir: default_results_dir(),
            show_correct: default_show_correct(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `mathdrill.toml` in the current directory
/// 2. `~/.config/mathdrill/config.toml`
pub fn load_config_from(path: Option<&Path>) -> Result<MathdrillConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("mathdrill.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            global.exists().then_some(global)
        } else {
            None
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        None => Ok(MathdrillConfig::default()),
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("mathdrill"))
}
