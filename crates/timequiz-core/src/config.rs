//! Quiz configuration.
//!
//! Settings come from `timequiz.toml`, then environment overrides. The CLI
//! applies its own flags on top before building a [`SessionConfig`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::SessionConfig;

/// Top-level timequiz configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Quiz file played when none is given on the command line.
    #[serde(default = "default_quiz_file")]
    pub quiz_file: PathBuf,
    /// Session time limit, e.g. "30s", "2m" or "1m30s".
    #[serde(default = "default_time_limit")]
    pub time_limit: String,
    /// Shuffle questions before playing.
    #[serde(default)]
    pub shuffle: bool,
    /// Seed for a reproducible shuffle.
    #[serde(default)]
    pub seed: Option<u64>,
    /// A score strictly above this passes.
    #[serde(default = "default_pass_threshold")]
    pub pass_threshold: u32,
}

fn default_quiz_file() -> PathBuf {
    PathBuf::from("defaultQuiz.csv")
}
fn default_time_limit() -> String {
    "30s".to_string()
}
fn default_pass_threshold() -> u32 {
    6
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            quiz_file: default_quiz_file(),
            time_limit: default_time_limit(),
            shuffle: false,
            seed: None,
            pass_threshold: default_pass_threshold(),
        }
    }
}

impl QuizConfig {
    /// Parsed session time limit.
    pub fn time_budget(&self) -> Result<Duration> {
        parse_duration(&self.time_limit)
            .with_context(|| format!("invalid time limit: '{}'", self.time_limit))
    }

    /// Build the settings for one session.
    pub fn session_config(&self) -> Result<SessionConfig> {
        Ok(SessionConfig {
            time_budget: self.time_budget()?,
            randomize: self.shuffle,
            seed: self.seed,
            pass_threshold: self.pass_threshold,
        })
    }
}

/// Parse a duration such as `30s`, `2m`, `1m30s`, `1h`, `500ms` or a bare
/// number of seconds.
pub fn parse_duration(input: &str) -> Result<Duration> {
    let input = input.trim();
    anyhow::ensure!(!input.is_empty(), "duration is empty");

    if let Ok(secs) = input.parse::<u64>() {
        anyhow::ensure!(secs > 0, "duration must be greater than zero");
        return Ok(Duration::from_secs(secs));
    }

    let mut total = Duration::ZERO;
    let mut rest = input;
    while !rest.is_empty() {
        let digits = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        anyhow::ensure!(digits > 0, "expected a number in '{input}'");
        let value: u64 = rest[..digits]
            .parse()
            .with_context(|| format!("number out of range in '{input}'"))?;
        rest = &rest[digits..];

        let unit_len = rest
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(rest.len());
        let secs_per_unit = match &rest[..unit_len] {
            "ms" => None,
            "s" => Some(1),
            "m" => Some(60),
            "h" => Some(3600),
            "" => anyhow::bail!("missing unit in '{input}'"),
            unit => anyhow::bail!("unknown unit '{unit}' in '{input}'"),
        };
        let part = match secs_per_unit {
            None => Some(Duration::from_millis(value)),
            Some(factor) => value.checked_mul(factor).map(Duration::from_secs),
        };
        total = part
            .and_then(|part| total.checked_add(part))
            .with_context(|| format!("duration out of range in '{input}'"))?;
        rest = &rest[unit_len..];
    }

    anyhow::ensure!(!total.is_zero(), "duration must be greater than zero");
    Ok(total)
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order when no path is given:
/// 1. `timequiz.toml` in the current directory
/// 2. `~/.config/timequiz/config.toml`
///
/// Environment variable overrides: `TIMEQUIZ_TIME_LIMIT`, `TIMEQUIZ_SHUFFLE`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("timequiz.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<QuizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => QuizConfig::default(),
    };

    if let Ok(limit) = std::env::var("TIMEQUIZ_TIME_LIMIT") {
        config.time_limit = limit;
    }
    if let Ok(shuffle) = std::env::var("TIMEQUIZ_SHUFFLE") {
        config.shuffle = parse_flag(&shuffle)
            .with_context(|| format!("invalid TIMEQUIZ_SHUFFLE value: '{shuffle}'"))?;
    }

    // Surface a bad time limit at load time rather than at the starting gate.
    config.time_budget()?;

    Ok(config)
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("expected a boolean, got '{other}'"),
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("timequiz"))
}
