//! The `timequiz run` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use timequiz_core::config::{load_config_from, parse_duration};
use timequiz_core::io::{stdin, stdout, LineWriter};
use timequiz_core::session::play_file;
use timequiz_core::{SessionError, SessionOutcome};

pub async fn execute(
    file: Option<PathBuf>,
    shuffle: bool,
    time_limit: Option<String>,
    seed: Option<u64>,
    pass_threshold: Option<u32>,
    config_path: Option<PathBuf>,
) -> Result<SessionOutcome> {
    let config = load_config_from(config_path.as_deref())?;

    let mut session_config = config.session_config()?;
    if shuffle {
        session_config.randomize = true;
    }
    if let Some(limit) = &time_limit {
        session_config.time_budget =
            parse_duration(limit).with_context(|| format!("invalid --time-limit '{limit}'"))?;
    }
    if seed.is_some() {
        session_config.seed = seed;
    }
    if let Some(threshold) = pass_threshold {
        session_config.pass_threshold = threshold;
    }

    let file = file.unwrap_or(config.quiz_file);
    let mut reader = stdin();
    let mut writer = stdout();

    writer
        .write_line(&format!("Playing quiz file: {}", file.display()))
        .await;

    let outcome = play_file(&file, &session_config, &mut reader, &mut writer)
        .await
        .map_err(|e| match e {
            SessionError::Load(e) => anyhow::Error::new(e).context("invalid quiz file"),
            other => other.into(),
        })?;

    if outcome == SessionOutcome::NothingToPlay {
        writer
            .write_line("File is empty, submit another file")
            .await;
    }

    Ok(outcome)
}
