//! Timed quiz sessions.
//!
//! A session asks every record in order, scores one point per matching
//! answer, and races the whole loop against a [`Deadline`] armed when the
//! player passes the starting gate.

use std::path::Path;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::deadline::{Deadline, Supervised};
use crate::error::SessionError;
use crate::io::{LineReader, LineWriter};
use crate::loader;
use crate::matcher::matches;
use crate::model::{RecordSet, SessionConfig, SessionOutcome, SessionResult};
use crate::shuffle::shuffle_seeded;

/// Load a quiz file and play it.
pub async fn play_file<R, W>(
    path: &Path,
    config: &SessionConfig,
    reader: &mut R,
    writer: &mut W,
) -> Result<SessionOutcome, SessionError>
where
    R: LineReader + ?Sized,
    W: LineWriter + ?Sized,
{
    let records = loader::load_file(path)?;
    run_session(records, config, reader, writer).await
}

/// Play one session over `records`.
///
/// Returns [`SessionOutcome::NothingToPlay`] without prompting when there
/// are no records. Otherwise waits for the starting gate, then asks the
/// questions under the configured time budget. If the budget runs out, the
/// result carries `completed = false` and the score of the questions fully
/// answered so far. An input failure ends the session with an error and no
/// result.
pub async fn run_session<R, W>(
    mut records: RecordSet,
    config: &SessionConfig,
    reader: &mut R,
    writer: &mut W,
) -> Result<SessionOutcome, SessionError>
where
    R: LineReader + ?Sized,
    W: LineWriter + ?Sized,
{
    if config.randomize {
        shuffle_seeded(&mut records, config.seed);
    }

    if records.is_empty() {
        tracing::info!("quiz has no records, nothing to play");
        return Ok(SessionOutcome::NothingToPlay);
    }

    let total_questions = u32::try_from(records.len()).unwrap_or(u32::MAX);

    writer.write_line("Press Enter to start the quiz").await;
    reader.read_line().await?;

    let score = AtomicU32::new(0);
    let deadline = Deadline::arm(config.time_budget);
    tracing::info!(
        total_questions,
        budget_secs = config.time_budget.as_secs_f64(),
        "quiz started"
    );

    let supervised = deadline
        .race(ask_questions(&records, reader, writer, &score))
        .await;
    tracing::debug!(state = ?supervised.state(), "deadline settled");

    let result = match supervised {
        Supervised::Finished(answered) => {
            answered?;
            let result = SessionResult {
                score: score.load(Ordering::Acquire),
                total_questions,
                completed: true,
            };
            tracing::info!(score = result.score, total_questions, "quiz finished");
            result
        }
        Supervised::Expired => {
            let result = SessionResult {
                score: score.load(Ordering::Acquire),
                total_questions,
                completed: false,
            };
            tracing::warn!(
                score = result.score,
                total_questions,
                "time budget ran out"
            );
            result
        }
    };

    report(&result, config.pass_threshold, writer).await;
    Ok(SessionOutcome::Finished(result))
}

/// Ask every record in order. `score` only moves after an answer is fully
/// judged.
async fn ask_questions<R, W>(
    records: &RecordSet,
    reader: &mut R,
    writer: &mut W,
    score: &AtomicU32,
) -> std::io::Result<()>
where
    R: LineReader + ?Sized,
    W: LineWriter + ?Sized,
{
    for (index, record) in records.iter().enumerate() {
        let number = index + 1;
        writer
            .write_line(&format!("Question {number}: {}", record.question))
            .await;

        let answer = reader.read_line().await?;
        let correct = matches(&record.answer, &answer);
        if correct {
            score.fetch_add(1, Ordering::Release);
        }
        tracing::debug!(question = number, correct, "answer judged");
    }
    Ok(())
}

async fn report<W>(result: &SessionResult, pass_threshold: u32, writer: &mut W)
where
    W: LineWriter + ?Sized,
{
    if !result.completed {
        writer.write_line("Ran out of time").await;
        writer
            .write_line(&format!("Your score was: {}", result.score))
            .await;
    } else if result.passed(pass_threshold) {
        writer
            .write_line(&format!("Well done, your score is: {}", result.score))
            .await;
    } else {
        writer
            .write_line(&format!("Bad luck. Your score is: {}", result.score))
            .await;
    }
}
