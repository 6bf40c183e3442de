//! Core data model types for timequiz.
//!
//! Records and record sets are built once by the loader and only read
//! afterwards. A session produces exactly one [`SessionOutcome`].

use std::time::Duration;

/// One question and its expected answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// The prompt shown to the player.
    pub question: String,
    /// The expected answer, compared with [`matcher::matches`](crate::matcher::matches).
    pub answer: String,
}

impl Record {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// The ordered records played in one session.
///
/// Questions need not be unique. Order is the source order until the set is
/// shuffled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut [Record] {
        &mut self.records
    }
}

impl From<Vec<Record>> for RecordSet {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Settings for one session. Fixed once the session starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Wall-clock budget, measured from the starting gate.
    pub time_budget: Duration,
    /// Shuffle the records before the first question.
    pub randomize: bool,
    /// Seed for the shuffle. `None` draws from the thread RNG.
    pub seed: Option<u64>,
    /// A session passes when its score is strictly greater than this.
    pub pass_threshold: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            time_budget: Duration::from_secs(30),
            randomize: false,
            seed: None,
            pass_threshold: 6,
        }
    }
}

/// Score for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionResult {
    /// Number of questions answered correctly.
    pub score: u32,
    /// Number of questions in the session.
    pub total_questions: u32,
    /// `false` when the deadline cut the session short.
    pub completed: bool,
}

impl SessionResult {
    /// Whether the score clears the pass threshold.
    pub fn passed(&self, pass_threshold: u32) -> bool {
        self.score > pass_threshold
    }
}

/// How a session ended, short of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The quiz ran, either to the end or until the deadline fired.
    Finished(SessionResult),
    /// The record set was empty; no question was asked.
    NothingToPlay,
}

impl SessionOutcome {
    /// The result, if the quiz actually ran.
    pub fn result(&self) -> Option<&SessionResult> {
        match self {
            SessionOutcome::Finished(result) => Some(result),
            SessionOutcome::NothingToPlay => None,
        }
    }

    /// `true` when the deadline fired before the last question was scored.
    pub fn timed_out(&self) -> bool {
        matches!(self, SessionOutcome::Finished(r) if !r.completed)
    }
}
