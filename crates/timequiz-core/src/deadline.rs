//! Wall-clock deadline for a quiz session.
//!
//! A [`Deadline`] is a single-shot timer. It is armed once and consumed by
//! [`Deadline::race`], which ends in exactly one terminal state: the work
//! finished first and the timer was cancelled, or the timer fired and the
//! work was dropped mid-flight.

use std::future::Future;
use std::time::Duration;

use tokio::time::{self, Instant};

/// Terminal state of a deadline. A [`Deadline`] value is the armed state;
/// racing it consumes it into one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineState {
    Fired,
    Cancelled,
}

/// What came out of racing work against a deadline.
#[derive(Debug, PartialEq, Eq)]
pub enum Supervised<T> {
    /// The work completed before the deadline.
    Finished(T),
    /// The deadline fired first; the work was cancelled.
    Expired,
}

impl<T> Supervised<T> {
    /// The terminal state the deadline reached.
    pub fn state(&self) -> DeadlineState {
        match self {
            Supervised::Finished(_) => DeadlineState::Cancelled,
            Supervised::Expired => DeadlineState::Fired,
        }
    }
}

/// An armed single-shot timer.
#[derive(Debug)]
pub struct Deadline {
    /// `None` when the budget reaches past any representable instant; such a
    /// deadline never fires.
    expires_at: Option<Instant>,
}

impl Deadline {
    /// Arm a timer that fires `budget` from now.
    pub fn arm(budget: Duration) -> Self {
        tracing::debug!(budget_ms = budget.as_millis() as u64, "deadline armed");
        Self {
            expires_at: Instant::now().checked_add(budget),
        }
    }

    /// Drive `work` until it completes or the deadline fires.
    ///
    /// If both are ready at the same poll, the work wins. When the deadline
    /// fires, `work` is dropped at its current suspension point.
    pub async fn race<F: Future>(self, work: F) -> Supervised<F::Output> {
        tokio::select! {
            biased;
            output = work => {
                tracing::debug!("deadline cancelled");
                Supervised::Finished(output)
            }
            _ = expiry(self.expires_at) => {
                tracing::debug!("deadline fired");
                Supervised::Expired
            }
        }
    }
}

async fn expiry(expires_at: Option<Instant>) {
    match expires_at {
        Some(at) => time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}
