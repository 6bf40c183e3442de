//! timequiz-core — Quiz loading, answer matching, and the timed session engine.
//!
//! This crate owns everything between a comma-separated quiz file and a final
//! score: the record loader, the optional shuffle, answer matching, and the
//! quiz loop raced against a wall-clock deadline.

pub mod config;
pub mod deadline;
pub mod error;
pub mod io;
pub mod loader;
pub mod matcher;
pub mod model;
pub mod session;
pub mod shuffle;

pub use error::{LoadError, SessionError};
pub use model::{Record, RecordSet, SessionConfig, SessionOutcome, SessionResult};
pub use session::run_session;
