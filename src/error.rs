//! Error type shared by every engine component.

use thiserror::Error;

/// Errors surfaced by the engine.
///
/// Incomparable accuracy is not an error; it is reported as
/// [`AccuracyOutcome::Incomparable`](crate::evaluation::AccuracyOutcome).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A task attribute is not one of its enumerated legal values.
    #[error("invalid value {value:?} for attribute {attribute}")]
    InvalidAttributeValue {
        attribute: &'static str,
        value: String,
    },

    /// More tasks were submitted than the configured maximum.
    #[error("batch of {len} tasks exceeds the maximum of {max}")]
    BatchTooLarge { len: usize, max: usize },

    #[error("batch contains no tasks")]
    EmptyBatch,

    #[error("task description must not be empty")]
    EmptyDescription,

    #[error("duplicate task description {0:?}")]
    DuplicateDescription(String),

    #[error("exemplar table is empty")]
    EmptyExemplarTable,

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("history already holds the maximum of {max} sets")]
    SetLimitReached { max: usize },

    #[error("no task set with index {0}")]
    UnknownSet(usize),

    #[error("no task named {0:?} in this set")]
    UnknownTask(String),

    #[error("task {0:?} is already completed")]
    AlreadyCompleted(String),

    #[error("task set is already finished")]
    SetFinished,
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, EngineError>;
