//! Ranked task record.

use crate::scoring::ScoreBreakdown;
use crate::task::{Attributes, Task};

/// A task with its computed priority score.
///
/// Produced by the ranker; `completed` is set later, when the user marks
/// the task done.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedTask {
    pub task: Task,
    /// Final score (base + bonuses).
    pub score: u32,
    pub breakdown: ScoreBreakdown,
    pub completed: bool,
}

impl RankedTask {
    /// Wraps a task with its score breakdown; not yet completed.
    pub fn new(task: Task, breakdown: ScoreBreakdown) -> Self {
        Self {
            task,
            score: breakdown.total(),
            breakdown,
            completed: false,
        }
    }

    /// Task description.
    pub fn description(&self) -> &str {
        &self.task.description
    }

    /// Task attributes.
    pub fn attributes(&self) -> &Attributes {
        &self.task.attributes
    }

    /// Classifier score before bonuses.
    pub fn base_score(&self) -> u32 {
        self.breakdown.base
    }

    /// Flags the task as done.
    pub fn mark_completed(&mut self) {
        self.completed = true;
    }
}
