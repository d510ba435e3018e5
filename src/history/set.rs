//! One ranked set of tasks and the user's completions.

use crate::error::{EngineError, Result};
use crate::evaluation::{rate_accuracy, rate_performance, AccuracyOutcome, Performance};
use crate::rank::RankedTask;
use tracing::debug;

/// A ranked batch plus the order in which the user completed its tasks.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaskSet {
    ranked: Vec<RankedTask>,
    completions: Vec<String>,
    finished: bool,
}

impl TaskSet {
    /// Creates an open set from a ranking.
    pub fn new(ranked: Vec<RankedTask>) -> Self {
        Self {
            ranked,
            completions: Vec::new(),
            finished: false,
        }
    }

    /// Marks the task with `description` as completed and records it as
    /// the next entry of the observed order.
    pub fn complete(&mut self, description: &str) -> Result<()> {
        if self.finished {
            return Err(EngineError::SetFinished);
        }
        let task = self
            .ranked
            .iter_mut()
            .find(|r| r.description() == description)
            .ok_or_else(|| EngineError::UnknownTask(description.to_string()))?;
        if task.completed {
            return Err(EngineError::AlreadyCompleted(description.to_string()));
        }
        task.mark_completed();
        self.completions.push(description.to_string());
        debug!(
            description,
            position = self.completions.len(),
            "task completed"
        );
        Ok(())
    }

    /// Closes the set. Further completions are rejected.
    pub fn finish(&mut self) {
        self.finished = true;
    }

    /// Whether [`finish`](Self::finish) has been called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Tasks in ranked order.
    pub fn ranked(&self) -> &[RankedTask] {
        &self.ranked
    }

    /// Descriptions in ranked order.
    pub fn predicted(&self) -> Vec<&str> {
        self.ranked.iter().map(RankedTask::description).collect()
    }

    /// Descriptions in the order the user completed them.
    pub fn observed(&self) -> &[String] {
        &self.completions
    }

    /// Whether every task of the set has been completed.
    pub fn is_fully_completed(&self) -> bool {
        self.completions.len() == self.ranked.len()
    }

    /// Rates the observed order against the ranking.
    pub fn accuracy(&self) -> AccuracyOutcome {
        rate_accuracy(&self.predicted(), &self.completions)
    }

    /// Share of tasks completed so far.
    pub fn performance(&self) -> Performance {
        rate_performance(&self.ranked, &self.completions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::Ranker;
    use crate::task::Task;

    fn scenario_set() -> TaskSet {
        let tasks = vec![
            Task::parse("Study for exam", "Study/Work", "1 day left", "Very important", "Hard")
                .unwrap(),
            Task::parse("Watch movie", "Personal", "3 days left", "Not important", "Normal")
                .unwrap(),
            Task::parse("Exercise", "Personal", "2 days left", "Quite important", "Hard").unwrap(),
        ];
        TaskSet::new(Ranker::new().rank(&tasks).unwrap())
    }

    #[test]
    fn test_partial_completion() {
        let mut set = scenario_set();
        set.complete("Study for exam").unwrap();
        set.complete("Watch movie").unwrap();

        let perf = set.performance();
        assert_eq!((perf.total, perf.completed, perf.percentage), (3, 2, 66.7));
        assert!(!set.accuracy().is_rated());
        assert!(set.ranked()[0].completed);
        assert!(!set.ranked()[1].completed);
    }

    #[test]
    fn test_single_completion() {
        let mut set = scenario_set();
        set.complete("Exercise").unwrap();
        assert_eq!(set.performance().percentage, 33.3);
    }

    #[test]
    fn test_full_completion_accuracy() {
        let mut set = scenario_set();
        assert_eq!(set.predicted(), vec!["Study for exam", "Exercise", "Watch movie"]);

        set.complete("Study for exam").unwrap();
        set.complete("Watch movie").unwrap();
        set.complete("Exercise").unwrap();
        assert!(set.is_fully_completed());

        let acc = set.accuracy().rated().copied().unwrap();
        assert_eq!(acc.task_count, 3);
        assert_eq!(acc.corrects, 1);
        assert_eq!(acc.percentage, 33.3);
        assert_eq!(set.performance().percentage, 100.0);
    }

    #[test]
    fn test_no_completions() {
        let set = scenario_set();
        assert_eq!(set.performance().percentage, 0.0);
        assert!(set.observed().is_empty());
    }

    #[test]
    fn test_completion_errors() {
        let mut set = scenario_set();
        assert_eq!(
            set.complete("Sleep"),
            Err(EngineError::UnknownTask("Sleep".into()))
        );
        set.complete("Exercise").unwrap();
        assert_eq!(
            set.complete("Exercise"),
            Err(EngineError::AlreadyCompleted("Exercise".into()))
        );
        set.finish();
        assert_eq!(set.complete("Watch movie"), Err(EngineError::SetFinished));
        assert_eq!(set.observed(), &["Exercise".to_string()]);
    }
}
