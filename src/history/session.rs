//! Sequence of task sets and their performance over time.

use super::config::HistoryConfig;
use super::set::TaskSet;
use crate::error::{EngineError, Result};
use crate::evaluation::Performance;
use crate::rank::Ranker;
use crate::scoring::PriorityScorer;
use crate::task::Task;
use std::collections::HashSet;
use tracing::debug;

/// Change in performance between the last two finished sets.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerformanceTrend {
    pub previous: f64,
    pub current: f64,
    /// `current - previous` in percentage points, rounded to one decimal.
    pub change: f64,
}

impl PerformanceTrend {
    fn between(previous: f64, current: f64) -> Self {
        Self {
            previous,
            current,
            change: ((current - previous) * 10.0).round() / 10.0,
        }
    }

    /// Performance went up.
    pub fn is_improvement(&self) -> bool {
        self.change > 0.0
    }

    /// Performance went down.
    pub fn is_decline(&self) -> bool {
        self.change < 0.0
    }
}

/// Holds up to `max_sets` ranked task sets.
///
/// # Examples
///
/// ```
/// use u_taskrank::history::{History, HistoryConfig};
/// use u_taskrank::task::Task;
///
/// let mut history = History::new(HistoryConfig::default()).unwrap();
/// let tasks = vec![
///     Task::parse("Exercise", "Personal", "2 days left", "Quite important", "Hard").unwrap(),
///     Task::parse("Watch movie", "Personal", "3 days left", "Not important", "Normal").unwrap(),
/// ];
///
/// let idx = history.create_set(&tasks).unwrap();
/// history.complete(idx, "Exercise").unwrap();
/// history.finish(idx).unwrap();
///
/// let overall = history.overall_performance();
/// assert_eq!(overall[0].percentage, 50.0);
/// ```
#[derive(Debug)]
pub struct History {
    config: HistoryConfig,
    ranker: Ranker,
    sets: Vec<TaskSet>,
}

impl History {
    /// Creates an empty history ranking with the standard scorer.
    pub fn new(config: HistoryConfig) -> Result<Self> {
        config.validate()?;
        let ranker = Ranker::new().with_config(config.rank.clone());
        Ok(Self {
            config,
            ranker,
            sets: Vec::new(),
        })
    }

    /// Replaces the scorer used for new sets.
    pub fn with_scorer<S: PriorityScorer + 'static>(mut self, scorer: S) -> Self {
        self.ranker = self.ranker.with_scorer(scorer);
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Ranks `tasks` and stores them as a new set. Returns the set index.
    ///
    /// Completions are matched by description, so every description in
    /// the set must be unique.
    pub fn create_set(&mut self, tasks: &[Task]) -> Result<usize> {
        if self.sets.len() >= self.config.max_sets {
            return Err(EngineError::SetLimitReached {
                max: self.config.max_sets,
            });
        }
        if tasks.is_empty() {
            return Err(EngineError::EmptyBatch);
        }
        let mut seen = HashSet::with_capacity(tasks.len());
        if let Some(dup) = tasks.iter().find(|t| !seen.insert(t.description.as_str())) {
            return Err(EngineError::DuplicateDescription(dup.description.clone()));
        }
        let ranked = self.ranker.rank(tasks)?;
        self.sets.push(TaskSet::new(ranked));
        let index = self.sets.len() - 1;
        debug!(index, tasks = tasks.len(), "created task set");
        Ok(index)
    }

    /// Returns set `index`.
    pub fn set(&self, index: usize) -> Result<&TaskSet> {
        self.sets.get(index).ok_or(EngineError::UnknownSet(index))
    }

    /// Returns set `index` mutably.
    pub fn set_mut(&mut self, index: usize) -> Result<&mut TaskSet> {
        self.sets.get_mut(index).ok_or(EngineError::UnknownSet(index))
    }

    /// Marks a task of set `index` as completed.
    pub fn complete(&mut self, index: usize, description: &str) -> Result<()> {
        self.set_mut(index)?.complete(description)
    }

    /// Closes set `index`, making it count towards overall performance.
    pub fn finish(&mut self, index: usize) -> Result<()> {
        self.set_mut(index)?.finish();
        Ok(())
    }

    /// All sets, in creation order.
    pub fn sets(&self) -> &[TaskSet] {
        &self.sets
    }

    /// Number of stored sets.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Returns `true` if no set is stored.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Finished sets, in creation order.
    pub fn finished_sets(&self) -> impl Iterator<Item = &TaskSet> {
        self.sets.iter().filter(|s| s.is_finished())
    }

    /// Performance of every finished set, in creation order.
    pub fn overall_performance(&self) -> Vec<Performance> {
        self.finished_sets().map(TaskSet::performance).collect()
    }

    /// Change between the two most recently finished sets, or `None` if
    /// fewer than two sets are finished.
    pub fn trend(&self) -> Option<PerformanceTrend> {
        let overall = self.overall_performance();
        match overall.as_slice() {
            [.., previous, current] => Some(PerformanceTrend::between(
                previous.percentage,
                current.percentage,
            )),
            _ => None,
        }
    }

    /// Drops every set.
    pub fn reset(&mut self) {
        debug!(sets = self.sets.len(), "history reset");
        self.sets.clear();
    }
}
