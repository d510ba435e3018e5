//! Validated task batches.

use super::types::{Attributes, Task};
use crate::error::{EngineError, Result};
use crate::rank::DEFAULT_MAX_BATCH_SIZE;

/// Collects tasks for one set while enforcing the batch invariants:
/// non-empty, unique descriptions, and at most `capacity` entries.
///
/// The ranker itself only checks the size limit; uniqueness is enforced
/// here, at the point where tasks are entered.
///
/// # Examples
///
/// ```
/// use u_taskrank::task::{Attributes, TaskBatch};
///
/// let attrs = Attributes::parse("Personal", "2 days left", "Quite important", "Hard").unwrap();
/// let mut batch = TaskBatch::new();
/// batch.push("Exercise", attrs).unwrap();
/// assert!(batch.push("Exercise", attrs).is_err());
/// assert_eq!(batch.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TaskBatch {
    tasks: Vec<Task>,
    capacity: usize,
}

impl TaskBatch {
    /// Creates an empty batch with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_BATCH_SIZE)
    }

    /// Creates an empty batch holding at most `capacity` tasks.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tasks: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Adds a task.
    ///
    /// The description is trimmed before the empty and duplicate checks.
    pub fn push(&mut self, description: impl Into<String>, attributes: Attributes) -> Result<()> {
        let description = description.into().trim().to_string();
        if description.is_empty() {
            return Err(EngineError::EmptyDescription);
        }
        if self.contains(&description) {
            return Err(EngineError::DuplicateDescription(description));
        }
        if self.tasks.len() >= self.capacity {
            return Err(EngineError::BatchTooLarge {
                len: self.tasks.len() + 1,
                max: self.capacity,
            });
        }
        self.tasks.push(Task::new(description, attributes));
        Ok(())
    }

    /// Returns `true` if a task with this description is already present.
    pub fn contains(&self, description: &str) -> bool {
        self.tasks.iter().any(|t| t.description == description)
    }

    /// Number of tasks entered.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if no task was entered.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns `true` once `capacity` tasks are entered.
    pub fn is_full(&self) -> bool {
        self.tasks.len() >= self.capacity
    }

    /// Maximum number of tasks.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Tasks in entry order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Consumes the batch, failing if no task was entered.
    pub fn into_tasks(self) -> Result<Vec<Task>> {
        if self.tasks.is_empty() {
            return Err(EngineError::EmptyBatch);
        }
        Ok(self.tasks)
    }
}

impl Default for TaskBatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Deadline, Difficulty, Importance, TaskType};

    fn attrs() -> Attributes {
        Attributes::new(
            TaskType::Personal,
            Deadline::ThreeDays,
            Importance::Not,
            Difficulty::Normal,
        )
    }

    #[test]
    fn test_rejects_duplicates() {
        let mut batch = TaskBatch::new();
        batch.push("Watch movie", attrs()).unwrap();
        let err = batch.push(" Watch movie ", attrs()).unwrap_err();
        assert_eq!(err, EngineError::DuplicateDescription("Watch movie".into()));
        assert_eq!(batch.len(), 1);
    }

    #[test]
    fn test_rejects_empty_description() {
        let mut batch = TaskBatch::new();
        assert_eq!(batch.push("   ", attrs()), Err(EngineError::EmptyDescription));
        assert!(batch.is_empty());
    }

    #[test]
    fn test_capacity_limit() {
        let mut batch = TaskBatch::with_capacity(2);
        batch.push("a", attrs()).unwrap();
        batch.push("b", attrs()).unwrap();
        assert!(batch.is_full());
        assert_eq!(
            batch.push("c", attrs()),
            Err(EngineError::BatchTooLarge { len: 3, max: 2 })
        );
    }

    #[test]
    fn test_default_capacity_is_ten() {
        let mut batch = TaskBatch::new();
        for i in 0..10 {
            batch.push(format!("task {i}"), attrs()).unwrap();
        }
        assert!(batch.push("one more", attrs()).is_err());
    }

    #[test]
    fn test_into_tasks_requires_one_task() {
        assert_eq!(TaskBatch::new().into_tasks(), Err(EngineError::EmptyBatch));

        let mut batch = TaskBatch::new();
        batch.push("Exercise", attrs()).unwrap();
        let tasks = batch.into_tasks().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].description, "Exercise");
    }
}
