//! Ranking engine.

use super::config::RankConfig;
use super::types::RankedTask;
use crate::error::{EngineError, Result};
use crate::scoring::{PriorityScorer, StandardScorer};
use crate::task::Task;
use std::fmt;
use tracing::debug;

/// Scores a batch of tasks and orders it, highest score first.
///
/// Ordering is a stable sort on the score alone: tasks with equal scores
/// keep their input order. No other attribute is consulted.
///
/// # Examples
///
/// ```
/// use u_taskrank::rank::Ranker;
/// use u_taskrank::task::Task;
///
/// let tasks = vec![
///     Task::parse("Watch movie", "Personal", "3 days left", "Not important", "Normal").unwrap(),
///     Task::parse("Study for exam", "Study/Work", "1 day left", "Very important", "Hard").unwrap(),
/// ];
///
/// let ranked = Ranker::new().rank(&tasks).unwrap();
/// assert_eq!(ranked[0].description(), "Study for exam");
/// assert_eq!(ranked[0].score, 60);
/// assert_eq!(ranked[1].score, 14);
/// ```
pub struct Ranker {
    scorer: Box<dyn PriorityScorer>,
    config: RankConfig,
}

impl Ranker {
    /// Creates a ranker with the standard scorer and default config.
    pub fn new() -> Self {
        Self {
            scorer: Box::new(StandardScorer::new()),
            config: RankConfig::default(),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: RankConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the scorer.
    pub fn with_scorer<S: PriorityScorer + 'static>(mut self, scorer: S) -> Self {
        self.scorer = Box::new(scorer);
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// Name of the active scorer.
    pub fn scorer_name(&self) -> &str {
        self.scorer.name()
    }

    fn check_len(&self, len: usize) -> Result<()> {
        self.config.validate()?;
        if len > self.config.max_batch_size {
            return Err(EngineError::BatchTooLarge {
                len,
                max: self.config.max_batch_size,
            });
        }
        Ok(())
    }

    /// Sorts tasks by priority (highest score first).
    ///
    /// Returns indices into the original slice, in ranked order.
    pub fn sort_indices(&self, tasks: &[Task]) -> Result<Vec<usize>> {
        self.check_len(tasks.len())?;

        let scores: Vec<u32> = tasks
            .iter()
            .map(|t| self.scorer.score(&t.attributes))
            .collect();

        let mut indices: Vec<usize> = (0..tasks.len()).collect();
        // `sort_by` is stable, so equal scores keep input order.
        indices.sort_by(|&a, &b| scores[b].cmp(&scores[a]));

        Ok(indices)
    }

    /// Scores and orders `tasks`.
    ///
    /// An empty slice yields an empty ranking. Fails with
    /// [`EngineError::BatchTooLarge`] when the slice exceeds
    /// `max_batch_size`.
    pub fn rank(&self, tasks: &[Task]) -> Result<Vec<RankedTask>> {
        self.check_len(tasks.len())?;

        let mut ranked: Vec<RankedTask> = tasks
            .iter()
            .map(|t| RankedTask::new(t.clone(), self.scorer.breakdown(&t.attributes)))
            .collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        debug!(
            scorer = self.scorer.name(),
            tasks = ranked.len(),
            top = ranked.first().map(|r| r.score),
            "ranked batch"
        );
        Ok(ranked)
    }

    /// Returns the index of the highest-priority task.
    ///
    /// Returns `None` if the slice is empty.
    pub fn select_best(&self, tasks: &[Task]) -> Result<Option<usize>> {
        Ok(self.sort_indices(tasks)?.first().copied())
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Ranker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ranker")
            .field("scorer", &self.scorer.name())
            .field("config", &self.config)
            .finish()
    }
}

/// Ranks `tasks` with the standard scorer and default configuration.
pub fn rank(tasks: &[Task]) -> Result<Vec<RankedTask>> {
    Ranker::new().rank(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScoreBreakdown;
    use crate::task::{Attributes, Deadline, Difficulty, Importance, TaskType};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn scenario() -> Vec<Task> {
        vec![
            Task::parse("Study for exam", "Study/work", "1 day left", "Very important", "Hard")
                .unwrap(),
            Task::parse("Watch movie", "Personal", "3 days left", "Not important", "Normal")
                .unwrap(),
            Task::parse("Exercise", "Personal", "2 days left", "Quite important", "Hard").unwrap(),
        ]
    }

    fn low_task(description: &str) -> Task {
        Task::new(
            description,
            Attributes::new(
                TaskType::Personal,
                Deadline::ThreeDays,
                Importance::Not,
                Difficulty::Normal,
            ),
        )
    }

    // Every task gets the same score.
    struct Constant;
    impl PriorityScorer for Constant {
        fn name(&self) -> &str {
            "Constant"
        }
        fn breakdown(&self, _attrs: &Attributes) -> ScoreBreakdown {
            ScoreBreakdown::flat(1)
        }
    }

    fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
        if items.len() <= 1 {
            return vec![items.to_vec()];
        }
        let mut out = Vec::new();
        for i in 0..items.len() {
            let mut rest = items.to_vec();
            let head = rest.remove(i);
            for mut tail in permutations(&rest) {
                tail.insert(0, head.clone());
                out.push(tail);
            }
        }
        out
    }

    #[test]
    fn test_end_to_end_scenario() {
        let ranked = Ranker::new().rank(&scenario()).unwrap();
        let order: Vec<&str> = ranked.iter().map(|r| r.description()).collect();
        assert_eq!(order, vec!["Study for exam", "Exercise", "Watch movie"]);

        let scores: Vec<u32> = ranked.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![60, 37, 14]);

        let bases: Vec<u32> = ranked.iter().map(|r| r.base_score()).collect();
        assert_eq!(bases, vec![50, 30, 10]);
        assert!(ranked.iter().all(|r| !r.completed));
    }

    #[test]
    fn test_empty_batch() {
        let ranked = Ranker::new().rank(&[]).unwrap();
        assert!(ranked.is_empty());
        assert_eq!(Ranker::new().select_best(&[]).unwrap(), None);
    }

    #[test]
    fn test_batch_too_large() {
        let tasks: Vec<Task> = (0..11).map(|i| low_task(&format!("t{i}"))).collect();
        let err = Ranker::new().rank(&tasks).unwrap_err();
        assert_eq!(err, EngineError::BatchTooLarge { len: 11, max: 10 });

        let ranker = Ranker::new().with_config(RankConfig::default().with_max_batch_size(11));
        assert_eq!(ranker.rank(&tasks).unwrap().len(), 11);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let ranker = Ranker::new().with_config(RankConfig::default().with_max_batch_size(0));
        assert!(matches!(ranker.rank(&[]), Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let tasks: Vec<Task> = ["a", "b", "c", "d"].iter().map(|d| low_task(d)).collect();
        let ranked = Ranker::new().rank(&tasks).unwrap();
        let order: Vec<&str> = ranked.iter().map(|r| r.description()).collect();
        assert_eq!(order, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_stable_for_every_permutation() {
        // Two tied pairs (14 and 60) plus one 37.
        let mut tasks = scenario();
        tasks.push(low_task("Nap"));
        tasks.push(
            Task::parse("Submit report", "Study/Work", "1 day left", "Very important", "Hard")
                .unwrap(),
        );

        let ranker = Ranker::new();
        for perm in permutations(&tasks) {
            let ranked = ranker.rank(&perm).unwrap();
            for w in ranked.windows(2) {
                assert!(w[0].score >= w[1].score);
                if w[0].score == w[1].score {
                    let pos = |d: &str| perm.iter().position(|t| t.description == d).unwrap();
                    assert!(pos(w[0].description()) < pos(w[1].description()));
                }
            }
        }
    }

    #[test]
    fn test_custom_scorer_preserves_order() {
        let mut tasks = scenario();
        tasks.shuffle(&mut StdRng::seed_from_u64(7));

        let ranker = Ranker::new().with_scorer(Constant);
        assert_eq!(ranker.scorer_name(), "Constant");
        assert_eq!(ranker.sort_indices(&tasks).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_sort_indices_matches_rank() {
        let tasks = scenario();
        let ranker = Ranker::new();
        let indices = ranker.sort_indices(&tasks).unwrap();
        assert_eq!(indices, vec![0, 2, 1]);
        assert_eq!(ranker.select_best(&tasks).unwrap(), Some(0));
    }

    #[test]
    fn test_rank_is_idempotent() {
        let tasks = scenario();
        assert_eq!(rank(&tasks).unwrap(), rank(&tasks).unwrap());
    }

    fn batch_strategy() -> impl Strategy<Value = Vec<Task>> {
        let all: Vec<Attributes> = Attributes::all().collect();
        prop::collection::vec(prop::sample::select(all), 0..=10).prop_map(|attrs| {
            attrs
                .into_iter()
                .enumerate()
                .map(|(i, a)| Task::new(format!("task {i}"), a))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_descending_and_stable(tasks in batch_strategy()) {
            let ranked = Ranker::new().rank(&tasks).unwrap();
            prop_assert_eq!(ranked.len(), tasks.len());
            for w in ranked.windows(2) {
                prop_assert!(w[0].score >= w[1].score);
                if w[0].score == w[1].score {
                    let pos = |d: &str| tasks.iter().position(|t| t.description == d);
                    prop_assert!(pos(w[0].description()) < pos(w[1].description()));
                }
            }
        }

        #[test]
        fn prop_scores_in_range(tasks in batch_strategy()) {
            for r in Ranker::new().rank(&tasks).unwrap() {
                prop_assert!((14..=60).contains(&r.score));
            }
        }

        #[test]
        fn prop_rank_is_a_permutation(tasks in batch_strategy()) {
            let ranker = Ranker::new();
            let mut indices = ranker.sort_indices(&tasks).unwrap();
            indices.sort_unstable();
            prop_assert_eq!(indices, (0..tasks.len()).collect::<Vec<_>>());
        }
    }
}
