//! Priority classifier: attribute tuple → base score.

use super::exemplar::{Exemplar, EXEMPLARS};
use super::tree::DecisionTree;
use crate::error::Result;
use crate::task::Attributes;
use std::sync::OnceLock;
use tracing::debug;

static SHARED: OnceLock<PriorityClassifier> = OnceLock::new();

/// Maps task attributes to a base score using a decision tree induced
/// from an exemplar table.
///
/// The tree is built once at construction and never modified, so a
/// classifier can be shared freely between threads.
///
/// # Examples
///
/// ```
/// use u_taskrank::classify::PriorityClassifier;
///
/// let classifier = PriorityClassifier::shared();
/// let score = classifier
///     .classify_labels("Study/Work", "1 day left", "Very important", "Hard")
///     .unwrap();
/// assert_eq!(score, 50);
/// ```
#[derive(Debug, Clone)]
pub struct PriorityClassifier {
    tree: DecisionTree,
    scores: Vec<u32>,
}

impl PriorityClassifier {
    /// Builds a classifier from the standard exemplar table.
    pub fn new() -> Self {
        Self::build(&EXEMPLARS)
    }

    /// Returns the process-wide classifier built from the standard table.
    pub fn shared() -> &'static PriorityClassifier {
        SHARED.get_or_init(Self::new)
    }

    /// Builds a classifier from a custom exemplar table.
    pub fn from_exemplars(exemplars: &[Exemplar]) -> Result<Self> {
        let tree = DecisionTree::induce(exemplars)?;
        Ok(Self {
            tree,
            scores: distinct_scores(exemplars),
        })
    }

    fn build(exemplars: &[Exemplar]) -> Self {
        Self {
            tree: DecisionTree::grow(exemplars),
            scores: distinct_scores(exemplars),
        }
    }

    /// Returns the base score for `attributes`.
    pub fn classify(&self, attributes: &Attributes) -> u32 {
        let score = self.tree.predict(attributes);
        debug!(%attributes, score, "classified");
        score
    }

    /// Parses textual attribute labels and classifies them.
    ///
    /// Fails with [`InvalidAttributeValue`](crate::EngineError::InvalidAttributeValue)
    /// if any label is not a legal value.
    pub fn classify_labels(
        &self,
        task_type: &str,
        deadline: &str,
        importance: &str,
        difficulty: &str,
    ) -> Result<u32> {
        let attributes = Attributes::parse(task_type, deadline, importance, difficulty)?;
        Ok(self.classify(&attributes))
    }

    /// Distinct base scores present in the training table, ascending.
    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    /// Returns the induced tree.
    pub fn tree(&self) -> &DecisionTree {
        &self.tree
    }
}

impl Default for PriorityClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Classifies textual attribute labels with the shared classifier.
///
/// # Examples
///
/// ```
/// use u_taskrank::classify::classify;
///
/// assert_eq!(classify("Personal", "3 days left", "Not important", "Normal").unwrap(), 10);
/// assert!(classify("Personal", "next week", "Not important", "Normal").is_err());
/// ```
pub fn classify(task_type: &str, deadline: &str, importance: &str, difficulty: &str) -> Result<u32> {
    PriorityClassifier::shared().classify_labels(task_type, deadline, importance, difficulty)
}

fn distinct_scores(exemplars: &[Exemplar]) -> Vec<u32> {
    let mut scores: Vec<u32> = exemplars.iter().map(|e| e.base_score).collect();
    scores.sort_unstable();
    scores.dedup();
    scores
}
