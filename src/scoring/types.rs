//! Scorer seam between classification and ranking.

use super::bonus::{BonusTable, ScoreBreakdown};
use crate::classify::PriorityClassifier;
use crate::task::Attributes;
use std::borrow::Cow;

/// Assigns a priority score to a task's attributes.
///
/// Scores are integers where **higher is higher priority**. The ranker
/// sorts by [`score`](PriorityScorer::score) and keeps the breakdown on
/// every ranked task.
///
/// # Examples
///
/// ```ignore
/// // Rank purely by deadline urgency
/// struct ByDeadline;
///
/// impl PriorityScorer for ByDeadline {
///     fn name(&self) -> &str { "ByDeadline" }
///     fn breakdown(&self, attrs: &Attributes) -> ScoreBreakdown {
///         ScoreBreakdown::flat(3 - attrs.deadline.index() as u32)
///     }
/// }
/// ```
pub trait PriorityScorer: Send + Sync {
    /// Returns the name of this scorer.
    fn name(&self) -> &str;

    /// Computes the score and its components.
    fn breakdown(&self, attributes: &Attributes) -> ScoreBreakdown;

    /// Computes the final score.
    fn score(&self, attributes: &Attributes) -> u32 {
        self.breakdown(attributes).total()
    }
}

/// Classifier base score plus the standard bonus table.
///
/// [`StandardScorer::new`] borrows [`PriorityClassifier::shared`]; only a
/// custom classifier is owned.
#[derive(Debug, Clone)]
pub struct StandardScorer {
    classifier: Cow<'static, PriorityClassifier>,
    bonuses: BonusTable,
}

impl StandardScorer {
    /// Uses the shared classifier and the standard bonuses.
    pub fn new() -> Self {
        Self {
            classifier: Cow::Borrowed(PriorityClassifier::shared()),
            bonuses: BonusTable::STANDARD,
        }
    }

    /// Uses a custom classifier with the standard bonuses.
    pub fn with_classifier(classifier: PriorityClassifier) -> Self {
        Self {
            classifier: Cow::Owned(classifier),
            bonuses: BonusTable::STANDARD,
        }
    }

    /// Replaces the bonus table.
    pub fn with_bonuses(mut self, bonuses: BonusTable) -> Self {
        self.bonuses = bonuses;
        self
    }

    /// Returns the classifier.
    pub fn classifier(&self) -> &PriorityClassifier {
        &self.classifier
    }

    /// Returns the bonus table.
    pub fn bonuses(&self) -> &BonusTable {
        &self.bonuses
    }
}

impl Default for StandardScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PriorityScorer for StandardScorer {
    fn name(&self) -> &str {
        "Standard"
    }

    fn breakdown(&self, attributes: &Attributes) -> ScoreBreakdown {
        let base = self.classifier.classify(attributes);
        self.bonuses.breakdown(base, attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::EXEMPLARS;

    #[test]
    fn test_final_score_range() {
        let scorer = StandardScorer::new();
        for attrs in Attributes::all() {
            let score = scorer.score(&attrs);
            assert!((14..=60).contains(&score), "{attrs} -> {score}");
        }
    }

    #[test]
    fn test_breakdown_base_matches_classifier() {
        let scorer = StandardScorer::new();
        for ex in &EXEMPLARS {
            let b = scorer.breakdown(&ex.attributes);
            assert_eq!(b.base, ex.base_score);
            assert_eq!(b.total(), scorer.score(&ex.attributes));
        }
    }

    #[test]
    fn test_standard_scorer_borrows_shared_classifier() {
        let scorer = StandardScorer::new();
        assert!(std::ptr::eq(scorer.classifier(), PriorityClassifier::shared()));
        let copy = scorer.clone();
        assert!(std::ptr::eq(copy.classifier(), PriorityClassifier::shared()));

        let owned = StandardScorer::with_classifier(PriorityClassifier::new());
        assert!(!std::ptr::eq(owned.classifier(), PriorityClassifier::shared()));
    }

    #[test]
    fn test_custom_bonuses() {
        let flat = BonusTable {
            task_type: [0, 0],
            deadline: [0, 0, 0],
            importance: [0, 0, 0],
            difficulty: [0, 0],
        };
        let scorer = StandardScorer::new().with_bonuses(flat);
        for ex in &EXEMPLARS {
            assert_eq!(scorer.score(&ex.attributes), ex.base_score);
        }
    }
}
