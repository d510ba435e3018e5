//! Evaluation results.

use std::fmt;

/// Coarse quality band for a percentage.
///
/// - `High`: 80% and above
/// - `Medium`: 50% up to 80%
/// - `Low`: below 50%
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Grade {
    High,
    Medium,
    Low,
}

impl Grade {
    /// Maps a percentage to its band.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            Grade::High
        } else if percentage >= 50.0 {
            Grade::Medium
        } else {
            Grade::Low
        }
    }
}

/// Position-for-position agreement between predicted and observed order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Accuracy {
    /// Number of positions compared.
    pub task_count: usize,
    /// Positions where prediction and observation agree.
    pub corrects: usize,
    /// `corrects / task_count × 100`, rounded to one decimal.
    pub percentage: f64,
}

impl Accuracy {
    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.percentage)
    }
}

/// Result of [`rate_accuracy`](super::rate_accuracy).
///
/// Accuracy only exists when every predicted task has been resolved, so
/// callers must branch on the variant before reading a percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccuracyOutcome {
    Rated(Accuracy),
    /// The sequences have different lengths and cannot be compared.
    Incomparable { predicted: usize, observed: usize },
}

impl AccuracyOutcome {
    /// Whether an accuracy value was computed.
    pub fn is_rated(&self) -> bool {
        matches!(self, AccuracyOutcome::Rated(_))
    }

    /// The accuracy, if rated.
    pub fn rated(&self) -> Option<&Accuracy> {
        match self {
            AccuracyOutcome::Rated(a) => Some(a),
            AccuracyOutcome::Incomparable { .. } => None,
        }
    }

    /// The accuracy percentage, if rated.
    pub fn percentage(&self) -> Option<f64> {
        self.rated().map(|a| a.percentage)
    }
}

impl fmt::Display for AccuracyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccuracyOutcome::Rated(a) => write!(
                f,
                "{} of {} tasks in predicted order ({:.1}%)",
                a.corrects, a.task_count, a.percentage
            ),
            AccuracyOutcome::Incomparable { .. } => {
                f.write_str("Cannot rate accuracy due to tasks not fully completed")
            }
        }
    }
}

/// Share of a batch that was completed, regardless of order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Performance {
    pub total: usize,
    pub completed: usize,
    /// `completed / total × 100`, rounded to one decimal; 0.0 when
    /// `total` is 0.
    pub percentage: f64,
}

impl Performance {
    /// Number of tasks not completed.
    pub fn incomplete(&self) -> usize {
        self.total.saturating_sub(self.completed)
    }

    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.percentage)
    }
}

impl fmt::Display for Performance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} tasks completed ({:.1}%)",
            self.completed, self.total, self.percentage
        )
    }
}
