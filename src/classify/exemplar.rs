//! The labeled exemplar table that seeds the classifier.

use crate::task::{Attributes, Deadline, Difficulty, Importance, TaskType};

/// One labeled training row: an attribute tuple and its base score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exemplar {
    pub attributes: Attributes,
    pub base_score: u32,
}

impl Exemplar {
    /// Creates a labeled row.
    pub const fn new(attributes: Attributes, base_score: u32) -> Self {
        Self {
            attributes,
            base_score,
        }
    }
}

const fn row(
    task_type: TaskType,
    deadline: Deadline,
    importance: Importance,
    difficulty: Difficulty,
    base_score: u32,
) -> Exemplar {
    Exemplar::new(
        Attributes::new(task_type, deadline, importance, difficulty),
        base_score,
    )
}

use Deadline::{OneDay, ThreeDays, TwoDays};
use Difficulty::{Hard, Normal};
use Importance::{Not, Quite, Very};
use TaskType::{Personal, StudyWork};

/// Hand-assigned urgency tiers: 50 (urgent), 30 (soon), 10 (can wait).
pub static EXEMPLARS: [Exemplar; 12] = [
    row(StudyWork, OneDay, Very, Hard, 50),
    row(StudyWork, OneDay, Quite, Normal, 50),
    row(StudyWork, TwoDays, Very, Hard, 50),
    row(Personal, OneDay, Very, Normal, 50),
    row(StudyWork, ThreeDays, Very, Hard, 30),
    row(Personal, TwoDays, Quite, Hard, 30),
    row(StudyWork, ThreeDays, Not, Hard, 30),
    row(StudyWork, TwoDays, Not, Normal, 30),
    row(Personal, OneDay, Quite, Normal, 10),
    row(Personal, ThreeDays, Quite, Normal, 10),
    row(Personal, OneDay, Not, Normal, 10),
    row(Personal, ThreeDays, Not, Normal, 10),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape() {
        assert_eq!(EXEMPLARS.len(), 12);
        for ex in &EXEMPLARS {
            assert!([10, 30, 50].contains(&ex.base_score));
        }
    }

    #[test]
    fn test_rows_are_unique() {
        for (i, a) in EXEMPLARS.iter().enumerate() {
            for b in &EXEMPLARS[i + 1..] {
                assert_ne!(a.attributes, b.attributes);
            }
        }
    }
}
