//! Additive per-attribute bonuses.

use crate::task::{Attributes, Categorical};

/// Bonus points per attribute value, indexed by [`Categorical::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BonusTable {
    /// Study/Work, Personal.
    pub task_type: [u32; 2],
    /// 1, 2, 3 days left.
    pub deadline: [u32; 3],
    /// Very, Quite, Not important.
    pub importance: [u32; 3],
    /// Hard, Normal.
    pub difficulty: [u32; 2],
}

impl BonusTable {
    /// The fixed bonus table: more urgent values earn more points.
    pub const STANDARD: BonusTable = BonusTable {
        task_type: [2, 1],
        deadline: [3, 2, 1],
        importance: [3, 2, 1],
        difficulty: [2, 1],
    };

    /// Breaks the score for `attributes` down into base and bonuses.
    pub fn breakdown(&self, base: u32, attributes: &Attributes) -> ScoreBreakdown {
        ScoreBreakdown {
            base,
            type_bonus: self.task_type[attributes.task_type.index()],
            deadline_bonus: self.deadline[attributes.deadline.index()],
            importance_bonus: self.importance[attributes.importance.index()],
            difficulty_bonus: self.difficulty[attributes.difficulty.index()],
        }
    }

    /// Smallest and largest bonus sum this table can produce.
    pub fn bonus_range(&self) -> (u32, u32) {
        fn min(v: &[u32]) -> u32 {
            v.iter().copied().min().unwrap_or(0)
        }
        fn max(v: &[u32]) -> u32 {
            v.iter().copied().max().unwrap_or(0)
        }
        (
            min(&self.task_type) + min(&self.deadline) + min(&self.importance) + min(&self.difficulty),
            max(&self.task_type) + max(&self.deadline) + max(&self.importance) + max(&self.difficulty),
        )
    }
}

impl Default for BonusTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// A final score together with the parts it was summed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBreakdown {
    pub base: u32,
    pub type_bonus: u32,
    pub deadline_bonus: u32,
    pub importance_bonus: u32,
    pub difficulty_bonus: u32,
}

impl ScoreBreakdown {
    /// A breakdown with no bonuses.
    pub fn flat(score: u32) -> Self {
        Self {
            base: score,
            type_bonus: 0,
            deadline_bonus: 0,
            importance_bonus: 0,
            difficulty_bonus: 0,
        }
    }

    /// Sum of the four bonuses.
    pub fn bonus(&self) -> u32 {
        self.type_bonus + self.deadline_bonus + self.importance_bonus + self.difficulty_bonus
    }

    /// Base score plus bonuses.
    pub fn total(&self) -> u32 {
        self.base + self.bonus()
    }
}

/// Adds the standard bonuses to `base`.
///
/// # Examples
///
/// ```
/// use u_taskrank::scoring::augment;
/// use u_taskrank::task::Attributes;
///
/// let attrs = Attributes::parse("Personal", "3 days left", "Not important", "Normal").unwrap();
/// assert_eq!(augment(10, &attrs), 14);
/// ```
pub fn augment(base: u32, attributes: &Attributes) -> u32 {
    BonusTable::STANDARD.breakdown(base, attributes).total()
}
