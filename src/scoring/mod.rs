//! Final score computation.
//!
//! The final score of a task is its classifier base score plus one bonus
//! per attribute:
//!
//! | Attribute | Value | Bonus |
//! |---|---|---|
//! | type | Personal / Study/Work | +1 / +2 |
//! | deadline | 3 / 2 / 1 days left | +1 / +2 / +3 |
//! | importance | Not / Quite / Very important | +1 / +2 / +3 |
//! | difficulty | Normal / Hard | +1 / +2 |
//!
//! With base scores in {10, 30, 50} the final score lies in [14, 60].
//!
//! [`PriorityScorer`] is the trait the ranker scores through;
//! [`StandardScorer`] is classifier + [`BonusTable::STANDARD`].

mod bonus;
mod types;

pub use bonus::{augment, BonusTable, ScoreBreakdown};
pub use types::{PriorityScorer, StandardScorer};
