//! Task set history.
//!
//! A [`History`] ranks each new batch into a [`TaskSet`], records the order
//! in which the user completes its tasks, and rates finished sets:
//!
//! - per set: [`TaskSet::accuracy`] and [`TaskSet::performance`]
//! - across sets: [`History::overall_performance`] and [`History::trend`]
//!
//! The number of stored sets is capped by [`HistoryConfig::max_sets`]
//! (default 9); [`History::reset`] clears them.

mod config;
mod session;
mod set;

pub use config::HistoryConfig;
pub use session::{History, PerformanceTrend};
pub use set::TaskSet;
