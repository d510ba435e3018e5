//! Task ranking.
//!
//! [`Ranker`] scores every task of a batch through a
//! [`PriorityScorer`](crate::scoring::PriorityScorer) and orders the batch
//! highest score first. The sort is stable: tasks with equal scores keep
//! their input order. Ranking is deterministic, so ranking the same batch
//! twice yields the same sequence.
//!
//! Batches larger than [`RankConfig::max_batch_size`] (default
//! [`DEFAULT_MAX_BATCH_SIZE`]) are rejected.

mod config;
mod engine;
mod types;

pub use config::{RankConfig, DEFAULT_MAX_BATCH_SIZE};
pub use engine::{rank, Ranker};
pub use types::RankedTask;
