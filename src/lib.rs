//! Task prioritization and evaluation engine.
//!
//! Assigns each task a priority score, orders a batch by that score, and
//! rates the ordering against what the user actually did:
//!
//! - **Classification** ([`classify`]): an ID3 decision tree induced once
//!   from a fixed exemplar table maps a task's attributes to a base score.
//! - **Scoring** ([`scoring`]): fixed per-attribute bonuses are added to
//!   the base score.
//! - **Ranking** ([`rank`]): stable sort, highest score first; equal
//!   scores keep input order.
//! - **Evaluation** ([`evaluation`]): accuracy (predicted vs. observed
//!   completion order) and performance (completion ratio).
//! - **History** ([`history`]): successive task sets with per-set and
//!   overall ratings.
//!
//! # Architecture
//!
//! Every operation is synchronous and performs no I/O. The exemplar table
//! and the induced tree are immutable after construction; batches are
//! owned by the caller.
//!
//! # Examples
//!
//! ```
//! use u_taskrank::evaluation::rate_accuracy;
//! use u_taskrank::rank::rank;
//! use u_taskrank::task::Task;
//!
//! let tasks = vec![
//!     Task::parse("Study for exam", "Study/Work", "1 day left", "Very important", "Hard").unwrap(),
//!     Task::parse("Watch movie", "Personal", "3 days left", "Not important", "Normal").unwrap(),
//!     Task::parse("Exercise", "Personal", "2 days left", "Quite important", "Hard").unwrap(),
//! ];
//!
//! let ranked = rank(&tasks).unwrap();
//! let predicted: Vec<&str> = ranked.iter().map(|r| r.description()).collect();
//! assert_eq!(predicted, ["Study for exam", "Exercise", "Watch movie"]);
//!
//! let observed = ["Study for exam", "Watch movie", "Exercise"];
//! let accuracy = rate_accuracy(&predicted, &observed);
//! assert_eq!(accuracy.percentage(), Some(33.3));
//! ```

pub mod classify;
pub mod error;
pub mod evaluation;
pub mod history;
pub mod rank;
pub mod scoring;
pub mod task;

pub use error::{EngineError, Result};
