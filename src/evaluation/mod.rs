//! Retrospective evaluation of a ranking.
//!
//! Two independent measures:
//!
//! - **Accuracy** ([`rate_accuracy`]): how many positions of the predicted
//!   order match the order the user actually completed tasks in. Only
//!   defined when both sequences have the same length.
//! - **Performance** ([`rate_performance`]): the share of a batch that was
//!   completed, regardless of order.
//!
//! Percentages are rounded to one decimal place.

mod rate;
mod types;

pub use rate::{percentage, rate_accuracy, rate_performance};
pub use types::{Accuracy, AccuracyOutcome, Grade, Performance};
