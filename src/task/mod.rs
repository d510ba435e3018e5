//! Task records and their categorical attributes.
//!
//! A task is a free-text description plus four attributes, each drawn
//! from a closed set of values:
//!
//! | Attribute | Values |
//! |---|---|
//! | type | Study/Work, Personal |
//! | deadline | 1 day left, 2 days left, 3 days left |
//! | importance | Very important, Quite important, Not important |
//! | difficulty | Hard, Normal |
//!
//! [`TaskBatch`] collects tasks for one set and rejects empty or
//! duplicate descriptions.

mod batch;
mod types;

pub use batch::TaskBatch;
pub use types::{
    Attribute, Attributes, Categorical, Deadline, Difficulty, Importance, Task, TaskType,
};
