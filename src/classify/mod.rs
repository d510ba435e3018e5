//! Priority classifier.
//!
//! A decision tree is induced once from a labeled [`Exemplar`] table and
//! then used to map any attribute tuple to a base score (10, 30 or 50 for
//! the standard table).
//!
//! - [`EXEMPLARS`]: the 12-row standard training table
//! - [`DecisionTree`]: ID3 induction and prediction
//! - [`PriorityClassifier`]: the classification service; use
//!   [`PriorityClassifier::shared`] for the process-wide instance
//! - [`classify`]: label-based classification with the shared instance
//!
//! Every row of the training table is reproduced exactly. Tuples absent
//! from the table follow the tree to the closest matching rule; where a
//! branch is missing the node's majority score is used.

mod classifier;
mod exemplar;
mod tree;

pub use classifier::{classify, PriorityClassifier};
pub use exemplar::{Exemplar, EXEMPLARS};
pub use tree::{DecisionTree, Node, GAIN_EPSILON};
