//! Accuracy and performance rating.

use super::types::{Accuracy, AccuracyOutcome, Performance};
use tracing::debug;

/// `part / whole × 100` rounded half away from zero to one decimal.
/// Defined as 0.0 when `whole` is 0.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let raw = part as f64 / whole as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}

/// Compares the predicted order with the order the user actually
/// completed tasks in.
///
/// Elements are compared position by position with `==`, so any identity
/// works: descriptions, ids, or references.
///
/// Returns [`AccuracyOutcome::Incomparable`] when the lengths differ. Two
/// empty sequences rate as 0 of 0 at 0.0%.
///
/// # Examples
///
/// ```
/// use u_taskrank::evaluation::{rate_accuracy, AccuracyOutcome};
///
/// let predicted = ["Study", "Exercise", "Movie"];
/// let observed = ["Study", "Movie", "Exercise"];
///
/// match rate_accuracy(&predicted, &observed) {
///     AccuracyOutcome::Rated(acc) => {
///         assert_eq!(acc.corrects, 1);
///         assert_eq!(acc.percentage, 33.3);
///     }
///     AccuracyOutcome::Incomparable { .. } => unreachable!(),
/// }
///
/// assert!(!rate_accuracy(&predicted, &observed[..2]).is_rated());
/// ```
pub fn rate_accuracy<P, O>(predicted: &[P], observed: &[O]) -> AccuracyOutcome
where
    P: PartialEq<O>,
{
    if predicted.len() != observed.len() {
        debug!(
            predicted = predicted.len(),
            observed = observed.len(),
            "accuracy not comparable"
        );
        return AccuracyOutcome::Incomparable {
            predicted: predicted.len(),
            observed: observed.len(),
        };
    }

    let task_count = predicted.len();
    let corrects = predicted
        .iter()
        .zip(observed)
        .filter(|(p, o)| *p == *o)
        .count();
    let accuracy = Accuracy {
        task_count,
        corrects,
        percentage: percentage(corrects, task_count),
    };
    debug!(task_count, corrects, percentage = accuracy.percentage, "rated accuracy");
    AccuracyOutcome::Rated(accuracy)
}

/// Rates the share of `all` tasks that appear in `completed`.
///
/// Only the sizes matter; ordering is ignored.
///
/// # Examples
///
/// ```
/// use u_taskrank::evaluation::rate_performance;
///
/// let perf = rate_performance(&[1, 2, 3, 4, 5], &[1, 2, 3]);
/// assert_eq!((perf.total, perf.completed, perf.percentage), (5, 3, 60.0));
///
/// let empty = rate_performance::<u8, u8>(&[], &[]);
/// assert_eq!(empty.percentage, 0.0);
/// ```
pub fn rate_performance<A, C>(all: &[A], completed: &[C]) -> Performance {
    let performance = Performance {
        total: all.len(),
        completed: completed.len(),
        percentage: percentage(completed.len(), all.len()),
    };
    debug!(
        total = performance.total,
        completed = performance.completed,
        percentage = performance.percentage,
        "rated performance"
    );
    performance
}
