//! History configuration.

use crate::error::{EngineError, Result};
use crate::rank::RankConfig;

/// Configuration for a [`History`](super::History).
///
/// # Examples
///
/// ```
/// use u_taskrank::history::HistoryConfig;
/// use u_taskrank::rank::RankConfig;
///
/// let config = HistoryConfig::default()
///     .with_max_sets(4)
///     .with_rank(RankConfig::default().with_max_batch_size(5));
/// assert_eq!(config.max_sets, 4);
/// assert_eq!(config.rank.max_batch_size, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryConfig {
    /// Maximum number of sets kept before a reset is required.
    pub max_sets: usize,

    /// Ranking parameters applied to every new set.
    pub rank: RankConfig,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_sets: 9,
            rank: RankConfig::default(),
        }
    }
}

impl HistoryConfig {
    /// Sets the maximum number of sets.
    pub fn with_max_sets(mut self, n: usize) -> Self {
        self.max_sets = n;
        self
    }

    /// Sets the ranking configuration.
    pub fn with_rank(mut self, rank: RankConfig) -> Self {
        self.rank = rank;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_sets == 0 {
            return Err(EngineError::InvalidConfig("max_sets must be positive".into()));
        }
        self.rank.validate()
    }
}
