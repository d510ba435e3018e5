//! Ranker configuration.

use crate::error::{EngineError, Result};

/// Default maximum number of tasks in one batch.
pub const DEFAULT_MAX_BATCH_SIZE: usize = 10;

/// Configuration for the [`Ranker`](super::Ranker).
///
/// # Examples
///
/// ```
/// use u_taskrank::rank::RankConfig;
///
/// let config = RankConfig::default().with_max_batch_size(20);
/// assert_eq!(config.max_batch_size, 20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankConfig {
    /// Largest batch `rank` accepts. Larger batches fail with
    /// [`EngineError::BatchTooLarge`].
    pub max_batch_size: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
        }
    }
}

impl RankConfig {
    /// Sets the maximum batch size.
    pub fn with_max_batch_size(mut self, n: usize) -> Self {
        self.max_batch_size = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_batch_size == 0 {
            return Err(EngineError::InvalidConfig(
                "max_batch_size must be positive".into(),
            ));
        }
        Ok(())
    }
}
