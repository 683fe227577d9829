//! Recommender configuration.

use affinity_combine::WeightedConfig;
use affinity_signals::{engagement::RecencyConfig, registry::get_signal_info};
use affinity_traits::{AffinityError, DEFAULT_LIMIT, Result};
use serde::{Deserialize, Serialize};

/// Default recency window in days.
pub const DEFAULT_RECENCY_WINDOW_DAYS: i64 = 30;

/// Tunables for a [`RecommendationService`](crate::RecommendationService).
///
/// Every field has a default, so a partial TOML or JSON document only needs
/// to name what it overrides:
///
/// ```toml
/// max_results = 10
/// recency_window_days = 14
///
/// [weights]
/// popularity = 0.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecommenderConfig {
    /// Result size used when the caller does not pass one
    pub max_results: usize,

    /// Age below which a candidate earns the recency bonus
    pub recency_window_days: i64,

    /// Per-signal multiplicative scales, keyed by signal name
    pub weights: WeightedConfig,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_LIMIT,
            recency_window_days: DEFAULT_RECENCY_WINDOW_DAYS,
            weights: WeightedConfig::default(),
        }
    }
}

impl RecommenderConfig {
    /// Check every field.
    ///
    /// # Errors
    ///
    /// Returns [`AffinityError::InvalidConfig`] when:
    /// - `max_results` is zero
    /// - `recency_window_days` is not positive
    /// - a weight names an unknown signal, or is negative or not finite
    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(AffinityError::InvalidConfig(
                "max_results must be at least 1".to_string(),
            ));
        }
        if self.recency_window_days <= 0 {
            return Err(AffinityError::InvalidConfig(format!(
                "recency_window_days must be positive, got {}",
                self.recency_window_days
            )));
        }
        if let Some(unknown) = self
            .weights
            .weights
            .keys()
            .find(|name| get_signal_info(name).is_none())
        {
            return Err(AffinityError::InvalidConfig(format!(
                "weight given for unknown signal '{unknown}'"
            )));
        }
        self.weights.validate()
    }

    /// Recency settings derived from this configuration.
    #[must_use]
    pub fn recency(&self) -> RecencyConfig {
        RecencyConfig {
            window_days: self.recency_window_days,
            ..RecencyConfig::default()
        }
    }
}
