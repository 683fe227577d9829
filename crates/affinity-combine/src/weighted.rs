//! Per-signal weighted combination strategy.

use std::collections::BTreeMap;

use affinity_traits::{AffinityError, Result};
use serde::{Deserialize, Serialize};

use crate::combiner::{Combiner, SignalContribution};

/// Configuration for weighted combination.
///
/// Signals missing from `weights` keep a scale of `1.0`, so the default
/// configuration reproduces [`SumCombiner`](crate::SumCombiner).
/// Serialized as a bare map from signal name to scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightedConfig {
    /// Multiplicative scale per signal name
    pub weights: BTreeMap<String, f64>,
}

impl WeightedConfig {
    /// Scale applied to the named signal.
    #[must_use]
    pub fn scale(&self, signal: &str) -> f64 {
        self.weights.get(signal).copied().unwrap_or(1.0)
    }

    /// Check that every scale is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`AffinityError::InvalidConfig`] naming the first bad entry.
    pub fn validate(&self) -> Result<()> {
        for (name, &scale) in &self.weights {
            if !scale.is_finite() || scale < 0.0 {
                return Err(AffinityError::InvalidConfig(format!(
                    "weight for '{name}' must be finite and non-negative, got {scale}"
                )));
            }
        }
        Ok(())
    }
}

/// Weighted combiner that scales each contribution before summing.
///
/// Useful for tuning or muting individual signals without touching their
/// implementations.
///
/// # Examples
///
/// ```rust
/// use affinity_combine::{Combiner, SignalContribution, WeightedCombiner, WeightedConfig};
///
/// let mut config = WeightedConfig::default();
/// config.weights.insert("popularity".to_string(), 0.0);
/// let combiner = WeightedCombiner::new(config);
///
/// let contributions = vec![
///     SignalContribution::new("same_category", 15.0),
///     SignalContribution::new("popularity", 2.3),
/// ];
/// assert_eq!(combiner.combine(&contributions), 15.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WeightedCombiner {
    config: WeightedConfig,
}

impl WeightedCombiner {
    /// Create a new weighted combiner with the given configuration.
    pub const fn new(config: WeightedConfig) -> Self {
        Self { config }
    }

    /// The configured weights.
    pub const fn config(&self) -> &WeightedConfig {
        &self.config
    }
}

impl Combiner for WeightedCombiner {
    fn combine(&self, contributions: &[SignalContribution<'_>]) -> f64 {
        contributions
            .iter()
            .map(|c| c.value * self.config.scale(c.name))
            .sum()
    }

    fn name(&self) -> &str {
        "weighted_sum"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SumCombiner;
    use approx::assert_relative_eq;

    fn contributions() -> Vec<SignalContribution<'static>> {
        vec![
            SignalContribution::new("same_category", 15.0),
            SignalContribution::new("tag_overlap", 8.0),
            SignalContribution::new("recency", 1.0),
        ]
    }

    #[test]
    fn test_default_matches_sum() {
        let weighted = WeightedCombiner::default();
        assert_eq!(weighted.combine(&contributions()), SumCombiner.combine(&contributions()));
    }

    #[test]
    fn test_scaling() {
        let mut config = WeightedConfig::default();
        config.weights.insert("tag_overlap".to_string(), 0.5);
        config.weights.insert("recency".to_string(), 3.0);
        let combiner = WeightedCombiner::new(config);

        assert_relative_eq!(combiner.combine(&contributions()), 15.0 + 4.0 + 3.0);
    }

    #[test]
    fn test_unknown_names_are_ignored() {
        let mut config = WeightedConfig::default();
        config.weights.insert("not_a_signal".to_string(), 10.0);
        let combiner = WeightedCombiner::new(config);
        assert_relative_eq!(combiner.combine(&contributions()), 24.0);
    }

    #[test]
    fn test_validate() {
        let mut config = WeightedConfig::default();
        assert!(config.validate().is_ok());

        config.weights.insert("recency".to_string(), -1.0);
        assert!(matches!(config.validate(), Err(AffinityError::InvalidConfig(_))));

        config.weights.insert("recency".to_string(), f64::NAN);
        assert!(config.validate().is_err());

        config.weights.insert("recency".to_string(), 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_name() {
        assert_eq!(WeightedCombiner::default().name(), "weighted_sum");
    }
}
