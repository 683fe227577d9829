//! Popularity signal.

use affinity_traits::{ContentItem, ScoringContext, Signal};
use serde::{Deserialize, Serialize};

/// Configuration for the popularity signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopularityConfig {
    /// Multiplier applied to the log engagement (default: 0.5)
    pub scale: f64,

    /// How many views one like is worth (default: 2.0)
    pub like_factor: f64,
}

impl Default for PopularityConfig {
    fn default() -> Self {
        Self {
            scale: 0.5,
            like_factor: 2.0,
        }
    }
}

/// Log-damped engagement: `ln(views + like_factor * likes + 1) * scale`.
///
/// Zero for an item with no views and no likes; grows slowly afterwards.
///
/// # Example
///
/// ```
/// use affinity_signals::engagement::Popularity;
///
/// let signal = Popularity::default();
/// assert_eq!(signal.raw(0, 0), 0.0);
/// assert!((signal.raw(1, 0) - 2f64.ln() * 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Popularity {
    config: PopularityConfig,
}

impl Popularity {
    /// Create a new popularity signal with the given configuration.
    #[must_use]
    pub const fn new(config: PopularityConfig) -> Self {
        Self { config }
    }

    /// Popularity for raw counters.
    #[must_use]
    pub fn raw(&self, views: u64, likes: u64) -> f64 {
        let engagement = views as f64 + self.config.like_factor * likes as f64;
        (engagement + 1.0).ln() * self.config.scale
    }
}

impl Signal for Popularity {
    fn name(&self) -> &str {
        "popularity"
    }

    fn weight(&self) -> f64 {
        self.config.scale
    }

    fn contribution(&self, candidate: &ContentItem, _ctx: &ScoringContext<'_>) -> f64 {
        self.raw(candidate.views, candidate.likes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{contribution, item};
    use approx::assert_relative_eq;

    #[test]
    fn test_default_config() {
        let config = PopularityConfig::default();
        assert_eq!(config.scale, 0.5);
        assert_eq!(config.like_factor, 2.0);
    }

    #[test]
    fn test_zero_engagement() {
        assert_eq!(contribution(&Popularity::default(), &item(2), &item(1)), 0.0);
    }

    #[test]
    fn test_formula() {
        let candidate = item(2).with_engagement(10, 5);
        let expected = 21f64.ln() * 0.5;
        assert_relative_eq!(contribution(&Popularity::default(), &candidate, &item(1)), expected);
    }

    #[test]
    fn test_likes_weigh_double() {
        let signal = Popularity::default();
        assert_relative_eq!(signal.raw(2, 0), signal.raw(0, 1));
    }

    #[test]
    fn test_huge_counters_stay_finite() {
        let signal = Popularity::default();
        let value = signal.raw(u64::MAX, u64::MAX);
        assert!(value.is_finite());
        assert!(value > 0.0);
    }
}
