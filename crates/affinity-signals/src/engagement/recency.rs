//! Recency signal.

use affinity_traits::{ContentItem, ScoringContext, Signal};
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// Configuration for the recency signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecencyConfig {
    /// Items younger than this many days are recent (default: 30)
    pub window_days: i64,

    /// Contribution for a recent item (default: 1.0)
    pub bonus: f64,
}

impl Default for RecencyConfig {
    fn default() -> Self {
        Self {
            window_days: 30,
            bonus: 1.0,
        }
    }
}

/// Bonus for candidates created less than `window_days` before `now`.
///
/// The age is a signed difference, so items dated after `now` count as
/// recent.
#[derive(Debug, Clone, Default)]
pub struct Recency {
    config: RecencyConfig,
}

impl Recency {
    /// Create a new recency signal with the given configuration.
    #[must_use]
    pub const fn new(config: RecencyConfig) -> Self {
        Self { config }
    }

    /// The recency window.
    #[must_use]
    pub fn window(&self) -> TimeDelta {
        TimeDelta::try_days(self.config.window_days).unwrap_or(TimeDelta::MAX)
    }
}

impl Signal for Recency {
    fn name(&self) -> &str {
        "recency"
    }

    fn weight(&self) -> f64 {
        self.config.bonus
    }

    fn contribution(&self, candidate: &ContentItem, ctx: &ScoringContext<'_>) -> f64 {
        let age = ctx.now().signed_duration_since(candidate.created_at);
        if age < self.window() {
            self.config.bonus
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{contribution, item, now};
    use affinity_traits::ContentItem;

    fn aged(id: i64, age: TimeDelta) -> ContentItem {
        ContentItem::new(id, now() - age)
    }

    #[test]
    fn test_default_config() {
        let config = RecencyConfig::default();
        assert_eq!(config.window_days, 30);
        assert_eq!(config.bonus, 1.0);
        assert_eq!(Recency::default().window(), TimeDelta::days(30));
    }

    #[test]
    fn test_recent_and_old() {
        let signal = Recency::default();
        assert_eq!(contribution(&signal, &aged(2, TimeDelta::days(10)), &item(1)), 1.0);
        assert_eq!(contribution(&signal, &aged(3, TimeDelta::days(40)), &item(1)), 0.0);
    }

    #[test]
    fn test_window_boundary_is_exclusive() {
        let signal = Recency::default();
        let edge = aged(2, TimeDelta::days(30));
        assert_eq!(contribution(&signal, &edge, &item(1)), 0.0);

        let just_inside = aged(3, TimeDelta::days(30) - TimeDelta::seconds(1));
        assert_eq!(contribution(&signal, &just_inside, &item(1)), 1.0);
    }

    #[test]
    fn test_future_items_are_recent() {
        let signal = Recency::default();
        let future = ContentItem::new(2, now() + TimeDelta::days(3));
        assert_eq!(contribution(&signal, &future, &item(1)), 1.0);
    }

    #[test]
    fn test_custom_window() {
        let signal = Recency::new(RecencyConfig {
            window_days: 7,
            bonus: 2.0,
        });
        assert_eq!(contribution(&signal, &aged(2, TimeDelta::days(5)), &item(1)), 2.0);
        assert_eq!(contribution(&signal, &aged(3, TimeDelta::days(10)), &item(1)), 0.0);
    }
}
