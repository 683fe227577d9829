//! Same-category signal.

use affinity_traits::{ContentItem, ScoringContext, Signal};
use serde::{Deserialize, Serialize};

/// Configuration for the same-category signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SameCategoryConfig {
    /// Contribution when both items share a category (default: 15.0)
    pub weight: f64,
}

impl Default for SameCategoryConfig {
    fn default() -> Self {
        Self { weight: 15.0 }
    }
}

/// Rewards candidates in the focal item's category.
///
/// Contributes nothing when either category is absent.
///
/// # Example
///
/// ```
/// use affinity_signals::metadata::SameCategory;
/// use affinity_traits::Signal;
///
/// let signal = SameCategory::default();
/// assert_eq!(signal.weight(), 15.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SameCategory {
    config: SameCategoryConfig,
}

impl SameCategory {
    /// Create a new same-category signal with the given configuration.
    #[must_use]
    pub const fn new(config: SameCategoryConfig) -> Self {
        Self { config }
    }
}

impl Signal for SameCategory {
    fn name(&self) -> &str {
        "same_category"
    }

    fn weight(&self) -> f64 {
        self.config.weight
    }

    fn contribution(&self, candidate: &ContentItem, ctx: &ScoringContext<'_>) -> f64 {
        match (candidate.category, ctx.focal_category()) {
            (Some(a), Some(b)) if a == b => self.config.weight,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{contribution, item};
    use affinity_traits::Category;

    #[test]
    fn test_default_config() {
        let config = SameCategoryConfig::default();
        assert_eq!(config.weight, 15.0);
    }

    #[test]
    fn test_matching_category() {
        let signal = SameCategory::default();
        let focal = item(1).with_category(Category::Dataset);
        let candidate = item(2).with_category(Category::Dataset);
        assert_eq!(contribution(&signal, &candidate, &focal), 15.0);
    }

    #[test]
    fn test_different_category() {
        let signal = SameCategory::default();
        let focal = item(1).with_category(Category::Dataset);
        let candidate = item(2).with_category(Category::Code);
        assert_eq!(contribution(&signal, &candidate, &focal), 0.0);
    }

    #[test]
    fn test_missing_category_on_either_side() {
        let signal = SameCategory::default();
        assert_eq!(contribution(&signal, &item(2), &item(1)), 0.0);

        let focal = item(1).with_category(Category::Livre);
        assert_eq!(contribution(&signal, &item(2), &focal), 0.0);
        assert_eq!(contribution(&signal, &focal, &item(2)), 0.0);
    }

    #[test]
    fn test_custom_weight() {
        let signal = SameCategory::new(SameCategoryConfig { weight: 2.0 });
        let focal = item(1).with_category(Category::Autre);
        let candidate = item(2).with_category(Category::Autre);
        assert_eq!(contribution(&signal, &candidate, &focal), 2.0);
    }
}
