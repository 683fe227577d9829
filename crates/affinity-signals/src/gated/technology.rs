//! Same-technology signal for code items.

use affinity_traits::{Category, ContentItem, ScoringContext, Signal, text::eq_ignore_case};
use serde::{Deserialize, Serialize};

/// Configuration for the same-technology signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SameTechnologyConfig {
    /// Contribution on a match (default: 10.0)
    pub weight: f64,
}

impl Default for SameTechnologyConfig {
    fn default() -> Self {
        Self { weight: 10.0 }
    }
}

/// Rewards candidates built on the focal item's technology.
///
/// Only active when the focal item is in [`Category::Code`].
#[derive(Debug, Clone, Default)]
pub struct SameTechnology {
    config: SameTechnologyConfig,
}

impl SameTechnology {
    /// Focal category this signal is evaluated for.
    pub const GATE: Category = Category::Code;

    /// Create a new same-technology signal with the given configuration.
    #[must_use]
    pub const fn new(config: SameTechnologyConfig) -> Self {
        Self { config }
    }
}

impl Signal for SameTechnology {
    fn name(&self) -> &str {
        "same_technology"
    }

    fn weight(&self) -> f64 {
        self.config.weight
    }

    fn contribution(&self, candidate: &ContentItem, ctx: &ScoringContext<'_>) -> f64 {
        if ctx.focal_category() == Some(Self::GATE)
            && eq_ignore_case(
                candidate.technology.as_deref(),
                ctx.focal().technology.as_deref(),
            )
        {
            self.config.weight
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{contribution, item};

    #[test]
    fn test_active_for_code_focal() {
        let focal = item(1).with_category(Category::Code).with_technology("Rust");
        let candidate = item(2).with_technology("rust");
        assert_eq!(contribution(&SameTechnology::default(), &candidate, &focal), 10.0);
    }

    #[test]
    fn test_gated_for_other_categories() {
        let candidate = item(2).with_technology("Rust");
        for category in [Category::Tutoriel, Category::Template, Category::Dataset] {
            let focal = item(1).with_category(category).with_technology("Rust");
            assert_eq!(contribution(&SameTechnology::default(), &candidate, &focal), 0.0);
        }
        let uncategorized = item(1).with_technology("Rust");
        assert_eq!(contribution(&SameTechnology::default(), &candidate, &uncategorized), 0.0);
    }

    #[test]
    fn test_mismatch_or_missing() {
        let focal = item(1).with_category(Category::Code).with_technology("Rust");
        assert_eq!(
            contribution(&SameTechnology::default(), &item(2).with_technology("Go"), &focal),
            0.0
        );
        assert_eq!(contribution(&SameTechnology::default(), &item(3), &focal), 0.0);
    }
}
