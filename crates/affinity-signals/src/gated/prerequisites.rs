//! Prerequisite similarity signal for tutorials.

use affinity_traits::{Category, ContentItem, ScoringContext, Signal, text::contains_either};
use serde::{Deserialize, Serialize};

/// Configuration for the prerequisite similarity signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrerequisiteSimilarityConfig {
    /// Contribution when the prerequisites overlap (default: 7.0)
    pub weight: f64,
}

impl Default for PrerequisiteSimilarityConfig {
    fn default() -> Self {
        Self { weight: 7.0 }
    }
}

/// Rewards candidates whose prerequisites contain, or are contained in,
/// the focal tutorial's prerequisites.
///
/// Only active when the focal item is in [`Category::Tutoriel`]. The
/// comparison is a lower-cased substring test in either direction.
#[derive(Debug, Clone, Default)]
pub struct PrerequisiteSimilarity {
    config: PrerequisiteSimilarityConfig,
}

impl PrerequisiteSimilarity {
    /// Focal category this signal is evaluated for.
    pub const GATE: Category = Category::Tutoriel;

    /// Create a new prerequisite similarity signal with the given configuration.
    #[must_use]
    pub const fn new(config: PrerequisiteSimilarityConfig) -> Self {
        Self { config }
    }
}

impl Signal for PrerequisiteSimilarity {
    fn name(&self) -> &str {
        "prerequisite_similarity"
    }

    fn weight(&self) -> f64 {
        self.config.weight
    }

    fn contribution(&self, candidate: &ContentItem, ctx: &ScoringContext<'_>) -> f64 {
        if ctx.focal_category() == Some(Self::GATE)
            && contains_either(
                candidate.prerequisites.as_deref(),
                ctx.focal().prerequisites.as_deref(),
            )
        {
            self.config.weight
        } else {
            0.0
        }
    }
}
