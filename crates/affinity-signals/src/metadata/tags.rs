//! Tag overlap signals.
//!
//! Tags compare case-insensitively and are deduplicated on both sides before
//! counting, so `{"Python", "python"}` is a single tag.

use affinity_traits::{ContentItem, ScoringContext, Signal, text::normalized_tags};
use serde::{Deserialize, Serialize};

/// Number of distinct candidate tags also carried by the focal item.
pub(crate) fn matching_tag_count(candidate: &ContentItem, ctx: &ScoringContext<'_>) -> usize {
    let focal = ctx.focal_tags();
    if focal.is_empty() {
        return 0;
    }
    normalized_tags(&candidate.tags)
        .iter()
        .filter(|t| focal.contains(*t))
        .count()
}

/// Configuration for the tag overlap signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagOverlapConfig {
    /// Contribution per shared tag (default: 8.0)
    pub weight_per_tag: f64,
}

impl Default for TagOverlapConfig {
    fn default() -> Self {
        Self {
            weight_per_tag: 8.0,
        }
    }
}

/// Rewards each tag the candidate shares with the focal item.
///
/// # Example
///
/// ```
/// use affinity_signals::metadata::{TagOverlap, TagOverlapConfig};
/// use affinity_traits::Signal;
///
/// let signal = TagOverlap::new(TagOverlapConfig { weight_per_tag: 4.0 });
/// assert_eq!(signal.weight(), 4.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TagOverlap {
    config: TagOverlapConfig,
}

impl TagOverlap {
    /// Create a new tag overlap signal with the given configuration.
    #[must_use]
    pub const fn new(config: TagOverlapConfig) -> Self {
        Self { config }
    }
}

impl Signal for TagOverlap {
    fn name(&self) -> &str {
        "tag_overlap"
    }

    fn weight(&self) -> f64 {
        self.config.weight_per_tag
    }

    fn contribution(&self, candidate: &ContentItem, ctx: &ScoringContext<'_>) -> f64 {
        self.config.weight_per_tag * matching_tag_count(candidate, ctx) as f64
    }
}

/// Configuration for the full tag coverage bonus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullTagCoverageConfig {
    /// Bonus when every focal tag is matched (default: 5.0)
    pub bonus: f64,

    /// Focal items need strictly more tags than this to qualify (default: 1)
    pub min_focal_tags: usize,
}

impl Default for FullTagCoverageConfig {
    fn default() -> Self {
        Self {
            bonus: 5.0,
            min_focal_tags: 1,
        }
    }
}

/// Bonus for candidates carrying every tag of a multi-tag focal item.
#[derive(Debug, Clone, Default)]
pub struct FullTagCoverage {
    config: FullTagCoverageConfig,
}

impl FullTagCoverage {
    /// Create a new full coverage signal with the given configuration.
    #[must_use]
    pub const fn new(config: FullTagCoverageConfig) -> Self {
        Self { config }
    }
}

impl Signal for FullTagCoverage {
    fn name(&self) -> &str {
        "full_tag_coverage"
    }

    fn weight(&self) -> f64 {
        self.config.bonus
    }

    fn contribution(&self, candidate: &ContentItem, ctx: &ScoringContext<'_>) -> f64 {
        let focal_count = ctx.focal_tags().len();
        if focal_count > self.config.min_focal_tags
            && matching_tag_count(candidate, ctx) == focal_count
        {
            self.config.bonus
        } else {
            0.0
        }
    }
}
