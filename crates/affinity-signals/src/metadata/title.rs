//! Title word overlap signal.

use affinity_traits::{ContentItem, ScoringContext, Signal, text::title_words};
use serde::{Deserialize, Serialize};

/// Configuration for the title overlap signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleOverlapConfig {
    /// Contribution per shared title word (default: 1.5)
    pub weight_per_word: f64,
}

impl Default for TitleOverlapConfig {
    fn default() -> Self {
        Self {
            weight_per_word: 1.5,
        }
    }
}

/// Rewards significant words shared between the two titles.
///
/// Titles are split on whitespace and lower-cased; only words longer than
/// three characters count, each distinct word at most once.
#[derive(Debug, Clone, Default)]
pub struct TitleOverlap {
    config: TitleOverlapConfig,
}

impl TitleOverlap {
    /// Create a new title overlap signal with the given configuration.
    #[must_use]
    pub const fn new(config: TitleOverlapConfig) -> Self {
        Self { config }
    }
}

impl Signal for TitleOverlap {
    fn name(&self) -> &str {
        "title_overlap"
    }

    fn weight(&self) -> f64 {
        self.config.weight_per_word
    }

    fn contribution(&self, candidate: &ContentItem, ctx: &ScoringContext<'_>) -> f64 {
        let focal = ctx.focal_title_words();
        let Some(title) = candidate.title.as_deref() else {
            return 0.0;
        };
        if focal.is_empty() {
            return 0.0;
        }
        let shared = title_words(title)
            .iter()
            .filter(|w| focal.contains(*w))
            .count();
        self.config.weight_per_word * shared as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{contribution, item};
    use approx::assert_relative_eq;

    #[test]
    fn test_default_config() {
        assert_eq!(TitleOverlapConfig::default().weight_per_word, 1.5);
    }

    #[test]
    fn test_shared_words() {
        let focal = item(1).with_title("Introduction to Machine Learning");
        let candidate = item(2).with_title("Advanced machine learning with Rust");
        // "machine", "learning"
        assert_relative_eq!(contribution(&TitleOverlap::default(), &candidate, &focal), 3.0);
    }

    #[test]
    fn test_short_words_ignored() {
        let focal = item(1).with_title("SQL for the web");
        let candidate = item(2).with_title("sql FOR THE WEB");
        assert_eq!(contribution(&TitleOverlap::default(), &candidate, &focal), 0.0);
    }

    #[test]
    fn test_repeated_words_count_once() {
        let focal = item(1).with_title("data data data");
        let candidate = item(2).with_title("Data DATA");
        assert_relative_eq!(contribution(&TitleOverlap::default(), &candidate, &focal), 1.5);
    }

    #[test]
    fn test_missing_titles() {
        let focal = item(1).with_title("Rust programming");
        assert_eq!(contribution(&TitleOverlap::default(), &item(2), &focal), 0.0);
        let candidate = item(3).with_title("Rust programming");
        assert_eq!(contribution(&TitleOverlap::default(), &candidate, &item(4)), 0.0);
    }
}
