//! User history signals.

use affinity_traits::{ContentItem, ScoringContext, Signal, text::normalized_tags};
use serde::{Deserialize, Serialize};

/// Configuration for the history category signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryCategoryConfig {
    /// Contribution when the user has seen the candidate's category (default: 3.0)
    pub weight: f64,
}

impl Default for HistoryCategoryConfig {
    fn default() -> Self {
        Self { weight: 3.0 }
    }
}

/// Rewards candidates in a category the user has interacted with.
#[derive(Debug, Clone, Default)]
pub struct HistoryCategory {
    config: HistoryCategoryConfig,
}

impl HistoryCategory {
    /// Create a new history category signal with the given configuration.
    #[must_use]
    pub const fn new(config: HistoryCategoryConfig) -> Self {
        Self { config }
    }
}

impl Signal for HistoryCategory {
    fn name(&self) -> &str {
        "history_category"
    }

    fn weight(&self) -> f64 {
        self.config.weight
    }

    fn contribution(&self, candidate: &ContentItem, ctx: &ScoringContext<'_>) -> f64 {
        match candidate.category {
            Some(category) if ctx.history().has_category(category) => self.config.weight,
            _ => 0.0,
        }
    }
}

/// Configuration for the history tags signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryTagsConfig {
    /// Contribution per candidate tag the user has seen (default: 2.0)
    pub weight_per_tag: f64,
}

impl Default for HistoryTagsConfig {
    fn default() -> Self {
        Self {
            weight_per_tag: 2.0,
        }
    }
}

/// Rewards each distinct candidate tag found in the user's history.
#[derive(Debug, Clone, Default)]
pub struct HistoryTags {
    config: HistoryTagsConfig,
}

impl HistoryTags {
    /// Create a new history tags signal with the given configuration.
    #[must_use]
    pub const fn new(config: HistoryTagsConfig) -> Self {
        Self { config }
    }
}

impl Signal for HistoryTags {
    fn name(&self) -> &str {
        "history_tags"
    }

    fn weight(&self) -> f64 {
        self.config.weight_per_tag
    }

    fn contribution(&self, candidate: &ContentItem, ctx: &ScoringContext<'_>) -> f64 {
        let history = ctx.history();
        if history.tags().is_empty() {
            return 0.0;
        }
        let seen = normalized_tags(&candidate.tags)
            .iter()
            .filter(|t| history.has_tag(t))
            .count();
        self.config.weight_per_tag * seen as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{contribution, contribution_with_history, item};
    use affinity_traits::{Category, UserHistoryEntry};

    fn history() -> Vec<UserHistoryEntry> {
        vec![
            UserHistoryEntry::new(Some(Category::Dataset), ["Python", "Open Data"]),
            UserHistoryEntry::new(Some(Category::Livre), ["SQL"]),
        ]
    }

    #[test]
    fn test_history_category_match() {
        let candidate = item(2).with_category(Category::Livre);
        let got = contribution_with_history(&HistoryCategory::default(), &candidate, &item(1), &history());
        assert_eq!(got, 3.0);

        let candidate = item(3).with_category(Category::Code);
        let got = contribution_with_history(&HistoryCategory::default(), &candidate, &item(1), &history());
        assert_eq!(got, 0.0);
    }

    #[test]
    fn test_history_category_uncategorized_candidate() {
        let got = contribution_with_history(&HistoryCategory::default(), &item(2), &item(1), &history());
        assert_eq!(got, 0.0);
    }

    #[test]
    fn test_history_tags_count() {
        let candidate = item(2).with_tags(["python", "SQL", "open data", "excel"]);
        let got = contribution_with_history(&HistoryTags::default(), &candidate, &item(1), &history());
        assert_eq!(got, 6.0);
    }

    #[test]
    fn test_history_tags_dedup_candidate() {
        let candidate = item(2).with_tags(["Python", "PYTHON"]);
        let got = contribution_with_history(&HistoryTags::default(), &candidate, &item(1), &history());
        assert_eq!(got, 2.0);
    }

    #[test]
    fn test_empty_history() {
        let candidate = item(2).with_category(Category::Livre).with_tags(["SQL"]);
        assert_eq!(contribution(&HistoryCategory::default(), &candidate, &item(1)), 0.0);
        assert_eq!(contribution(&HistoryTags::default(), &candidate, &item(1)), 0.0);
    }

    #[test]
    fn test_history_ignores_focal() {
        // History signals look at the user, not at the focal item.
        let focal = item(1).with_category(Category::Code).with_tags(["Rust"]);
        let candidate = item(2).with_category(Category::Dataset).with_tags(["python"]);
        let hist = history();
        assert_eq!(contribution_with_history(&HistoryCategory::default(), &candidate, &focal, &hist), 3.0);
        assert_eq!(contribution_with_history(&HistoryTags::default(), &candidate, &focal, &hist), 2.0);
    }
}
