//! Single-attribute match signals: difficulty, language and author.

use affinity_traits::{ContentItem, ScoringContext, Signal, text::eq_ignore_case};
use serde::{Deserialize, Serialize};

/// Configuration for the same-difficulty signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SameDifficultyConfig {
    /// Contribution on a match (default: 6.0)
    pub weight: f64,
}

impl Default for SameDifficultyConfig {
    fn default() -> Self {
        Self { weight: 6.0 }
    }
}

/// Rewards candidates with the focal item's difficulty level.
#[derive(Debug, Clone, Default)]
pub struct SameDifficulty {
    config: SameDifficultyConfig,
}

impl SameDifficulty {
    /// Create a new same-difficulty signal with the given configuration.
    #[must_use]
    pub const fn new(config: SameDifficultyConfig) -> Self {
        Self { config }
    }
}

impl Signal for SameDifficulty {
    fn name(&self) -> &str {
        "same_difficulty"
    }

    fn weight(&self) -> f64 {
        self.config.weight
    }

    fn contribution(&self, candidate: &ContentItem, ctx: &ScoringContext<'_>) -> f64 {
        if eq_ignore_case(
            candidate.difficulty.as_deref(),
            ctx.focal().difficulty.as_deref(),
        ) {
            self.config.weight
        } else {
            0.0
        }
    }
}

/// Configuration for the same-language signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SameLanguageConfig {
    /// Contribution on a match (default: 4.0)
    pub weight: f64,
}

impl Default for SameLanguageConfig {
    fn default() -> Self {
        Self { weight: 4.0 }
    }
}

/// Rewards candidates in the focal item's language.
#[derive(Debug, Clone, Default)]
pub struct SameLanguage {
    config: SameLanguageConfig,
}

impl SameLanguage {
    /// Create a new same-language signal with the given configuration.
    #[must_use]
    pub const fn new(config: SameLanguageConfig) -> Self {
        Self { config }
    }
}

impl Signal for SameLanguage {
    fn name(&self) -> &str {
        "same_language"
    }

    fn weight(&self) -> f64 {
        self.config.weight
    }

    fn contribution(&self, candidate: &ContentItem, ctx: &ScoringContext<'_>) -> f64 {
        if eq_ignore_case(
            candidate.language.as_deref(),
            ctx.focal().language.as_deref(),
        ) {
            self.config.weight
        } else {
            0.0
        }
    }
}

/// Configuration for the same-author signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SameAuthorConfig {
    /// Contribution on a match (default: 3.0)
    pub weight: f64,
}

impl Default for SameAuthorConfig {
    fn default() -> Self {
        Self { weight: 3.0 }
    }
}

/// Rewards candidates created by the focal item's author.
#[derive(Debug, Clone, Default)]
pub struct SameAuthor {
    config: SameAuthorConfig,
}

impl SameAuthor {
    /// Create a new same-author signal with the given configuration.
    #[must_use]
    pub const fn new(config: SameAuthorConfig) -> Self {
        Self { config }
    }
}

impl Signal for SameAuthor {
    fn name(&self) -> &str {
        "same_author"
    }

    fn weight(&self) -> f64 {
        self.config.weight
    }

    fn contribution(&self, candidate: &ContentItem, ctx: &ScoringContext<'_>) -> f64 {
        match (&candidate.author_id, &ctx.focal().author_id) {
            (Some(a), Some(b)) if a == b && !a.is_blank() => self.config.weight,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{contribution, item};

    #[test]
    fn test_default_weights() {
        assert_eq!(SameDifficulty::default().weight(), 6.0);
        assert_eq!(SameLanguage::default().weight(), 4.0);
        assert_eq!(SameAuthor::default().weight(), 3.0);
    }

    #[test]
    fn test_difficulty_case_insensitive() {
        let focal = item(1).with_difficulty("Intermédiaire");
        let candidate = item(2).with_difficulty("INTERMÉDIAIRE");
        assert_eq!(contribution(&SameDifficulty::default(), &candidate, &focal), 6.0);

        let other = item(3).with_difficulty("Avancé");
        assert_eq!(contribution(&SameDifficulty::default(), &other, &focal), 0.0);
    }

    #[test]
    fn test_language_requires_both_sides() {
        let focal = item(1).with_language("fr");
        assert_eq!(contribution(&SameLanguage::default(), &item(2), &focal), 0.0);

        let candidate = item(2).with_language("FR");
        assert_eq!(contribution(&SameLanguage::default(), &candidate, &focal), 4.0);

        let empty = item(3).with_language("");
        let focal_empty = item(4).with_language("");
        assert_eq!(contribution(&SameLanguage::default(), &empty, &focal_empty), 0.0);
    }

    #[test]
    fn test_author_match() {
        let focal = item(1).with_author(42);
        assert_eq!(contribution(&SameAuthor::default(), &item(2).with_author(42), &focal), 3.0);
        assert_eq!(contribution(&SameAuthor::default(), &item(3).with_author(7), &focal), 0.0);
        assert_eq!(contribution(&SameAuthor::default(), &item(4), &focal), 0.0);
    }

    #[test]
    fn test_author_identifier_types_do_not_mix() {
        let focal = item(1).with_author("42");
        let candidate = item(2).with_author(42);
        assert_eq!(contribution(&SameAuthor::default(), &candidate, &focal), 0.0);
    }

    #[test]
    fn test_author_missing_on_both_sides() {
        assert_eq!(contribution(&SameAuthor::default(), &item(2), &item(1)), 0.0);
    }
}
