//! Per-call scoring context.
//!
//! Everything that depends only on the focal item, the user history and the
//! clock is computed once per recommendation call and shared by every
//! candidate evaluation.

use std::collections::HashSet;

use crate::{
    Category, ContentItem, Timestamp, UserHistoryEntry,
    text::{normalized_tags, title_words},
};

/// Flattened view of a user's interaction history.
///
/// Holds the set of categories and the set of lower-cased tags the user has
/// interacted with. Order and multiplicity of the source entries are
/// discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryProfile {
    categories: HashSet<Category>,
    tags: HashSet<String>,
}

impl HistoryProfile {
    /// Flattens history entries into category and tag sets.
    ///
    /// # Example
    ///
    /// ```
    /// use affinity_traits::{Category, HistoryProfile, UserHistoryEntry};
    ///
    /// let history = vec![
    ///     UserHistoryEntry::new(Some(Category::Code), ["Rust"]),
    ///     UserHistoryEntry::new(None, ["rust", "WASM"]),
    /// ];
    /// let profile = HistoryProfile::from_entries(&history);
    ///
    /// assert!(profile.has_category(Category::Code));
    /// assert!(profile.has_tag("wasm"));
    /// assert_eq!(profile.tags().len(), 2);
    /// ```
    #[must_use]
    pub fn from_entries(entries: &[UserHistoryEntry]) -> Self {
        let categories = entries.iter().filter_map(|e| e.category).collect();
        let tags = normalized_tags(entries.iter().flat_map(|e| e.tags.iter()));
        Self { categories, tags }
    }

    /// Whether the user has interacted with the category.
    #[must_use]
    pub fn has_category(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    /// Whether the user has interacted with the tag. Expects a lower-cased tag.
    #[must_use]
    pub fn has_tag(&self, lowered: &str) -> bool {
        self.tags.contains(lowered)
    }

    /// Distinct categories seen.
    #[must_use]
    pub const fn categories(&self) -> &HashSet<Category> {
        &self.categories
    }

    /// Distinct lower-cased tags seen.
    #[must_use]
    pub const fn tags(&self) -> &HashSet<String> {
        &self.tags
    }

    /// Whether the history carries no category and no tag.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.tags.is_empty()
    }
}

/// Read-only inputs shared by all signals during one recommendation call.
///
/// The focal item's normalized tags and title words are precomputed here so
/// signals only pay for the candidate side.
#[derive(Debug, Clone)]
pub struct ScoringContext<'a> {
    focal: &'a ContentItem,
    focal_tags: HashSet<String>,
    focal_title_words: HashSet<String>,
    history: &'a HistoryProfile,
    now: Timestamp,
}

impl<'a> ScoringContext<'a> {
    /// Builds the context for one call.
    #[must_use]
    pub fn new(focal: &'a ContentItem, history: &'a HistoryProfile, now: Timestamp) -> Self {
        Self {
            focal,
            focal_tags: normalized_tags(&focal.tags),
            focal_title_words: focal.title.as_deref().map(title_words).unwrap_or_default(),
            history,
            now,
        }
    }

    /// The item recommendations are generated for.
    #[must_use]
    pub const fn focal(&self) -> &'a ContentItem {
        self.focal
    }

    /// Category of the focal item.
    #[must_use]
    pub const fn focal_category(&self) -> Option<Category> {
        self.focal.category
    }

    /// Lower-cased, deduplicated focal tags.
    #[must_use]
    pub const fn focal_tags(&self) -> &HashSet<String> {
        &self.focal_tags
    }

    /// Qualifying focal title words.
    #[must_use]
    pub const fn focal_title_words(&self) -> &HashSet<String> {
        &self.focal_title_words
    }

    /// The requesting user's flattened history.
    #[must_use]
    pub const fn history(&self) -> &'a HistoryProfile {
        self.history
    }

    /// The instant the call is evaluated at.
    #[must_use]
    pub const fn now(&self) -> Timestamp {
        self.now
    }
}
