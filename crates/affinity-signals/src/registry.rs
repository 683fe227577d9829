//! Signal registry for discovering, categorizing and instantiating signals.
//!
//! This module provides metadata and discovery functionality for all signals
//! in the affinity-signals library, plus the canonical default signal set.

use affinity_traits::{AffinityError, Result, Signal};
use serde::{Deserialize, Serialize};

use crate::{
    engagement::{HistoryCategory, HistoryTags, Popularity, Recency, RecencyConfig},
    gated::{PrerequisiteSimilarity, SameTechnology, SameTool},
    metadata::{
        FullTagCoverage, SameAuthor, SameCategory, SameDifficulty, SameLanguage, TagOverlap,
        TitleOverlap,
    },
};

/// Signal group classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SignalGroup {
    /// Descriptive field comparisons
    Metadata,
    /// Comparisons active for a single focal category
    Gated,
    /// User history, popularity and recency
    Engagement,
}

impl SignalGroup {
    /// Get a human-readable description of the group.
    #[must_use]
    pub const fn description(&self) -> &str {
        match self {
            Self::Metadata => "Category, tag, attribute and title comparisons",
            Self::Gated => "Field comparisons evaluated for one focal category only",
            Self::Engagement => "User history, popularity and recency",
        }
    }

    /// Parse a group from its lower-case name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "metadata" => Some(Self::Metadata),
            "gated" => Some(Self::Gated),
            "engagement" => Some(Self::Engagement),
            _ => None,
        }
    }
}

/// Metadata about a signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalInfo {
    /// Unique identifier for the signal
    pub name: &'static str,

    /// Group classification
    pub group: SignalGroup,

    /// Human-readable description
    pub description: &'static str,

    /// Default weight (flat, per match, or multiplier)
    pub weight: f64,
}

/// Get information about all available signals, in evaluation order.
#[must_use]
pub fn available_signals() -> Vec<SignalInfo> {
    vec![
        // Metadata signals
        SignalInfo {
            name: "same_category",
            group: SignalGroup::Metadata,
            description: "Candidate shares the focal category",
            weight: 15.0,
        },
        SignalInfo {
            name: "tag_overlap",
            group: SignalGroup::Metadata,
            description: "Per tag shared with the focal item",
            weight: 8.0,
        },
        SignalInfo {
            name: "full_tag_coverage",
            group: SignalGroup::Metadata,
            description: "Candidate carries every tag of a multi-tag focal item",
            weight: 5.0,
        },
        SignalInfo {
            name: "same_difficulty",
            group: SignalGroup::Metadata,
            description: "Same difficulty level",
            weight: 6.0,
        },
        SignalInfo {
            name: "same_language",
            group: SignalGroup::Metadata,
            description: "Same language",
            weight: 4.0,
        },
        // Gated signals
        SignalInfo {
            name: "same_technology",
            group: SignalGroup::Gated,
            description: "Same technology, when the focal item is Code",
            weight: 10.0,
        },
        SignalInfo {
            name: "same_tool",
            group: SignalGroup::Gated,
            description: "Same tool, when the focal item is a Template",
            weight: 10.0,
        },
        SignalInfo {
            name: "prerequisite_similarity",
            group: SignalGroup::Gated,
            description: "Overlapping prerequisites, when the focal item is a Tutoriel",
            weight: 7.0,
        },
        SignalInfo {
            name: "same_author",
            group: SignalGroup::Metadata,
            description: "Same author",
            weight: 3.0,
        },
        SignalInfo {
            name: "title_overlap",
            group: SignalGroup::Metadata,
            description: "Per significant title word shared with the focal item",
            weight: 1.5,
        },
        // Engagement signals
        SignalInfo {
            name: "history_category",
            group: SignalGroup::Engagement,
            description: "User has interacted with the candidate's category",
            weight: 3.0,
        },
        SignalInfo {
            name: "history_tags",
            group: SignalGroup::Engagement,
            description: "Per candidate tag found in the user's history",
            weight: 2.0,
        },
        SignalInfo {
            name: "popularity",
            group: SignalGroup::Engagement,
            description: "ln(views + 2 * likes + 1), scaled",
            weight: 0.5,
        },
        SignalInfo {
            name: "recency",
            group: SignalGroup::Engagement,
            description: "Created within the recency window",
            weight: 1.0,
        },
    ]
}

/// Get all signals in a specific group.
#[must_use]
pub fn signals_by_group(group: &SignalGroup) -> Vec<SignalInfo> {
    available_signals()
        .into_iter()
        .filter(|info| &info.group == group)
        .collect()
}

/// Get information about a specific signal by name.
#[must_use]
pub fn get_signal_info(name: &str) -> Option<SignalInfo> {
    available_signals()
        .into_iter()
        .find(|info| info.name == name)
}

/// Get all signal groups with signals.
#[must_use]
pub fn available_groups() -> Vec<SignalGroup> {
    let mut groups: Vec<_> = available_signals()
        .into_iter()
        .map(|info| info.group)
        .collect();
    groups.sort();
    groups.dedup();
    groups
}

/// Create a signal instance with its default configuration by name.
///
/// # Errors
///
/// Returns [`AffinityError::SignalNotFound`] for an unknown name.
pub fn create_signal(name: &str) -> Result<Box<dyn Signal>> {
    let signal: Box<dyn Signal> = match name {
        "same_category" => Box::new(SameCategory::default()),
        "tag_overlap" => Box::new(TagOverlap::default()),
        "full_tag_coverage" => Box::new(FullTagCoverage::default()),
        "same_difficulty" => Box::new(SameDifficulty::default()),
        "same_language" => Box::new(SameLanguage::default()),
        "same_technology" => Box::new(SameTechnology::default()),
        "same_tool" => Box::new(SameTool::default()),
        "prerequisite_similarity" => Box::new(PrerequisiteSimilarity::default()),
        "same_author" => Box::new(SameAuthor::default()),
        "title_overlap" => Box::new(TitleOverlap::default()),
        "history_category" => Box::new(HistoryCategory::default()),
        "history_tags" => Box::new(HistoryTags::default()),
        "popularity" => Box::new(Popularity::default()),
        "recency" => Box::new(Recency::default()),
        _ => {
            return Err(AffinityError::SignalNotFound(format!(
                "Unknown signal: '{name}'. Use 'affinity signals' to list available signals."
            )));
        }
    };
    Ok(signal)
}

/// Build the full default signal set, in evaluation order.
#[must_use]
pub fn default_signals() -> Vec<Box<dyn Signal>> {
    signals_with_recency(RecencyConfig::default())
}

/// Build the full signal set with a custom recency configuration.
#[must_use]
pub fn signals_with_recency(recency: RecencyConfig) -> Vec<Box<dyn Signal>> {
    available_signals()
        .into_iter()
        .filter_map(|info| match info.name {
            "recency" => Some(Box::new(Recency::new(recency.clone())) as Box<dyn Signal>),
            name => create_signal(name).ok(),
        })
        .collect()
}
