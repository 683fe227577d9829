#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/affinity/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # affinity
//!
//! Deterministic content relevance ranking.
//!
//! affinity is an umbrella crate that re-exports the affinity sub-crates and
//! provides [`RecommendationService`], which wires signals, a combiner and
//! the ranker together.
//!
//! ## Quick Start
//!
//! ```
//! use affinity::prelude::*;
//! use chrono::{TimeZone, Utc};
//!
//! # fn main() -> affinity::Result<()> {
//! let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
//! let created = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
//!
//! let focal = ContentItem::new(1, created).with_category(Category::Dataset);
//! let catalog = vec![
//!     ContentItem::new(2, created).with_category(Category::Dataset),
//!     ContentItem::new(3, created).with_category(Category::Code),
//! ];
//!
//! let service = RecommendationService::new();
//! let top = service.recommend(&catalog, &focal, &[], now, None)?;
//!
//! assert_eq!(top.len(), 1);
//! assert_eq!(top[0].score, 15.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Organization
//!
//! - [`traits`] - Core types and trait definitions ([`Signal`], [`Recommender`])
//! - [`signals`] - The built-in signals and their registry
//! - [`combine`] - Strategies that merge signal contributions into a score
//! - [`rank`] - Exclusion, filtering, ordering and truncation
//!
//! ## Architecture
//!
//! 1. **Signals** each compare one aspect of a candidate with the focal item
//! 2. **Combiners** merge the per-signal contributions into a composite score
//! 3. **The ranker** drops the focal item and non-positive scores, then sorts
//!    and truncates
//! 4. **The service** runs the three steps for a whole catalog

pub mod config;
pub mod explain;
pub mod service;

/// Version information for the affinity crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Traits
// ============================================================================

/// Core types and trait definitions.
///
/// - [`Signal`] - One weighted relevance rule
/// - [`Recommender`] - Produces ranked recommendation lists
/// - [`ContentItem`], [`UserHistoryEntry`] - Input records
pub mod traits {
    pub use affinity_traits::*;
}

pub use affinity_traits::{
    AffinityError, Category, ContentItem, HistoryProfile, Identifier, Recommender, Result,
    ScoredCandidate, ScoringContext, Signal, Timestamp, UserHistoryEntry,
};

// ============================================================================
// Signals
// ============================================================================

/// Built-in signals.
///
/// Signals are grouped as:
///
/// - **Metadata**: category, tags, difficulty, language, author, title
/// - **Gated**: technology, tool, prerequisites, each active for one focal
///   category only
/// - **Engagement**: user history, popularity, recency
///
/// # Example
///
/// ```
/// use affinity::signals::registry::{available_signals, create_signal};
///
/// assert_eq!(available_signals().len(), 14);
/// assert!(create_signal("same_category").is_ok());
/// ```
pub mod signals {
    pub use affinity_signals::*;
}

// ============================================================================
// Combination
// ============================================================================

/// Signal combination strategies.
///
/// - [`SumCombiner`] - Adds every contribution; the reference scorer
/// - [`WeightedCombiner`] - Scales contributions per signal before adding
pub mod combine {
    pub use affinity_combine::*;
}

pub use affinity_combine::{Combiner, SumCombiner, WeightedCombiner, WeightedConfig};

// ============================================================================
// Ranking
// ============================================================================

/// Candidate ranking.
pub mod rank {
    pub use affinity_rank::*;
}

pub use affinity_rank::{RankStats, Ranker};

// ============================================================================
// Service
// ============================================================================

pub use config::RecommenderConfig;
pub use explain::{ContributionEntry, ScoreBreakdown};
pub use service::RecommendationService;

/// Rank `catalog` for `focal` with the default service.
///
/// Shorthand for `RecommendationService::new().recommend(...)`.
///
/// # Errors
///
/// See [`Recommender::recommend`].
pub fn recommend<'a>(
    catalog: &'a [ContentItem],
    focal: &ContentItem,
    history: &[UserHistoryEntry],
    now: Timestamp,
    limit: Option<usize>,
) -> Result<Vec<ScoredCandidate<'a>>> {
    RecommendationService::new().recommend(catalog, focal, history, now, limit)
}

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits.
///
/// ```
/// use affinity::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        AffinityError, Category, Combiner, ContentItem, Identifier, RecommendationService,
        Recommender, RecommenderConfig, Result, ScoreBreakdown, ScoredCandidate, Signal,
        Timestamp, UserHistoryEntry,
    };
}
