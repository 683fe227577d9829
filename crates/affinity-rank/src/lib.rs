//! Ranking of scored candidates for the affinity engine.
//!
//! This crate turns an unordered set of scored candidates into the final
//! recommendation list:
//! - The focal item is excluded, even when the catalog contains it
//! - Candidates scoring zero or less are dropped
//! - The rest is ordered by descending score, ties by ascending id
//! - The list is truncated to the requested size
//!
//! # Example
//!
//! ```rust,ignore
//! use affinity_rank::Ranker;
//!
//! let ranker = Ranker::new(6)?;
//! let (ranked, stats) = ranker.rank(&focal.id, scored);
//! ```

pub mod ranker;

// Re-export main types
pub use ranker::{RankStats, Ranker, compare_candidates};
