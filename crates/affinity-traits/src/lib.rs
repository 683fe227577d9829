#![doc(issue_tracker_base_url = "https://github.com/factordynamics/affinity/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types and trait definitions for the affinity relevance engine.
//!
//! This crate provides the foundational abstractions shared by every other
//! affinity crate: the content data model, the user history profile, the
//! per-call scoring context, and the [`Signal`] and [`Recommender`] traits.

/// The version of the affinity-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod context;
pub mod error;
pub mod recommender;
pub mod signal;
pub mod text;
pub mod types;

// Re-exports
pub use context::{HistoryProfile, ScoringContext};
pub use error::{AffinityError, Result};
pub use recommender::{DEFAULT_LIMIT, Recommender};
pub use signal::Signal;
pub use types::{Category, ContentItem, Identifier, ScoredCandidate, Timestamp, UserHistoryEntry};
