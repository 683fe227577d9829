//! Signal implementations for the affinity relevance engine.
//!
//! This crate provides the concrete signals across three groups:
//! - Metadata: category, tags, difficulty, language, author, and title overlap
//! - Gated: technology, tool, and prerequisites, each only evaluated for one
//!   focal category
//! - Engagement: user history, popularity, and recency
//!
//! Each signal produces a non-negative contribution; the composite score is
//! their sum.
//!
//! # Example
//!
//! ```
//! use affinity_signals::metadata::TagOverlap;
//! use affinity_signals::registry::{available_signals, default_signals};
//!
//! // Create a signal with default configuration
//! let signal = TagOverlap::default();
//!
//! // Discover available signals
//! let signals = available_signals();
//! assert_eq!(signals.len(), default_signals().len());
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod engagement;
pub mod gated;
pub mod metadata;
pub mod registry;

// Re-export key types
pub use registry::{SignalGroup, SignalInfo, create_signal, default_signals};
