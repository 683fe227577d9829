//! Signal aggregation strategies for the affinity engine.
//!
//! This crate turns the per-signal contributions of one candidate into a
//! single composite score. Two strategies are provided: a plain sum, which is
//! the reference scorer, and a weighted sum that scales individual signals
//! from configuration.
//!
//! # Examples
//!
//! ```rust
//! use affinity_combine::{Combiner, SignalContribution, SumCombiner};
//!
//! let combiner = SumCombiner;
//! let contributions = vec![
//!     SignalContribution::new("same_category", 15.0),
//!     SignalContribution::new("tag_overlap", 16.0),
//!     SignalContribution::new("full_tag_coverage", 5.0),
//! ];
//!
//! assert_eq!(combiner.combine(&contributions), 36.0);
//! ```

mod combiner;
mod sum;
mod weighted;

// Re-export main types
pub use combiner::{Combiner, SignalContribution};
pub use sum::SumCombiner;
pub use weighted::{WeightedCombiner, WeightedConfig};
