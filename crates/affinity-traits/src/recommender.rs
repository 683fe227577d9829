//! Recommender trait for producing ranked recommendation lists.
//!
//! This module defines the `Recommender` trait, which combines a set of
//! signals into a composite score per candidate and returns the best
//! candidates for a focal item.

use crate::{
    AffinityError, ContentItem, Result, ScoredCandidate, ScoringContext, Signal, Timestamp,
    UserHistoryEntry,
};

/// Number of recommendations returned when the caller does not ask for a
/// specific size.
pub const DEFAULT_LIMIT: usize = 6;

/// Resolves a caller-supplied result size.
///
/// `None` selects [`DEFAULT_LIMIT`]; zero is rejected.
///
/// # Errors
///
/// Returns [`AffinityError::InvalidLimit`] when `limit` is `Some(0)`.
///
/// # Example
///
/// ```
/// use affinity_traits::recommender::resolve_limit;
///
/// assert_eq!(resolve_limit(None).unwrap(), 6);
/// assert_eq!(resolve_limit(Some(3)).unwrap(), 3);
/// assert!(resolve_limit(Some(0)).is_err());
/// ```
pub const fn resolve_limit(limit: Option<usize>) -> Result<usize> {
    match limit {
        None => Ok(DEFAULT_LIMIT),
        Some(0) => Err(AffinityError::InvalidLimit(0)),
        Some(k) => Ok(k),
    }
}

/// A recommender that ranks catalog items for a focal item.
///
/// Implementations score every candidate independently, drop the focal item
/// and every non-positive score, and return at most `limit` candidates in
/// descending score order with ties broken by ascending id.
///
/// The current instant is always supplied by the caller; implementations
/// must not read the wall clock.
pub trait Recommender: Send + Sync {
    /// Produces the ranked recommendation list.
    ///
    /// # Arguments
    ///
    /// * `catalog` - Candidate items; may contain the focal item itself
    /// * `focal` - The item recommendations are generated for
    /// * `history` - The requesting user's prior interactions, possibly empty
    /// * `now` - The instant used for recency
    /// * `limit` - Maximum result size, `None` for the implementation default
    ///   (normally [`DEFAULT_LIMIT`])
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `limit` is `Some(0)`
    /// - The focal item has a blank id
    /// - A combiner produces a non-finite score
    ///
    /// An empty catalog, or a catalog where nothing scores above zero, is
    /// not an error and yields an empty list.
    fn recommend<'a>(
        &self,
        catalog: &'a [ContentItem],
        focal: &ContentItem,
        history: &[UserHistoryEntry],
        now: Timestamp,
        limit: Option<usize>,
    ) -> Result<Vec<ScoredCandidate<'a>>>;

    /// Computes the composite score of one candidate.
    ///
    /// # Errors
    ///
    /// Returns an error if the composite score is not finite.
    fn score(&self, candidate: &ContentItem, ctx: &ScoringContext<'_>) -> Result<f64>;

    /// Returns references to the signals used by this recommender.
    fn signals(&self) -> Vec<&dyn Signal>;
}
