//! Ranker implementation.
//!
//! Provides exclusion, positivity filtering, deterministic ordering, and
//! truncation of scored candidates.

use std::cmp::Ordering;

use affinity_traits::{
    AffinityError, DEFAULT_LIMIT, Identifier, Result, ScoredCandidate,
    recommender::resolve_limit,
};
use serde::{Deserialize, Serialize};

/// Counters describing what one ranking pass discarded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankStats {
    /// Candidates received
    pub considered: usize,
    /// Entries dropped because they were the focal item
    pub excluded_focal: usize,
    /// Entries dropped because they scored zero or less
    pub non_positive: usize,
    /// Entries dropped by truncation
    pub truncated: usize,
    /// Entries returned
    pub returned: usize,
}

/// Deterministic candidate ordering: descending score, then ascending id.
///
/// Scores are compared with [`f64::total_cmp`], so the ordering is total
/// and independent of input order.
#[must_use]
pub fn compare_candidates(a: &ScoredCandidate<'_>, b: &ScoredCandidate<'_>) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.item.id.cmp(&b.item.id))
}

/// Selects the top candidates by score.
///
/// # Example
///
/// ```rust,ignore
/// use affinity_rank::Ranker;
///
/// let ranker = Ranker::default(); // keeps 6
/// let (top, stats) = ranker.rank(&focal.id, scored);
/// assert!(top.len() <= 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranker {
    limit: usize,
}

impl Ranker {
    /// Create a ranker returning at most `limit` candidates.
    ///
    /// # Errors
    ///
    /// Returns [`AffinityError::InvalidLimit`] when `limit` is zero.
    pub const fn new(limit: usize) -> Result<Self> {
        if limit == 0 {
            return Err(AffinityError::InvalidLimit(limit));
        }
        Ok(Self { limit })
    }

    /// Create a ranker from an optional caller-supplied limit.
    ///
    /// `None` selects the default of six.
    ///
    /// # Errors
    ///
    /// Returns [`AffinityError::InvalidLimit`] for `Some(0)`.
    pub fn with_limit(limit: Option<usize>) -> Result<Self> {
        resolve_limit(limit).map(|limit| Self { limit })
    }

    /// Maximum number of candidates returned.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Filter, order and truncate scored candidates.
    ///
    /// # Arguments
    ///
    /// * `focal_id` - Id of the focal item; every entry with this id is removed
    /// * `scored` - Candidates with their composite scores, in any order
    ///
    /// # Returns
    ///
    /// The ranked list and counters describing what was discarded.
    pub fn rank<'a>(
        &self,
        focal_id: &Identifier,
        scored: Vec<ScoredCandidate<'a>>,
    ) -> (Vec<ScoredCandidate<'a>>, RankStats) {
        let mut stats = RankStats {
            considered: scored.len(),
            ..RankStats::default()
        };

        let mut kept: Vec<ScoredCandidate<'a>> = Vec::with_capacity(scored.len());
        for candidate in scored {
            if &candidate.item.id == focal_id {
                stats.excluded_focal += 1;
            } else if candidate.score > 0.0 && candidate.score.is_finite() {
                kept.push(candidate);
            } else {
                stats.non_positive += 1;
            }
        }

        // Stable sort: duplicate ids with equal scores keep catalog order.
        kept.sort_by(compare_candidates);

        stats.truncated = kept.len().saturating_sub(self.limit);
        kept.truncate(self.limit);
        stats.returned = kept.len();

        (kept, stats)
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}
