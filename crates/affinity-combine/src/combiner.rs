//! Core trait definition for signal combiners.

use affinity_traits::{AffinityError, Identifier, Result};
use serde::Serialize;

/// Contribution of a single signal to one candidate's score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignalContribution<'a> {
    /// Signal name (for weighting and score breakdowns)
    pub name: &'a str,

    /// Contribution value
    pub value: f64,
}

impl<'a> SignalContribution<'a> {
    /// Pair a signal name with its contribution.
    pub const fn new(name: &'a str, value: f64) -> Self {
        Self { name, value }
    }
}

/// Combines the signal contributions of one candidate into a composite score.
///
/// Implementors define different strategies for weighting the signals.
/// All implementations must be thread-safe (Send + Sync) so a recommender can
/// be shared between callers.
///
/// # Examples
///
/// ```rust
/// use affinity_combine::{Combiner, SignalContribution};
///
/// struct MaxCombiner;
///
/// impl Combiner for MaxCombiner {
///     fn combine(&self, contributions: &[SignalContribution<'_>]) -> f64 {
///         contributions.iter().map(|c| c.value).fold(0.0, f64::max)
///     }
///
///     fn name(&self) -> &str {
///         "max"
///     }
/// }
/// ```
pub trait Combiner: Send + Sync {
    /// Combine contributions into a composite score.
    ///
    /// An empty slice combines to `0.0`.
    fn combine(&self, contributions: &[SignalContribution<'_>]) -> f64;

    /// Name of this combination strategy.
    ///
    /// Used for logging and error reporting.
    fn name(&self) -> &str;

    /// Combine and reject non-finite results.
    ///
    /// # Errors
    ///
    /// Returns [`AffinityError::NonFiniteScore`] when the composite is NaN or
    /// infinite.
    fn combine_checked(
        &self,
        id: &Identifier,
        contributions: &[SignalContribution<'_>],
    ) -> Result<f64> {
        let score = self.combine(contributions);
        if score.is_finite() {
            Ok(score)
        } else {
            Err(AffinityError::NonFiniteScore {
                id: id.to_string(),
                combiner: self.name().to_string(),
            })
        }
    }
}
