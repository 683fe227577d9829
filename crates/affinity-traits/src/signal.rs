//! Signal trait for scoring candidates.
//!
//! This module defines the `Signal` trait, the core abstraction for computing
//! one independent relevance contribution of a candidate with respect to a
//! focal item. A composite score is the combination of many signals; signals
//! never observe each other's results.

use crate::{ContentItem, ScoringContext};

/// A relevance signal that scores one candidate.
///
/// Implementations must be pure: the same candidate and context always yield
/// the same contribution. They should be thread-safe (`Send + Sync`) so a
/// signal set can be shared across concurrent calls.
///
/// # Contributions
///
/// A contribution is a finite, non-negative number. A signal whose inputs are
/// missing (absent optional field, gating condition not met) contributes
/// `0.0` rather than failing.
///
/// # Example
///
/// ```
/// use affinity_traits::{ContentItem, ScoringContext, Signal};
///
/// struct HasTitle;
///
/// impl Signal for HasTitle {
///     fn name(&self) -> &str {
///         "has_title"
///     }
///
///     fn weight(&self) -> f64 {
///         1.0
///     }
///
///     fn contribution(&self, candidate: &ContentItem, _ctx: &ScoringContext<'_>) -> f64 {
///         if candidate.title.is_some() { self.weight() } else { 0.0 }
///     }
/// }
/// ```
pub trait Signal: Send + Sync {
    /// Returns the name of this signal.
    ///
    /// The name should be unique and descriptive, as it's used for
    /// identification in logging, score breakdowns, and weight configuration.
    fn name(&self) -> &str;

    /// Returns the base weight of this signal.
    ///
    /// For flag signals this is the whole contribution; for counting signals
    /// it is the contribution per match; for continuous signals it is the
    /// multiplier applied to the raw measurement.
    fn weight(&self) -> f64;

    /// Computes the contribution of `candidate` given the call context.
    fn contribution(&self, candidate: &ContentItem, ctx: &ScoringContext<'_>) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HistoryProfile, Timestamp};
    use chrono::{TimeZone, Utc};

    struct TestSignal {
        name: String,
        weight: f64,
    }

    impl Signal for TestSignal {
        fn name(&self) -> &str {
            &self.name
        }

        fn weight(&self) -> f64 {
            self.weight
        }

        fn contribution(&self, candidate: &ContentItem, ctx: &ScoringContext<'_>) -> f64 {
            if candidate.author_id.is_some() && candidate.author_id == ctx.focal().author_id {
                self.weight
            } else {
                0.0
            }
        }
    }

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_signal_name_and_weight() {
        let signal = TestSignal {
            name: "test_signal".to_string(),
            weight: 2.5,
        };
        assert_eq!(signal.name(), "test_signal");
        assert_eq!(signal.weight(), 2.5);
    }

    #[test]
    fn test_signal_contribution() {
        let signal = TestSignal {
            name: "same_author".to_string(),
            weight: 3.0,
        };
        let focal = ContentItem::new(1, now()).with_author("alice");
        let same = ContentItem::new(2, now()).with_author("alice");
        let other = ContentItem::new(3, now()).with_author("bob");

        let history = HistoryProfile::default();
        let ctx = ScoringContext::new(&focal, &history, now());

        assert_eq!(signal.contribution(&same, &ctx), 3.0);
        assert_eq!(signal.contribution(&other, &ctx), 0.0);
    }

    #[test]
    fn test_signal_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Box<dyn Signal>>();
    }
}
