//! Recommendation service: signals, combiner and ranker wired together.

use std::fmt;

use affinity_combine::{Combiner, SignalContribution, SumCombiner, WeightedCombiner};
use affinity_rank::Ranker;
use affinity_signals::registry::{default_signals, signals_with_recency};
use affinity_traits::{
    AffinityError, ContentItem, HistoryProfile, Recommender, Result, ScoredCandidate,
    ScoringContext, Signal, Timestamp, UserHistoryEntry, recommender::resolve_limit,
};
use tracing::{debug, trace};

use crate::{
    config::RecommenderConfig,
    explain::{ContributionEntry, ScoreBreakdown},
};

/// Ranks a catalog against a focal item.
///
/// The service owns its signals and combiner and holds no per-call state, so
/// one instance can serve concurrent callers.
///
/// # Example
///
/// ```rust,ignore
/// use affinity::{RecommendationService, Recommender};
///
/// let service = RecommendationService::new();
/// let top = service.recommend(&catalog, &focal, &history, now, None)?;
/// for candidate in &top {
///     println!("{} {:.2}", candidate.item.id, candidate.score);
/// }
/// ```
pub struct RecommendationService {
    signals: Vec<Box<dyn Signal>>,
    combiner: Box<dyn Combiner>,
    default_limit: usize,
}

impl RecommendationService {
    /// Service with the default signal set, plain summation and a default
    /// result size of six.
    #[must_use]
    pub fn new() -> Self {
        Self {
            signals: default_signals(),
            combiner: Box::new(SumCombiner),
            default_limit: affinity_traits::DEFAULT_LIMIT,
        }
    }

    /// Service built from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AffinityError::InvalidConfig`] if the configuration does not
    /// validate.
    pub fn from_config(config: &RecommenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            signals: signals_with_recency(config.recency()),
            combiner: Box::new(WeightedCombiner::new(config.weights.clone())),
            default_limit: config.max_results,
        })
    }

    /// Service with an explicit signal set and combiner.
    ///
    /// # Errors
    ///
    /// Returns [`AffinityError::InvalidLimit`] when `default_limit` is zero.
    pub fn with_parts(
        signals: Vec<Box<dyn Signal>>,
        combiner: Box<dyn Combiner>,
        default_limit: usize,
    ) -> Result<Self> {
        if default_limit == 0 {
            return Err(AffinityError::InvalidLimit(default_limit));
        }
        Ok(Self {
            signals,
            combiner,
            default_limit,
        })
    }

    /// Result size used when `recommend` is called without a limit.
    #[must_use]
    pub const fn default_limit(&self) -> usize {
        self.default_limit
    }

    /// The combiner in use.
    #[must_use]
    pub fn combiner(&self) -> &dyn Combiner {
        self.combiner.as_ref()
    }

    fn contributions<'s>(
        &'s self,
        candidate: &ContentItem,
        ctx: &ScoringContext<'_>,
    ) -> Vec<SignalContribution<'s>> {
        self.signals
            .iter()
            .map(|signal| SignalContribution::new(signal.name(), signal.contribution(candidate, ctx)))
            .collect()
    }

    /// Score one candidate and report every signal's contribution.
    ///
    /// The candidate is scored as-is: it is neither compared against the
    /// focal id nor filtered on positivity.
    ///
    /// # Errors
    ///
    /// Returns [`AffinityError::InvalidItem`] for a focal item with a blank
    /// id, or [`AffinityError::NonFiniteScore`] when the combiner misbehaves.
    pub fn explain(
        &self,
        candidate: &ContentItem,
        focal: &ContentItem,
        history: &[UserHistoryEntry],
        now: Timestamp,
    ) -> Result<ScoreBreakdown> {
        check_focal(focal)?;
        let profile = HistoryProfile::from_entries(history);
        let ctx = ScoringContext::new(focal, &profile, now);

        let contributions = self.contributions(candidate, &ctx);
        let total = self.combiner.combine_checked(&candidate.id, &contributions)?;

        Ok(ScoreBreakdown {
            id: candidate.id.clone(),
            contributions: contributions
                .iter()
                .map(|c| ContributionEntry {
                    signal: c.name.to_string(),
                    value: c.value,
                })
                .collect(),
            total,
        })
    }

    fn resolve(&self, limit: Option<usize>) -> Result<usize> {
        match limit {
            None => Ok(self.default_limit),
            some => resolve_limit(some),
        }
    }
}

fn check_focal(focal: &ContentItem) -> Result<()> {
    if focal.id.is_blank() {
        return Err(AffinityError::InvalidItem(
            "focal item has a blank id".to_string(),
        ));
    }
    Ok(())
}

impl Default for RecommendationService {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RecommendationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecommendationService")
            .field(
                "signals",
                &self.signals.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .field("combiner", &self.combiner.name())
            .field("default_limit", &self.default_limit)
            .finish()
    }
}

impl Recommender for RecommendationService {
    fn recommend<'a>(
        &self,
        catalog: &'a [ContentItem],
        focal: &ContentItem,
        history: &[UserHistoryEntry],
        now: Timestamp,
        limit: Option<usize>,
    ) -> Result<Vec<ScoredCandidate<'a>>> {
        check_focal(focal)?;
        let ranker = Ranker::new(self.resolve(limit)?)?;

        // History is flattened once and shared by every candidate.
        let profile = HistoryProfile::from_entries(history);
        let ctx = ScoringContext::new(focal, &profile, now);

        debug!(
            focal = %focal.id,
            catalog = catalog.len(),
            history = history.len(),
            limit = ranker.limit(),
            combiner = self.combiner.name(),
            "scoring catalog"
        );

        let scored = catalog
            .iter()
            .map(|item| {
                let score = self.score(item, &ctx)?;
                trace!(id = %item.id, score, "scored candidate");
                Ok(ScoredCandidate::new(item, score))
            })
            .collect::<Result<Vec<_>>>()?;

        let (ranked, stats) = ranker.rank(&focal.id, scored);
        debug!(
            considered = stats.considered,
            excluded_focal = stats.excluded_focal,
            non_positive = stats.non_positive,
            truncated = stats.truncated,
            returned = stats.returned,
            "ranked candidates"
        );

        Ok(ranked)
    }

    fn score(&self, candidate: &ContentItem, ctx: &ScoringContext<'_>) -> Result<f64> {
        let contributions = self.contributions(candidate, ctx);
        self.combiner.combine_checked(&candidate.id, &contributions)
    }

    fn signals(&self) -> Vec<&dyn Signal> {
        self.signals.iter().map(|signal| signal.as_ref()).collect()
    }
}
