//! Plain additive combination.

use crate::combiner::{Combiner, SignalContribution};

/// Sums every contribution with weight one.
///
/// This is the reference scorer: with the default signal set its output is
/// the composite relevance score.
#[derive(Debug, Clone, Copy, Default)]
pub struct SumCombiner;

impl Combiner for SumCombiner {
    fn combine(&self, contributions: &[SignalContribution<'_>]) -> f64 {
        contributions.iter().map(|c| c.value).sum()
    }

    fn name(&self) -> &str {
        "sum"
    }
}
