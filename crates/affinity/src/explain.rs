//! Per-signal score breakdowns.

use affinity_traits::Identifier;
use serde::Serialize;

/// One signal's raw contribution to a candidate, before combiner scaling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContributionEntry {
    /// Signal name
    pub signal: String,
    /// Contribution of the signal
    pub value: f64,
}

/// Every signal contribution for one candidate, plus the composite score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Candidate id
    pub id: Identifier,
    /// Contributions in signal evaluation order
    pub contributions: Vec<ContributionEntry>,
    /// Composite score produced by the combiner
    pub total: f64,
}

impl ScoreBreakdown {
    /// Contribution of the named signal, if it was evaluated.
    #[must_use]
    pub fn get(&self, signal: &str) -> Option<f64> {
        self.contributions
            .iter()
            .find(|entry| entry.signal == signal)
            .map(|entry| entry.value)
    }

    /// Entries with a non-zero contribution.
    pub fn active(&self) -> impl Iterator<Item = &ContributionEntry> {
        self.contributions.iter().filter(|entry| entry.value != 0.0)
    }

    /// Whether the candidate would survive ranking.
    #[must_use]
    pub const fn is_relevant(&self) -> bool {
        self.total > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown() -> ScoreBreakdown {
        ScoreBreakdown {
            id: Identifier::Int(4),
            contributions: vec![
                ContributionEntry {
                    signal: "same_category".to_string(),
                    value: 15.0,
                },
                ContributionEntry {
                    signal: "tag_overlap".to_string(),
                    value: 0.0,
                },
            ],
            total: 15.0,
        }
    }

    #[test]
    fn test_get() {
        let b = breakdown();
        assert_eq!(b.get("same_category"), Some(15.0));
        assert_eq!(b.get("tag_overlap"), Some(0.0));
        assert_eq!(b.get("recency"), None);
    }

    #[test]
    fn test_active() {
        let b = breakdown();
        let active: Vec<_> = b.active().map(|e| e.signal.as_str()).collect();
        assert_eq!(active, vec!["same_category"]);
        assert!(b.is_relevant());
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(breakdown()).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["contributions"][0]["signal"], "same_category");
        assert_eq!(json["total"], 15.0);
    }
}
