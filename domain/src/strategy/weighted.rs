//! Weighted voting - decisive votes weighted per judge, against a threshold.

use super::{StrategyError, VotingStrategy};
use crate::judgment::{Judgment, JudgmentStatus, Score};

const DEFAULT_THRESHOLD: f64 = 0.5;

/// Weighs each decisive vote and passes when the passing weight strictly
/// exceeds `threshold` times the total decisive weight.
///
/// Weights align positionally with the jury's judge declaration order;
/// judges beyond the configured weights default to 1.0. Abstentions and
/// errors contribute no weight in either direction. The strict comparison
/// keeps the conservative tie rule: a vote landing exactly on the threshold
/// does not pass.
///
/// # Example
///
/// ```
/// use tribunal_domain::judgment::{Judgment, JudgmentStatus};
/// use tribunal_domain::strategy::{VotingStrategy, WeightedStrategy};
///
/// // Second judge counts double
/// let strategy = WeightedStrategy::new(vec![1.0, 2.0]).unwrap();
/// let judgments = vec![Judgment::pass("a"), Judgment::fail("b")];
///
/// assert_eq!(strategy.aggregate(&judgments).status, JudgmentStatus::Fail);
/// ```
#[derive(Debug, Clone)]
pub struct WeightedStrategy {
    weights: Vec<f64>,
    threshold: f64,
}

impl WeightedStrategy {
    /// Create a weighted strategy with the default threshold (0.5, i.e.
    /// strict majority by weight).
    pub fn new(weights: Vec<f64>) -> Result<Self, StrategyError> {
        Self::with_threshold(weights, DEFAULT_THRESHOLD)
    }

    /// Create a weighted strategy with an explicit threshold in (0, 1).
    pub fn with_threshold(weights: Vec<f64>, threshold: f64) -> Result<Self, StrategyError> {
        if !(threshold > 0.0 && threshold < 1.0) {
            return Err(StrategyError::InvalidThreshold(threshold));
        }
        if let Some(negative) = weights.iter().copied().find(|w| *w < 0.0) {
            return Err(StrategyError::NegativeWeight(negative));
        }
        Ok(Self { weights, threshold })
    }

    /// The configured threshold
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    fn weight_at(&self, index: usize) -> f64 {
        self.weights.get(index).copied().unwrap_or(1.0)
    }
}

impl VotingStrategy for WeightedStrategy {
    fn aggregate(&self, judgments: &[Judgment]) -> Judgment {
        let mut pass_weight = 0.0;
        let mut fail_weight = 0.0;
        let mut indecisive = 0usize;

        for (index, judgment) in judgments.iter().enumerate() {
            match judgment.status {
                JudgmentStatus::Pass => pass_weight += self.weight_at(index),
                JudgmentStatus::Fail => fail_weight += self.weight_at(index),
                JudgmentStatus::Abstain | JudgmentStatus::Error => indecisive += 1,
            }
        }

        let decisive_weight = pass_weight + fail_weight;
        if decisive_weight <= 0.0 {
            return Judgment::abstain(format!(
                "weighted vote: no decisive weight among {} judgments",
                judgments.len()
            ));
        }

        let passed = pass_weight > self.threshold * decisive_weight;
        let status = if passed {
            JudgmentStatus::Pass
        } else {
            JudgmentStatus::Fail
        };

        let score = Score::Numerical {
            value: pass_weight,
            min: Some(0.0),
            max: Some(decisive_weight),
        };

        Judgment::new(
            status,
            format!(
                "weighted vote: {:.2} pass / {:.2} fail of {:.2} decisive weight \
                 (threshold {:.2}, {} abstained or errored)",
                pass_weight, fail_weight, decisive_weight, self.threshold, indecisive
            ),
        )
        .with_score(score)
    }
}
