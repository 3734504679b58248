//! Majority voting - more passes than fails among decisive judgments.

use super::{VotingStrategy, count_decisive};
use crate::judgment::{Judgment, JudgmentStatus, Score};

/// Passes when decisive passes outnumber decisive fails.
///
/// Abstentions and errors are excluded from the count. An exact tie
/// resolves to fail - a split jury must not silently approve. When no
/// decisive judgment exists at all, the aggregate abstains.
#[derive(Debug, Clone, Copy, Default)]
pub struct MajorityStrategy;

impl MajorityStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl VotingStrategy for MajorityStrategy {
    fn aggregate(&self, judgments: &[Judgment]) -> Judgment {
        let (passes, fails) = count_decisive(judgments);
        let indecisive = judgments.len() - passes - fails;

        if passes + fails == 0 {
            return Judgment::abstain(format!(
                "majority vote: no decisive judgments among {}",
                judgments.len()
            ));
        }

        let passed = passes > fails;
        let status = if passed {
            JudgmentStatus::Pass
        } else {
            JudgmentStatus::Fail
        };

        Judgment::new(
            status,
            format!(
                "majority vote: {} pass / {} fail ({} abstained or errored)",
                passes, fails, indecisive
            ),
        )
        .with_score(Score::boolean(passed))
    }
}
