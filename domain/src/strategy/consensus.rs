//! Consensus voting - unanimity among decisive judgments.

use super::{VotingStrategy, count_decisive};
use crate::judgment::{Judgment, Score};

/// Passes only when every decisive judgment passes.
///
/// A single decisive fail rejects the whole vote. Abstentions and errors
/// neither approve nor veto; if nothing decisive remains, the aggregate
/// abstains.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsensusStrategy;

impl ConsensusStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl VotingStrategy for ConsensusStrategy {
    fn aggregate(&self, judgments: &[Judgment]) -> Judgment {
        let (passes, fails) = count_decisive(judgments);

        if passes + fails == 0 {
            return Judgment::abstain(format!(
                "consensus vote: no decisive judgments among {}",
                judgments.len()
            ));
        }

        if fails > 0 {
            return Judgment::fail(format!(
                "consensus broken: {} of {} decisive judgments failed",
                fails,
                passes + fails
            ))
            .with_score(Score::boolean(false));
        }

        Judgment::pass(format!(
            "consensus reached: all {} decisive judgments passed",
            passes
        ))
        .with_score(Score::boolean(true))
    }
}
