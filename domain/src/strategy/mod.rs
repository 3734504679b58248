//! Voting strategies - folding many judgments into one.
//!
//! A [`VotingStrategy`] combines the individual judgments a jury collected
//! into a single aggregated judgment. Three built-in strategies cover the
//! common cases:
//!
//! - [`MajorityStrategy`] - more decisive passes than decisive fails
//! - [`ConsensusStrategy`] - unanimity among decisive judgments
//! - [`WeightedStrategy`] - weighted decisive votes against a threshold
//!
//! All built-ins exclude abstentions and errors from the count (they remain
//! visible in the verdict's individual judgments) and summarize the vote
//! breakdown in the aggregated judgment's reasoning. The trait is an open
//! extension point: custom strategies only need to implement [`aggregate`].
//!
//! [`aggregate`]: VotingStrategy::aggregate

pub mod consensus;
pub mod majority;
pub mod weighted;

// Re-export main types
pub use consensus::ConsensusStrategy;
pub use majority::MajorityStrategy;
pub use weighted::WeightedStrategy;

use crate::judgment::Judgment;
use thiserror::Error;

/// Errors from strategy construction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StrategyError {
    #[error("threshold must be within (0, 1), got {0}")]
    InvalidThreshold(f64),

    #[error("weights must be non-negative, got {0}")]
    NegativeWeight(f64),
}

/// Combines several judges' judgments into one.
///
/// Implementations must be pure over their input: same judgments in, same
/// aggregated judgment out. The aggregated judgment carries no checks of
/// its own; per-judge checks remain accessible through the verdict's
/// individual judgments.
pub trait VotingStrategy: Send + Sync {
    /// Fold the ordered judgments into a single aggregated judgment.
    fn aggregate(&self, judgments: &[Judgment]) -> Judgment;
}

impl std::fmt::Debug for dyn VotingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn VotingStrategy")
    }
}

/// Count decisive votes: (passes, fails).
pub(crate) fn count_decisive(judgments: &[Judgment]) -> (usize, usize) {
    let passes = judgments.iter().filter(|j| j.status.is_pass()).count();
    let fails = judgments.iter().filter(|j| j.status.is_fail()).count();
    (passes, fails)
}
