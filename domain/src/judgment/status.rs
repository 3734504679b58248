//! Judgment status - the outcome classification of a single evaluation.

use serde::{Deserialize, Serialize};

/// Outcome of a single judge's evaluation.
///
/// `Abstain` is an explicit non-opinion: the judge's preconditions were not
/// met (e.g., missing metadata) and it declined to evaluate. It is not a
/// failure signal and is excluded from quorum-style aggregation.
///
/// `Error` means the judge's own execution broke, which is distinct from a
/// negative opinion about the artifact under evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JudgmentStatus {
    /// The judge approved the artifact
    Pass,
    /// The judge rejected the artifact
    Fail,
    /// The judge declined to render an opinion
    Abstain,
    /// The judge itself failed to execute
    Error,
}

impl JudgmentStatus {
    /// Check if this status is a pass
    pub fn is_pass(&self) -> bool {
        matches!(self, JudgmentStatus::Pass)
    }

    /// Check if this status is a fail
    pub fn is_fail(&self) -> bool {
        matches!(self, JudgmentStatus::Fail)
    }

    /// Check if this status is an abstention
    pub fn is_abstain(&self) -> bool {
        matches!(self, JudgmentStatus::Abstain)
    }

    /// Check if this status is an execution error
    pub fn is_error(&self) -> bool {
        matches!(self, JudgmentStatus::Error)
    }

    /// Whether this status carries an actual opinion (pass or fail).
    ///
    /// Abstentions and errors are indecisive and are excluded from vote
    /// counting by all built-in strategies.
    pub fn is_decisive(&self) -> bool {
        matches!(self, JudgmentStatus::Pass | JudgmentStatus::Fail)
    }
}

impl std::fmt::Display for JudgmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JudgmentStatus::Pass => write!(f, "pass"),
            JudgmentStatus::Fail => write!(f, "fail"),
            JudgmentStatus::Abstain => write!(f, "abstain"),
            JudgmentStatus::Error => write!(f, "error"),
        }
    }
}
