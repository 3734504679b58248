//! Judgment - the immutable output of a single judge.

use super::check::Check;
use super::score::Score;
use super::status::JudgmentStatus;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The output of one judge: status, optional score, reasoning, sub-checks,
/// and opaque metadata.
///
/// Judgments are plain values with no identity beyond their contents and are
/// never mutated after construction.
///
/// # Example
///
/// ```
/// use tribunal_domain::judgment::{Check, Judgment, JudgmentStatus, Score};
///
/// let judgment = Judgment::pass("all 42 tests green")
///     .with_score(Score::boolean(true))
///     .with_check(Check::pass("tests", "42 passed, 0 failed"));
///
/// assert_eq!(judgment.status, JudgmentStatus::Pass);
/// assert_eq!(judgment.checks.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Judgment {
    /// Outcome classification
    pub status: JudgmentStatus,
    /// Optional result representation (at most one per judgment)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
    /// Human-readable explanation of the outcome
    pub reasoning: String,
    /// Named sub-assertions, in evaluation order
    #[serde(default)]
    pub checks: Vec<Check>,
    /// Opaque key-value metadata (e.g., command output, exit codes)
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Judgment {
    /// Create a judgment with the given status and reasoning
    pub fn new(status: JudgmentStatus, reasoning: impl Into<String>) -> Self {
        Self {
            status,
            score: None,
            reasoning: reasoning.into(),
            checks: Vec::new(),
            metadata: HashMap::new(),
        }
    }

    /// Create a passing judgment
    pub fn pass(reasoning: impl Into<String>) -> Self {
        Self::new(JudgmentStatus::Pass, reasoning)
    }

    /// Create a failing judgment
    pub fn fail(reasoning: impl Into<String>) -> Self {
        Self::new(JudgmentStatus::Fail, reasoning)
    }

    /// Create an abstaining judgment - the judge declined to render an
    /// opinion because its preconditions were not met.
    pub fn abstain(reasoning: impl Into<String>) -> Self {
        Self::new(JudgmentStatus::Abstain, reasoning)
    }

    /// Create an error judgment - the judge's own execution failed. The
    /// reasoning carries the description of the underlying failure.
    pub fn error(cause: impl Into<String>) -> Self {
        Self::new(JudgmentStatus::Error, cause)
    }

    /// Attach a score
    pub fn with_score(mut self, score: Score) -> Self {
        self.score = Some(score);
        self
    }

    /// Append a single check
    pub fn with_check(mut self, check: Check) -> Self {
        self.checks.push(check);
        self
    }

    /// Append multiple checks
    pub fn with_checks(mut self, checks: impl IntoIterator<Item = Check>) -> Self {
        self.checks.extend(checks);
        self
    }

    /// Attach a metadata entry
    pub fn with_metadata(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Iterate over checks that did not hold
    pub fn failed_checks(&self) -> impl Iterator<Item = &Check> {
        self.checks.iter().filter(|c| !c.passed)
    }
}
