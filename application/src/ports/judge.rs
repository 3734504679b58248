//! Judge port
//!
//! Defines the interface a single evaluator implements. Concrete judges
//! (command runners, coverage parsers, LLM evaluators) live outside this
//! crate and plug in through this trait.

use async_trait::async_trait;
use thiserror::Error;
use tribunal_domain::{Judgment, JudgmentContext};

/// Errors a judge may raise for infrastructure failures.
///
/// These are reserved for conditions the jury should treat as the judge
/// itself breaking - a sandbox that will not start, an unreachable model
/// endpoint. A negative opinion about the artifact is not an error; it is
/// an `Ok` judgment with fail status.
#[derive(Error, Debug)]
pub enum JudgeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("evaluation timed out")]
    Timeout,

    #[error("evaluation failed: {0}")]
    Evaluation(String),

    #[error("{0}")]
    Other(String),
}

/// A single evaluator producing one judgment about an artifact.
///
/// # Contract
///
/// - Expected business outcomes are judgments: a failing check is
///   `Ok(Judgment::fail(..))`, an unmet precondition is
///   `Ok(Judgment::abstain(..))`. `Err` is only for infrastructure
///   failure.
/// - Implementations must be safe to invoke concurrently against a shared
///   read-only context; a judge touching shared external resources (e.g.,
///   the workspace directory) is responsible for its own locking.
/// - A judge imposing a timeout must still resolve to a terminal judgment
///   or error rather than hang; the jury never cancels a judge.
///
/// Juries defensively convert both `Err` returns and panics into
/// error-status judgments attributed to [`name`](Judge::name), so one
/// misbehaving judge never aborts a vote.
#[async_trait]
pub trait Judge: Send + Sync {
    /// Unique name of this judge within a jury, used for attribution in
    /// verdicts and logs.
    fn name(&self) -> &str;

    /// Evaluate the artifact described by the context.
    async fn evaluate(&self, context: &JudgmentContext) -> Result<Judgment, JudgeError>;
}
