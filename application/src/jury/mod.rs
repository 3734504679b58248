//! Jury orchestration
//!
//! A [`Jury`] runs one or more judges against a shared context and produces
//! a single [`Verdict`]. Two implementations ship built in:
//!
//! - [`SimpleJury`] - a flat panel: every judge evaluates the same context
//!   (sequentially or concurrently) and a voting strategy folds the
//!   judgments into one aggregated judgment.
//! - [`CascadedJury`] - tiers of juries evaluated in order, with cheap
//!   deterministic tiers deciding early and expensive tiers only running
//!   on escalation.
//!
//! Both implement the same trait, so a cascade tier can itself be a
//! cascade - composition needs no special casing.

pub mod cascade;
pub mod simple;
pub mod tier;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-export main types
pub use cascade::CascadedJury;
pub use simple::{ExecutionMode, SimpleJury};
pub use tier::{TierConfig, TierPolicy};

use crate::ports::judge::Judge;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tribunal_domain::{JudgmentContext, Verdict};

/// Infrastructure failure of a jury vote.
///
/// The built-in juries convert judge failures into error-status judgments
/// and never return `Err` themselves; the variant exists so custom jury
/// implementations can signal that they could not produce a verdict at
/// all. A cascade treats a tier returning `Err` as "this tier could not
/// render an opinion" and escalates past it.
#[derive(Error, Debug)]
pub enum JuryError {
    #[error("jury execution failed: {0}")]
    Execution(String),
}

/// Build-time validation failures for jury construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JuryConfigError {
    #[error("jury requires at least one judge")]
    NoJudges,

    #[error("jury requires a voting strategy")]
    NoStrategy,

    #[error("duplicate judge name '{0}' in jury")]
    DuplicateJudge(String),

    #[error("cascade requires at least one tier")]
    NoTiers,

    #[error("tier name must not be empty")]
    EmptyTierName,

    #[error("last tier '{name}' must use the final-tier policy, got {actual}")]
    NonFinalLastTier { name: String, actual: TierPolicy },
}

/// A component that runs judges and produces a single verdict.
///
/// `vote` is the sole entry point external callers use. The context is
/// shared read-only across every judge involved, including the judges of
/// nested juries.
#[async_trait]
pub trait Jury: Send + Sync {
    /// Every judge this jury can consult, flattened in declaration order.
    /// Useful for introspection only; plays no role in voting.
    fn judges(&self) -> Vec<Arc<dyn Judge>>;

    /// Evaluate the context and produce a verdict.
    async fn vote(&self, context: Arc<JudgmentContext>) -> Result<Verdict, JuryError>;
}
