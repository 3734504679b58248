//! Cascaded jury - tiers of juries with early-stop and escalation.

use super::tier::{TierConfig, TierPolicy};
use super::{Jury, JuryConfigError, JuryError};
use crate::ports::judge::Judge;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tribunal_domain::{JudgmentContext, Verdict};

/// A jury that evaluates through cascading tiers.
///
/// Tiers execute strictly in order; each tier is itself a [`Jury`]
/// (typically a [`SimpleJury`](super::SimpleJury), but tiers compose - a
/// tier's jury may be another cascade). A tier's [`TierPolicy`] decides
/// whether its verdict stops the cascade or escalates to the next tier,
/// based on the raw per-judge statuses inside the tier verdict. The last
/// tier always stops.
///
/// A tier whose jury fails outright contributes nothing to the trace and
/// the cascade moves on; only a failure in the final tier - which has no
/// successor to escalate to - produces an error verdict.
///
/// # Example
///
/// ```no_run
/// # use std::sync::Arc;
/// # use tribunal_application::jury::{CascadedJury, Jury, TierPolicy};
/// # use tribunal_domain::JudgmentContext;
/// # async fn demo(cheap: Arc<dyn Jury>, semantic: Arc<dyn Jury>) {
/// let cascade = CascadedJury::builder()
///     .tier("deterministic", cheap, TierPolicy::RejectOnAnyFail)
///     .tier("semantic", semantic, TierPolicy::FinalTier)
///     .build()
///     .unwrap();
///
/// let verdict = cascade
///     .vote(Arc::new(JudgmentContext::new("goal", "/tmp/ws")))
///     .await
///     .unwrap();
/// # }
/// ```
pub struct CascadedJury {
    tiers: Vec<TierConfig>,
}

impl std::fmt::Debug for CascadedJury {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CascadedJury")
            .field("tiers", &self.tiers.len())
            .finish()
    }
}

impl CascadedJury {
    /// Start building a cascade
    pub fn builder() -> CascadedJuryBuilder {
        CascadedJuryBuilder::new()
    }

    /// Build a cascade from already-constructed tiers.
    ///
    /// Fails unless there is at least one tier and the last tier uses
    /// [`TierPolicy::FinalTier`].
    pub fn from_tiers(tiers: Vec<TierConfig>) -> Result<Self, JuryConfigError> {
        let Some(last) = tiers.last() else {
            return Err(JuryConfigError::NoTiers);
        };
        if last.policy() != TierPolicy::FinalTier {
            return Err(JuryConfigError::NonFinalLastTier {
                name: last.name().to_string(),
                actual: last.policy(),
            });
        }
        Ok(Self { tiers })
    }

    /// The configured tiers, in execution order
    pub fn tiers(&self) -> &[TierConfig] {
        &self.tiers
    }
}

#[async_trait]
impl Jury for CascadedJury {
    /// Every nested jury's judges, flattened in tier order.
    fn judges(&self) -> Vec<Arc<dyn Judge>> {
        self.tiers
            .iter()
            .flat_map(|tier| tier.jury().judges())
            .collect()
    }

    async fn vote(&self, context: Arc<JudgmentContext>) -> Result<Verdict, JuryError> {
        let mut executed: Vec<Verdict> = Vec::new();
        let last_index = self.tiers.len() - 1;

        for (index, tier) in self.tiers.iter().enumerate() {
            info!(tier = %tier.name(), policy = %tier.policy(), "executing cascade tier");

            let tier_verdict = match tier.jury().vote(Arc::clone(&context)).await {
                Ok(verdict) => verdict,
                Err(err) => {
                    warn!(tier = %tier.name(), error = %err, "tier failed, escalating to next tier");
                    if index == last_index {
                        // No successor left to escalate to
                        return Ok(Verdict::error(
                            format!("final tier '{}' failed: {}", tier.name(), err),
                            executed,
                        ));
                    }
                    continue;
                }
            };

            let stop = match tier.policy() {
                TierPolicy::RejectOnAnyFail => tier_verdict.has_any_fail(),
                TierPolicy::AcceptOnAllPass => tier_verdict.all_passed(),
                TierPolicy::FinalTier => true,
            };
            debug!(
                tier = %tier.name(),
                status = %tier_verdict.status(),
                stop,
                "tier verdict recorded"
            );

            if stop {
                // The stopping tier's verdict doubles as the cascade
                // verdict, carrying the whole trace (itself included)
                let stopping = tier_verdict.clone();
                executed.push(tier_verdict);
                return Ok(stopping.with_sub_verdicts(executed));
            }
            executed.push(tier_verdict);
        }

        // Unreachable when the last tier is FinalTier, which construction
        // guarantees - fall back to the last verdict that was produced.
        match executed.last().cloned() {
            Some(stopping) => Ok(stopping.with_sub_verdicts(executed)),
            None => Err(JuryError::Execution(
                "cascade produced no tier verdict".to_string(),
            )),
        }
    }
}

/// Builder for [`CascadedJury`]. Tier structure is validated once in
/// [`build`](CascadedJuryBuilder::build), before any vote.
#[derive(Default)]
pub struct CascadedJuryBuilder {
    tiers: Vec<(String, Arc<dyn Jury>, TierPolicy)>,
}

impl CascadedJuryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tier to the cascade
    pub fn tier(mut self, name: impl Into<String>, jury: Arc<dyn Jury>, policy: TierPolicy) -> Self {
        self.tiers.push((name.into(), jury, policy));
        self
    }

    /// Validate and build the cascade
    pub fn build(self) -> Result<CascadedJury, JuryConfigError> {
        let tiers = self
            .tiers
            .into_iter()
            .map(|(name, jury, policy)| TierConfig::new(name, jury, policy))
            .collect::<Result<Vec<_>, _>>()?;
        CascadedJury::from_tiers(tiers)
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{
        ThrowingJury, always_abstain, always_fail, always_pass, context,
    };
    use super::super::simple::SimpleJury;
    use super::*;
    use crate::ports::judge::Judge;
    use tribunal_domain::{ConsensusStrategy, JudgmentStatus, MajorityStrategy};

    fn flat(judges: Vec<Box<dyn Judge>>) -> Arc<dyn Jury> {
        let mut builder = SimpleJury::builder().voting_strategy(ConsensusStrategy::new());
        for judge in judges {
            builder = builder.judge_arc(Arc::from(judge));
        }
        Arc::new(builder.sequential().build().unwrap())
    }

    fn final_flat(judges: Vec<Box<dyn Judge>>) -> Arc<dyn Jury> {
        let mut builder = SimpleJury::builder().voting_strategy(MajorityStrategy::new());
        for judge in judges {
            builder = builder.judge_arc(Arc::from(judge));
        }
        Arc::new(builder.build().unwrap())
    }

    // ==================== RejectOnAnyFail policy ====================

    #[tokio::test]
    async fn test_reject_on_any_fail_stops_on_first_failure() {
        let tier1 = flat(vec![
            Box::new(always_pass("build")),
            Box::new(always_fail("migration")),
        ]);
        let final_tier = final_flat(vec![Box::new(always_pass("semantic"))]);

        let cascade = CascadedJury::builder()
            .tier("deterministic", tier1, TierPolicy::RejectOnAnyFail)
            .tier("final", final_tier, TierPolicy::FinalTier)
            .build()
            .unwrap();

        let verdict = cascade.vote(context()).await.unwrap();

        assert_eq!(verdict.status(), JudgmentStatus::Fail);
        assert_eq!(verdict.sub_verdicts().len(), 1); // only tier 1 executed
    }

    #[tokio::test]
    async fn test_reject_on_any_fail_escalates_when_all_pass() {
        let tier1 = flat(vec![
            Box::new(always_pass("build")),
            Box::new(always_pass("migration")),
        ]);
        let final_tier = final_flat(vec![Box::new(always_fail("semantic"))]);

        let cascade = CascadedJury::builder()
            .tier("deterministic", tier1, TierPolicy::RejectOnAnyFail)
            .tier("final", final_tier, TierPolicy::FinalTier)
            .build()
            .unwrap();

        let verdict = cascade.vote(context()).await.unwrap();

        // Escalated; the final tier decides
        assert_eq!(verdict.status(), JudgmentStatus::Fail);
        assert_eq!(verdict.sub_verdicts().len(), 2);
    }

    #[tokio::test]
    async fn test_reject_policy_ignores_abstentions() {
        let tier1 = flat(vec![
            Box::new(always_pass("build")),
            Box::new(always_abstain("coverage")),
        ]);
        let final_tier = final_flat(vec![Box::new(always_pass("semantic"))]);

        let cascade = CascadedJury::builder()
            .tier("deterministic", tier1, TierPolicy::RejectOnAnyFail)
            .tier("final", final_tier, TierPolicy::FinalTier)
            .build()
            .unwrap();

        let verdict = cascade.vote(context()).await.unwrap();

        // An abstention is not a fail - no rejection, escalate to final
        assert_eq!(verdict.sub_verdicts().len(), 2);
        assert_eq!(verdict.status(), JudgmentStatus::Pass);
    }

    // ==================== AcceptOnAllPass policy ====================

    #[tokio::test]
    async fn test_accept_on_all_pass_accepts_when_all_pass() {
        let tier2 = flat(vec![
            Box::new(always_pass("imports")),
            Box::new(always_pass("annotations")),
        ]);
        let final_tier = final_flat(vec![Box::new(always_fail("semantic"))]);

        let cascade = CascadedJury::builder()
            .tier("structural", tier2, TierPolicy::AcceptOnAllPass)
            .tier("final", final_tier, TierPolicy::FinalTier)
            .build()
            .unwrap();

        let verdict = cascade.vote(context()).await.unwrap();

        // Accepted at the structural tier; the failing final tier never ran
        assert_eq!(verdict.status(), JudgmentStatus::Pass);
        assert_eq!(verdict.sub_verdicts().len(), 1);
    }

    #[tokio::test]
    async fn test_accept_on_all_pass_escalates_on_any_fail() {
        let tier2 = flat(vec![
            Box::new(always_pass("imports")),
            Box::new(always_fail("annotations")),
        ]);
        let final_tier = final_flat(vec![Box::new(always_pass("semantic"))]);

        let cascade = CascadedJury::builder()
            .tier("structural", tier2, TierPolicy::AcceptOnAllPass)
            .tier("final", final_tier, TierPolicy::FinalTier)
            .build()
            .unwrap();

        let verdict = cascade.vote(context()).await.unwrap();

        assert_eq!(verdict.status(), JudgmentStatus::Pass);
        assert_eq!(verdict.sub_verdicts().len(), 2);
    }

    #[tokio::test]
    async fn test_accept_on_all_pass_escalates_on_abstention() {
        let tier2 = flat(vec![
            Box::new(always_pass("imports")),
            Box::new(always_abstain("ast")),
        ]);
        let final_tier = final_flat(vec![Box::new(always_pass("semantic"))]);

        let cascade = CascadedJury::builder()
            .tier("structural", tier2, TierPolicy::AcceptOnAllPass)
            .tier("final", final_tier, TierPolicy::FinalTier)
            .build()
            .unwrap();

        let verdict = cascade.vote(context()).await.unwrap();

        // An abstention disqualifies "all pass"
        assert_eq!(verdict.sub_verdicts().len(), 2);
    }

    // ==================== FinalTier policy ====================

    #[tokio::test]
    async fn test_final_tier_always_produces_verdict() {
        let final_tier = final_flat(vec![Box::new(always_fail("semantic"))]);

        let cascade = CascadedJury::builder()
            .tier("semantic", final_tier, TierPolicy::FinalTier)
            .build()
            .unwrap();

        let verdict = cascade.vote(context()).await.unwrap();

        assert_eq!(verdict.status(), JudgmentStatus::Fail);
        assert_eq!(verdict.sub_verdicts().len(), 1);
    }

    #[tokio::test]
    async fn test_single_tier_cascade_exposes_individuals() {
        let only = flat(vec![
            Box::new(always_pass("judge-1")),
            Box::new(always_pass("judge-2")),
        ]);

        let cascade = CascadedJury::builder()
            .tier("only", only, TierPolicy::FinalTier)
            .build()
            .unwrap();

        let verdict = cascade.vote(context()).await.unwrap();

        assert_eq!(verdict.status(), JudgmentStatus::Pass);
        assert_eq!(verdict.individual().len(), 2);
        assert!(verdict.by_name("judge-2").is_some());
        assert_eq!(verdict.sub_verdicts().len(), 1);
    }

    // ==================== Tier tracing ====================

    #[tokio::test]
    async fn test_sub_verdicts_hold_per_tier_verdicts_in_order() {
        let tier1 = final_flat(vec![Box::new(always_pass("build"))]);
        let tier2 = flat(vec![Box::new(always_pass("imports"))]);
        let tier3 = final_flat(vec![Box::new(always_pass("semantic"))]);

        let cascade = CascadedJury::builder()
            .tier("deterministic", tier1, TierPolicy::RejectOnAnyFail)
            .tier("structural", tier2, TierPolicy::AcceptOnAllPass)
            .tier("semantic", tier3, TierPolicy::FinalTier)
            .build()
            .unwrap();

        let verdict = cascade.vote(context()).await.unwrap();

        // Tier 1 had no fail (escalate), tier 2 all passed (accept)
        assert_eq!(verdict.sub_verdicts().len(), 2);
        assert!(verdict.sub_verdicts()[0].status().is_pass());
        assert!(verdict.sub_verdicts()[1].status().is_pass());
    }

    #[tokio::test]
    async fn test_three_tier_cascade_escalates_all_the_way() {
        let tier1 = final_flat(vec![Box::new(always_pass("build"))]);
        let tier2 = flat(vec![
            Box::new(always_pass("imports")),
            Box::new(always_fail("ast")),
        ]);
        let tier3 = final_flat(vec![Box::new(always_pass("semantic"))]);

        let cascade = CascadedJury::builder()
            .tier("deterministic", tier1, TierPolicy::RejectOnAnyFail)
            .tier("structural", tier2, TierPolicy::AcceptOnAllPass)
            .tier("semantic", tier3, TierPolicy::FinalTier)
            .build()
            .unwrap();

        let verdict = cascade.vote(context()).await.unwrap();

        assert_eq!(verdict.status(), JudgmentStatus::Pass);
        assert_eq!(verdict.sub_verdicts().len(), 3);
    }

    // ==================== Error handling ====================

    #[tokio::test]
    async fn test_failing_tier_is_skipped_and_cascade_continues() {
        let final_tier = final_flat(vec![Box::new(always_pass("fallback"))]);

        let cascade = CascadedJury::builder()
            .tier("broken", Arc::new(ThrowingJury), TierPolicy::RejectOnAnyFail)
            .tier("final", final_tier, TierPolicy::FinalTier)
            .build()
            .unwrap();

        let verdict = cascade.vote(context()).await.unwrap();

        assert_eq!(verdict.status(), JudgmentStatus::Pass);
        // The broken tier produced no verdict, so it is absent from the trace
        assert_eq!(verdict.sub_verdicts().len(), 1);
    }

    #[tokio::test]
    async fn test_failing_final_tier_yields_error_verdict() {
        let cascade = CascadedJury::builder()
            .tier("final", Arc::new(ThrowingJury), TierPolicy::FinalTier)
            .build()
            .unwrap();

        let verdict = cascade.vote(context()).await.unwrap();

        assert_eq!(verdict.status(), JudgmentStatus::Error);
        assert!(verdict.aggregated().reasoning.contains("final"));
        assert!(verdict.sub_verdicts().is_empty());
    }

    #[tokio::test]
    async fn test_failing_final_tier_keeps_accumulated_trace() {
        let tier1 = final_flat(vec![Box::new(always_pass("build"))]);

        let cascade = CascadedJury::builder()
            .tier("deterministic", tier1, TierPolicy::RejectOnAnyFail)
            .tier("semantic", Arc::new(ThrowingJury), TierPolicy::FinalTier)
            .build()
            .unwrap();

        let verdict = cascade.vote(context()).await.unwrap();

        assert_eq!(verdict.status(), JudgmentStatus::Error);
        assert!(verdict.aggregated().reasoning.contains("semantic"));
        assert_eq!(verdict.sub_verdicts().len(), 1); // tier 1 still recorded
    }

    // ==================== Builder validation ====================

    #[test]
    fn test_builder_rejects_empty_cascade() {
        let err = CascadedJury::builder().build().unwrap_err();
        assert_eq!(err, JuryConfigError::NoTiers);
    }

    #[test]
    fn test_builder_rejects_non_final_last_tier() {
        let only = final_flat(vec![Box::new(always_pass("judge"))]);

        let err = CascadedJury::builder()
            .tier("only", only, TierPolicy::RejectOnAnyFail)
            .build()
            .unwrap_err();

        assert!(matches!(err, JuryConfigError::NonFinalLastTier { .. }));
    }

    #[test]
    fn test_builder_rejects_blank_tier_name() {
        let only = final_flat(vec![Box::new(always_pass("judge"))]);

        let err = CascadedJury::builder()
            .tier("", only, TierPolicy::FinalTier)
            .build()
            .unwrap_err();

        assert_eq!(err, JuryConfigError::EmptyTierName);
    }

    // ==================== Composition & introspection ====================

    #[tokio::test]
    async fn test_cascade_tier_can_itself_be_a_cascade() {
        let inner_final = final_flat(vec![Box::new(always_pass("inner"))]);
        let inner = Arc::new(
            CascadedJury::builder()
                .tier("inner-final", inner_final, TierPolicy::FinalTier)
                .build()
                .unwrap(),
        );
        let outer_final = final_flat(vec![Box::new(always_pass("outer"))]);

        let cascade = CascadedJury::builder()
            .tier("nested", inner, TierPolicy::RejectOnAnyFail)
            .tier("final", outer_final, TierPolicy::FinalTier)
            .build()
            .unwrap();

        let verdict = cascade.vote(context()).await.unwrap();

        assert_eq!(verdict.status(), JudgmentStatus::Pass);
        assert_eq!(verdict.sub_verdicts().len(), 2);
        // The nested cascade's own trace is preserved inside its tier verdict
        assert_eq!(verdict.sub_verdicts()[0].sub_verdicts().len(), 1);
    }

    #[test]
    fn test_judges_flattened_across_tiers() {
        let tier1 = final_flat(vec![
            Box::new(always_pass("j1")),
            Box::new(always_pass("j2")),
        ]);
        let tier2 = final_flat(vec![Box::new(always_pass("j3"))]);

        let cascade = CascadedJury::builder()
            .tier("t1", tier1, TierPolicy::RejectOnAnyFail)
            .tier("t2", tier2, TierPolicy::FinalTier)
            .build()
            .unwrap();

        let names: Vec<_> = cascade
            .judges()
            .iter()
            .map(|j| j.name().to_string())
            .collect();
        assert_eq!(names, vec!["j1", "j2", "j3"]);
    }
}
