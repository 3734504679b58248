//! Cascade tier configuration
//!
//! A cascade is assembled from ordered tiers; each tier pairs a jury with
//! a [`TierPolicy`] describing how that tier's individual judgments map to
//! stop-or-escalate control flow.

use super::{Jury, JuryConfigError};
use std::sync::Arc;

/// How a tier's result maps to cascade control flow.
///
/// Escalation looks at the raw per-judge statuses inside the tier's
/// verdict, never at the tier's aggregated judgment - a tier's internal
/// voting strategy shapes what gets reported, not whether the cascade
/// escalates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierPolicy {
    /// If any judge in the tier fails, stop and reject. Otherwise
    /// escalate. Fits deterministic fail-fast gates.
    RejectOnAnyFail,

    /// If every judge in the tier passes, stop and accept. Otherwise
    /// (any fail, abstain, or error) escalate.
    AcceptOnAllPass,

    /// Always stop with this tier's verdict. Must be - and may only be -
    /// the last tier of a cascade.
    FinalTier,
}

impl std::fmt::Display for TierPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TierPolicy::RejectOnAnyFail => write!(f, "reject_on_any_fail"),
            TierPolicy::AcceptOnAllPass => write!(f, "accept_on_all_pass"),
            TierPolicy::FinalTier => write!(f, "final"),
        }
    }
}

impl std::str::FromStr for TierPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reject_on_any_fail" => Ok(TierPolicy::RejectOnAnyFail),
            "accept_on_all_pass" => Ok(TierPolicy::AcceptOnAllPass),
            "final" | "final_tier" => Ok(TierPolicy::FinalTier),
            _ => Err(format!(
                "unknown tier policy: {}. Valid: reject_on_any_fail, accept_on_all_pass, final",
                s
            )),
        }
    }
}

/// One configured tier of a cascade: a name for diagnostics, the jury
/// that evaluates it, and the policy that routes its result.
#[derive(Clone)]
pub struct TierConfig {
    name: String,
    jury: Arc<dyn Jury>,
    policy: TierPolicy,
}

impl TierConfig {
    /// Create a tier. Fails if the name is empty or whitespace-only.
    pub fn new(
        name: impl Into<String>,
        jury: Arc<dyn Jury>,
        policy: TierPolicy,
    ) -> Result<Self, JuryConfigError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(JuryConfigError::EmptyTierName);
        }
        Ok(Self { name, jury, policy })
    }

    /// The tier's diagnostic name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The jury evaluating this tier
    pub fn jury(&self) -> &Arc<dyn Jury> {
        &self.jury
    }

    /// The control flow policy for this tier
    pub fn policy(&self) -> TierPolicy {
        self.policy
    }
}

impl std::fmt::Debug for TierConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TierConfig")
            .field("name", &self.name)
            .field("policy", &self.policy)
            .field("judges", &self.jury.judges().len())
            .finish()
    }
}
