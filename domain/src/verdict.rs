//! Verdict - the aggregated opinion of a jury plus its full audit trail.

use crate::judgment::{Judgment, JudgmentStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The output of a jury vote.
///
/// Carries the aggregated judgment, the individual judgments in judge
/// declaration order, a name-keyed lookup over the same judgments, and (for
/// cascades) one verdict per tier that actually executed.
///
/// `individual` and the name-keyed map always hold the same judgments: both
/// views are derived from the same input at construction and the struct is
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    aggregated: Judgment,
    individual: Vec<Judgment>,
    by_name: HashMap<String, Judgment>,
    sub_verdicts: Vec<Verdict>,
}

impl Verdict {
    /// Create a verdict from an aggregated judgment and the named individual
    /// judgments in judge declaration order.
    pub fn new(aggregated: Judgment, named: Vec<(String, Judgment)>) -> Self {
        let by_name = named
            .iter()
            .map(|(name, judgment)| (name.clone(), judgment.clone()))
            .collect();
        let individual = named.into_iter().map(|(_, judgment)| judgment).collect();
        Self {
            aggregated,
            individual,
            by_name,
            sub_verdicts: Vec::new(),
        }
    }

    /// Create a verdict whose aggregated judgment is an execution error.
    ///
    /// Used when a cascade's final tier fails: there are no individual
    /// judgments, only the error cause and whatever tier verdicts were
    /// accumulated before the failure.
    pub fn error(cause: impl Into<String>, sub_verdicts: Vec<Verdict>) -> Self {
        Self {
            aggregated: Judgment::error(cause),
            individual: Vec::new(),
            by_name: HashMap::new(),
            sub_verdicts,
        }
    }

    /// Replace the per-tier trace with the given verdicts
    pub fn with_sub_verdicts(mut self, sub_verdicts: Vec<Verdict>) -> Self {
        self.sub_verdicts = sub_verdicts;
        self
    }

    // ==================== Accessors ====================

    /// The aggregated judgment
    pub fn aggregated(&self) -> &Judgment {
        &self.aggregated
    }

    /// Status of the aggregated judgment
    pub fn status(&self) -> JudgmentStatus {
        self.aggregated.status
    }

    /// The individual judgments in judge declaration order
    pub fn individual(&self) -> &[Judgment] {
        &self.individual
    }

    /// The individual judgments keyed by judge name
    pub fn individual_by_name(&self) -> &HashMap<String, Judgment> {
        &self.by_name
    }

    /// Look up one judge's judgment by name
    pub fn by_name(&self, name: &str) -> Option<&Judgment> {
        self.by_name.get(name)
    }

    /// Per-tier verdicts, in execution order. Empty for a flat jury;
    /// contains only tiers that actually ran for a cascade.
    pub fn sub_verdicts(&self) -> &[Verdict] {
        &self.sub_verdicts
    }

    // ==================== Status Queries ====================

    /// Whether any individual judgment failed
    pub fn has_any_fail(&self) -> bool {
        self.individual.iter().any(|j| j.status.is_fail())
    }

    /// Whether every individual judgment passed. Abstentions and errors
    /// count against this (they are not passes).
    pub fn all_passed(&self) -> bool {
        self.individual.iter().all(|j| j.status.is_pass())
    }
}
