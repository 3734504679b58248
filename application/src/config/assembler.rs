//! Cascade assembly - resolving a declarative configuration into a jury.

use super::file::FileCascadeConfig;
use crate::jury::{CascadedJury, JuryConfigError, SimpleJury, TierConfig};
use crate::ports::judge::Judge;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors from resolving a cascade configuration
#[derive(Error, Debug)]
pub enum AssemblyError {
    #[error("tier '{tier}' references unknown judge '{judge}'")]
    UnknownJudge { tier: String, judge: String },

    #[error("tier '{tier}' has no judges")]
    EmptyTier { tier: String },

    #[error("tier '{tier}': {reason}")]
    InvalidPolicy { tier: String, reason: String },

    #[error("tier '{tier}': {reason}")]
    InvalidExecution { tier: String, reason: String },

    #[error("tier '{tier}': {reason}")]
    InvalidStrategy { tier: String, reason: String },

    #[error(transparent)]
    Jury(#[from] JuryConfigError),
}

/// Named judge implementations available to the assembler.
///
/// The configuration file references judges by name only; callers register
/// the concrete implementations here before assembly.
#[derive(Default)]
pub struct JudgeRegistry {
    judges: HashMap<String, Arc<dyn Judge>>,
}

impl JudgeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a judge under its own name. Returns the displaced judge if
    /// the name was already taken.
    pub fn register(&mut self, judge: Arc<dyn Judge>) -> Option<Arc<dyn Judge>> {
        self.judges.insert(judge.name().to_string(), judge)
    }

    /// Look up a judge by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Judge>> {
        self.judges.get(name).cloned()
    }

    /// Number of registered judges
    pub fn len(&self) -> usize {
        self.judges.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.judges.is_empty()
    }
}

/// Builds a [`CascadedJury`] from a declarative configuration.
pub struct CascadeAssembler;

impl CascadeAssembler {
    /// Resolve judge names and build the cascade.
    ///
    /// Every structural invariant is checked here, before any vote: judge
    /// names must resolve, tiers must not be empty, policies, execution
    /// modes, and voting rules must parse, and the cascade itself must end
    /// in a final tier.
    pub fn assemble(
        config: &FileCascadeConfig,
        registry: &JudgeRegistry,
    ) -> Result<CascadedJury, AssemblyError> {
        let mut tiers = Vec::with_capacity(config.tiers.len());

        for tier in &config.tiers {
            let policy = tier
                .parse_policy()
                .map_err(|reason| AssemblyError::InvalidPolicy {
                    tier: tier.name.clone(),
                    reason,
                })?;
            let execution =
                tier.parse_execution()
                    .map_err(|reason| AssemblyError::InvalidExecution {
                        tier: tier.name.clone(),
                        reason,
                    })?;
            let strategy =
                tier.strategy
                    .build_strategy()
                    .map_err(|reason| AssemblyError::InvalidStrategy {
                        tier: tier.name.clone(),
                        reason,
                    })?;

            if tier.judges.is_empty() {
                return Err(AssemblyError::EmptyTier {
                    tier: tier.name.clone(),
                });
            }

            let mut builder = SimpleJury::builder()
                .voting_strategy_arc(strategy)
                .execution_mode(execution);
            for judge_name in &tier.judges {
                let judge = registry
                    .get(judge_name)
                    .ok_or_else(|| AssemblyError::UnknownJudge {
                        tier: tier.name.clone(),
                        judge: judge_name.clone(),
                    })?;
                builder = builder.judge_arc(judge);
            }
            let jury = builder.build()?;

            debug!(tier = %tier.name, judges = tier.judges.len(), "assembled cascade tier");
            tiers.push(TierConfig::new(tier.name.clone(), Arc::new(jury), policy)?);
        }

        Ok(CascadedJury::from_tiers(tiers)?)
    }
}
