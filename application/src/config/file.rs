//! Cascade configuration from TOML (`[cascade]` section)
//!
//! A cascade can be declared in a `tribunal.toml` instead of code. Tiers
//! reference judges by name; the names are resolved against a
//! [`JudgeRegistry`](super::assembler::JudgeRegistry) at assembly time.
//!
//! Example configuration:
//!
//! ```toml
//! [[cascade.tiers]]
//! name = "deterministic"
//! policy = "reject_on_any_fail"
//! judges = ["build", "tests"]
//! execution = "sequential"
//!
//! [cascade.tiers.strategy]
//! rule = "consensus"
//!
//! [[cascade.tiers]]
//! name = "semantic"
//! policy = "final"
//! judges = ["reviewer"]
//!
//! [cascade.tiers.strategy]
//! rule = "weighted"
//! weights = [2.0]
//! threshold = 0.6
//! ```

use crate::jury::{ExecutionMode, TierPolicy};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tribunal_domain::{ConsensusStrategy, MajorityStrategy, VotingStrategy, WeightedStrategy};

/// Root of the declarative configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    /// The cascade declaration
    pub cascade: FileCascadeConfig,
}

/// The `[cascade]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FileCascadeConfig {
    /// Tiers in execution order
    pub tiers: Vec<FileTierConfig>,
}

/// One `[[cascade.tiers]]` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileTierConfig {
    /// Tier name for diagnostics
    pub name: String,
    /// Tier policy: "reject_on_any_fail", "accept_on_all_pass", "final"
    pub policy: String,
    /// Names of the judges on this tier's panel
    pub judges: Vec<String>,
    /// Voting strategy for this tier
    #[serde(default)]
    pub strategy: FileStrategyConfig,
    /// Execution mode: "concurrent" (default) or "sequential"
    #[serde(default = "default_execution")]
    pub execution: String,
}

fn default_execution() -> String {
    "concurrent".to_string()
}

impl FileTierConfig {
    /// Parse the policy string into a [`TierPolicy`]
    pub fn parse_policy(&self) -> Result<TierPolicy, String> {
        self.policy.parse()
    }

    /// Parse the execution string into an [`ExecutionMode`]
    pub fn parse_execution(&self) -> Result<ExecutionMode, String> {
        self.execution.parse()
    }
}

/// The `[cascade.tiers.strategy]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStrategyConfig {
    /// Voting rule: "majority", "consensus", "weighted"
    pub rule: String,
    /// Per-judge weights in declaration order (weighted rule only)
    pub weights: Vec<f64>,
    /// Pass threshold in (0, 1) (weighted rule only)
    pub threshold: Option<f64>,
}

impl Default for FileStrategyConfig {
    fn default() -> Self {
        Self {
            rule: "majority".to_string(),
            weights: Vec::new(),
            threshold: None,
        }
    }
}

impl FileStrategyConfig {
    /// Build the configured voting strategy
    pub fn build_strategy(&self) -> Result<Arc<dyn VotingStrategy>, String> {
        match self.rule.to_lowercase().as_str() {
            "majority" => Ok(Arc::new(MajorityStrategy::new())),
            "consensus" => Ok(Arc::new(ConsensusStrategy::new())),
            "weighted" => {
                let strategy = match self.threshold {
                    Some(threshold) => {
                        WeightedStrategy::with_threshold(self.weights.clone(), threshold)
                    }
                    None => WeightedStrategy::new(self.weights.clone()),
                }
                .map_err(|e| e.to_string())?;
                Ok(Arc::new(strategy))
            }
            other => Err(format!(
                "unknown voting rule: {}. Valid: majority, consensus, weighted",
                other
            )),
        }
    }
}
