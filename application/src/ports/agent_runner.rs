//! Agent runner port
//!
//! Bridge interface for driving the automated process whose output gets
//! judged. Keeping this a narrow port means the evaluation engine never
//! depends on a concrete agent client; adapters live with the caller.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tribunal_domain::{ExecutionStatus, JudgmentContext};

/// Errors from agent execution
#[derive(Error, Debug)]
pub enum AgentRunnerError {
    #[error("agent execution failed: {0}")]
    Execution(String),

    #[error("workspace unavailable: {0}")]
    Workspace(String),

    #[error("agent execution timed out")]
    Timeout,
}

/// Outcome of one agent execution
#[derive(Debug, Clone)]
pub struct AgentRun {
    /// The agent's output text
    pub output: String,
    /// Whether the agent reported success
    pub success: bool,
}

impl AgentRun {
    /// Create a successful run outcome
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            success: true,
        }
    }

    /// Create a failed run outcome
    pub fn failure(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            success: false,
        }
    }

    /// Build a judgment context from this run, ready for a jury vote.
    pub fn into_context(self, goal: impl Into<String>, workspace: impl Into<PathBuf>) -> JudgmentContext {
        let status = if self.success {
            ExecutionStatus::Succeeded
        } else {
            ExecutionStatus::Failed
        };
        JudgmentContext::new(goal, workspace)
            .with_agent_output(self.output)
            .with_execution_status(status)
    }

    /// Build a judgment context carrying the run's timing as well.
    pub fn into_timed_context(
        self,
        goal: impl Into<String>,
        workspace: impl Into<PathBuf>,
        started_at: DateTime<Utc>,
        duration: Duration,
    ) -> JudgmentContext {
        self.into_context(goal, workspace)
            .with_started_at(started_at)
            .with_duration(duration)
    }
}

/// Executes an agent task against a workspace.
///
/// Implementations adapt a concrete agent client; the engine only needs
/// the goal in, the output and success flag out.
#[async_trait]
pub trait AgentRunner: Send + Sync {
    /// Run the agent with the given goal in the given workspace.
    async fn run(&self, goal: &str, workspace: &Path) -> Result<AgentRun, AgentRunnerError>;
}
