//! Judgment context - the immutable input every judge evaluates against.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Terminal state of the automated process that produced the artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    /// The process reported success
    Succeeded,
    /// The process reported failure
    Failed,
}

impl ExecutionStatus {
    /// Check if the process reported success
    pub fn is_succeeded(&self) -> bool {
        matches!(self, ExecutionStatus::Succeeded)
    }
}

impl std::fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecutionStatus::Succeeded => write!(f, "succeeded"),
            ExecutionStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Everything a judge may inspect when evaluating one case.
///
/// Constructed once per evaluation request and shared read-only across all
/// judges (juries pass it around behind an `Arc`). Judges must not mutate
/// it; the accessor-only surface enforces that.
///
/// # Example
///
/// ```
/// use tribunal_domain::context::{ExecutionStatus, JudgmentContext};
/// use std::time::Duration;
///
/// let context = JudgmentContext::new("Add a health endpoint", "/tmp/workspace")
///     .with_agent_output("Created src/health.rs with /healthz route")
///     .with_execution_status(ExecutionStatus::Succeeded)
///     .with_duration(Duration::from_secs(42));
///
/// assert_eq!(context.goal(), "Add a health endpoint");
/// assert!(context.execution_status().is_succeeded());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgmentContext {
    goal: String,
    workspace: PathBuf,
    agent_output: String,
    execution_status: ExecutionStatus,
    started_at: DateTime<Utc>,
    duration: Duration,
    metadata: HashMap<String, serde_json::Value>,
}

impl JudgmentContext {
    /// Create a context for the given goal and workspace.
    ///
    /// Output, status, timing, and metadata default to empty/`Succeeded`/now
    /// and are filled in with the `with_*` builders.
    pub fn new(goal: impl Into<String>, workspace: impl Into<PathBuf>) -> Self {
        Self {
            goal: goal.into(),
            workspace: workspace.into(),
            agent_output: String::new(),
            execution_status: ExecutionStatus::Succeeded,
            started_at: Utc::now(),
            duration: Duration::ZERO,
            metadata: HashMap::new(),
        }
    }

    // ==================== Builder Methods ====================

    /// Set the text output of the evaluated process
    pub fn with_agent_output(mut self, output: impl Into<String>) -> Self {
        self.agent_output = output.into();
        self
    }

    /// Set the terminal execution status of the evaluated process
    pub fn with_execution_status(mut self, status: ExecutionStatus) -> Self {
        self.execution_status = status;
        self
    }

    /// Set the start time of the evaluated process
    pub fn with_started_at(mut self, started_at: DateTime<Utc>) -> Self {
        self.started_at = started_at;
        self
    }

    /// Set the wall-clock duration of the evaluated process
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
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

    // ==================== Accessors ====================

    /// The goal the automated process was asked to accomplish
    pub fn goal(&self) -> &str {
        &self.goal
    }

    /// The workspace directory the process ran in
    pub fn workspace(&self) -> &Path {
        &self.workspace
    }

    /// The text output of the process
    pub fn agent_output(&self) -> &str {
        &self.agent_output
    }

    /// The terminal execution status of the process
    pub fn execution_status(&self) -> ExecutionStatus {
        self.execution_status
    }

    /// When the process started
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// How long the process ran
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The full metadata bag
    pub fn metadata(&self) -> &HashMap<String, serde_json::Value> {
        &self.metadata
    }

    /// A single metadata entry, if present
    pub fn metadata_value(&self, key: &str) -> Option<&serde_json::Value> {
        self.metadata.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let context = JudgmentContext::new("goal", "/ws");
        assert_eq!(context.goal(), "goal");
        assert_eq!(context.workspace(), Path::new("/ws"));
        assert_eq!(context.agent_output(), "");
        assert!(context.execution_status().is_succeeded());
        assert_eq!(context.duration(), Duration::ZERO);
        assert!(context.metadata().is_empty());
    }

    #[test]
    fn test_builder_chain() {
        let context = JudgmentContext::new("fix the bug", "/tmp/run-7")
            .with_agent_output("patched parser.rs")
            .with_execution_status(ExecutionStatus::Failed)
            .with_duration(Duration::from_millis(1500))
            .with_metadata("attempt", 3);

        assert_eq!(context.agent_output(), "patched parser.rs");
        assert_eq!(context.execution_status(), ExecutionStatus::Failed);
        assert_eq!(context.duration(), Duration::from_millis(1500));
        assert_eq!(context.metadata_value("attempt"), Some(&3.into()));
        assert_eq!(context.metadata_value("missing"), None);
    }

    #[test]
    fn test_execution_status_display() {
        assert_eq!(ExecutionStatus::Succeeded.to_string(), "succeeded");
        assert_eq!(ExecutionStatus::Failed.to_string(), "failed");
    }
}
