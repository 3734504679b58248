//! Named sub-assertions carried inside a judgment.

use serde::{Deserialize, Serialize};

/// One named sub-assertion inside a [`Judgment`](super::Judgment).
///
/// Checks give diagnostic granularity: a judge evaluating ten files can
/// attach one check per file while still rendering a single overall status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Check {
    /// Identifier of the assertion (e.g., "build", "src/main.rs")
    pub name: String,
    /// Human-readable explanation of what was checked and what was found
    pub detail: String,
    /// Whether the assertion held
    pub passed: bool,
}

impl Check {
    /// Create a passing check
    pub fn pass(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: detail.into(),
            passed: true,
        }
    }

    /// Create a failing check
    pub fn fail(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: detail.into(),
            passed: false,
        }
    }
}

impl std::fmt::Display for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let marker = if self.passed { "ok" } else { "failed" };
        write!(f, "{} [{}]: {}", self.name, marker, self.detail)
    }
}
