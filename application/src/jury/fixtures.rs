//! Test fixtures shared by the jury test modules.

use super::{Jury, JuryError};
use crate::ports::judge::{Judge, JudgeError};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tribunal_domain::{Judgment, JudgmentContext, Verdict};

/// A judge that always returns the same judgment.
pub(crate) struct StaticJudge {
    name: String,
    judgment: Judgment,
}

#[async_trait]
impl Judge for StaticJudge {
    fn name(&self) -> &str {
        &self.name
    }

    async fn evaluate(&self, _context: &JudgmentContext) -> Result<Judgment, JudgeError> {
        Ok(self.judgment.clone())
    }
}

pub(crate) fn always_pass(name: &str) -> StaticJudge {
    StaticJudge {
        name: name.to_string(),
        judgment: Judgment::pass(format!("{} approved", name)),
    }
}

pub(crate) fn always_fail(name: &str) -> StaticJudge {
    StaticJudge {
        name: name.to_string(),
        judgment: Judgment::fail(format!("{} rejected", name)),
    }
}

pub(crate) fn always_abstain(name: &str) -> StaticJudge {
    StaticJudge {
        name: name.to_string(),
        judgment: Judgment::abstain(format!("{} has no opinion", name)),
    }
}

/// A judge that fails with an infrastructure error.
pub(crate) struct ErringJudge {
    name: String,
}

#[async_trait]
impl Judge for ErringJudge {
    fn name(&self) -> &str {
        &self.name
    }

    async fn evaluate(&self, _context: &JudgmentContext) -> Result<Judgment, JudgeError> {
        Err(JudgeError::Evaluation("sandbox unavailable".to_string()))
    }
}

pub(crate) fn erring(name: &str) -> ErringJudge {
    ErringJudge {
        name: name.to_string(),
    }
}

/// A judge that panics instead of judging.
pub(crate) struct PanickingJudge {
    name: String,
}

#[async_trait]
impl Judge for PanickingJudge {
    fn name(&self) -> &str {
        &self.name
    }

    async fn evaluate(&self, _context: &JudgmentContext) -> Result<Judgment, JudgeError> {
        panic!("{} blew up", self.name)
    }
}

pub(crate) fn panicking(name: &str) -> PanickingJudge {
    PanickingJudge {
        name: name.to_string(),
    }
}

/// A judge that sleeps before passing or failing, for ordering tests.
pub(crate) struct SlowJudge {
    name: String,
    delay: Duration,
    pass: bool,
}

impl SlowJudge {
    pub(crate) fn passing(name: &str, delay_ms: u64) -> Self {
        Self {
            name: name.to_string(),
            delay: Duration::from_millis(delay_ms),
            pass: true,
        }
    }
}

#[async_trait]
impl Judge for SlowJudge {
    fn name(&self) -> &str {
        &self.name
    }

    async fn evaluate(&self, _context: &JudgmentContext) -> Result<Judgment, JudgeError> {
        tokio::time::sleep(self.delay).await;
        if self.pass {
            Ok(Judgment::pass(format!("{} approved eventually", self.name)))
        } else {
            Ok(Judgment::fail(format!("{} rejected eventually", self.name)))
        }
    }
}

/// A jury that cannot produce a verdict at all.
pub(crate) struct ThrowingJury;

#[async_trait]
impl Jury for ThrowingJury {
    fn judges(&self) -> Vec<Arc<dyn Judge>> {
        Vec::new()
    }

    async fn vote(&self, _context: Arc<JudgmentContext>) -> Result<Verdict, JuryError> {
        Err(JuryError::Execution("tier exploded".to_string()))
    }
}

/// A ready-to-vote context.
pub(crate) fn context() -> Arc<JudgmentContext> {
    Arc::new(
        JudgmentContext::new("test goal", "/tmp/workspace")
            .with_agent_output("agent output under evaluation"),
    )
}
