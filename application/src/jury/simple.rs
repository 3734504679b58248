//! Flat jury - every judge evaluates the same context, one strategy folds
//! the judgments into a verdict.

use super::{Jury, JuryConfigError, JuryError};
use crate::ports::judge::Judge;
use async_trait::async_trait;
use futures::FutureExt;
use std::collections::HashSet;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, warn};
use tribunal_domain::{Judgment, JudgmentContext, Verdict, VotingStrategy};

/// How a flat jury schedules its judges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Judges run one after another, in declaration order
    Sequential,
    /// Judges run on independent tasks; results are re-sorted into
    /// declaration order before the verdict is assembled
    #[default]
    Concurrent,
}

impl std::str::FromStr for ExecutionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sequential" => Ok(ExecutionMode::Sequential),
            "concurrent" | "parallel" => Ok(ExecutionMode::Concurrent),
            _ => Err(format!(
                "unknown execution mode: {}. Valid: sequential, concurrent",
                s
            )),
        }
    }
}

/// A flat panel of judges plus a voting strategy.
///
/// Every configured judge evaluates the same shared context. A judge that
/// returns an error or panics is recorded as an error-status judgment
/// attributed to its name; the vote always completes. The verdict's
/// individual judgments preserve judge declaration order regardless of
/// execution mode.
///
/// # Example
///
/// ```no_run
/// # use std::sync::Arc;
/// # use tribunal_application::jury::{Jury, SimpleJury};
/// # use tribunal_application::ports::judge::Judge;
/// # use tribunal_domain::{JudgmentContext, MajorityStrategy};
/// # async fn demo(build: Arc<dyn Judge>, tests: Arc<dyn Judge>) {
/// let jury = SimpleJury::builder()
///     .judge_arc(build)
///     .judge_arc(tests)
///     .voting_strategy(MajorityStrategy::new())
///     .build()
///     .unwrap();
///
/// let context = Arc::new(JudgmentContext::new("add endpoint", "/tmp/ws"));
/// let verdict = jury.vote(context).await.unwrap();
/// # }
/// ```
pub struct SimpleJury {
    judges: Vec<Arc<dyn Judge>>,
    strategy: Arc<dyn VotingStrategy>,
    execution: ExecutionMode,
}

impl std::fmt::Debug for SimpleJury {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleJury")
            .field("judges", &self.judges.len())
            .field("strategy", &self.strategy)
            .field("execution", &self.execution)
            .finish()
    }
}

impl SimpleJury {
    /// Start building a jury
    pub fn builder() -> SimpleJuryBuilder {
        SimpleJuryBuilder::new()
    }

    /// The configured execution mode
    pub fn execution_mode(&self) -> ExecutionMode {
        self.execution
    }

    async fn collect_sequential(&self, context: &Arc<JudgmentContext>) -> Vec<(String, Judgment)> {
        let mut named = Vec::with_capacity(self.judges.len());
        for judge in &self.judges {
            let judgment = evaluate_guarded(Arc::clone(judge), Arc::clone(context)).await;
            named.push((judge.name().to_string(), judgment));
        }
        named
    }

    async fn collect_concurrent(&self, context: &Arc<JudgmentContext>) -> Vec<(String, Judgment)> {
        let mut join_set = JoinSet::new();
        for (index, judge) in self.judges.iter().enumerate() {
            let judge = Arc::clone(judge);
            let context = Arc::clone(context);
            join_set.spawn(async move {
                let name = judge.name().to_string();
                let judgment = evaluate_guarded(judge, context).await;
                (index, name, judgment)
            });
        }

        // Completion order is arbitrary; slots are keyed by declaration
        // index so the verdict comes out in declared order.
        let mut slots: Vec<Option<(String, Judgment)>> = vec![None; self.judges.len()];
        while let Some(result) = join_set.join_next().await {
            match result {
                Ok((index, name, judgment)) => slots[index] = Some((name, judgment)),
                Err(err) => warn!(error = %err, "judge task failed to join"),
            }
        }

        slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.unwrap_or_else(|| {
                    let name = self.judges[index].name().to_string();
                    let judgment = Judgment::error(format!(
                        "judge '{}' task ended before producing a judgment",
                        name
                    ));
                    (name, judgment)
                })
            })
            .collect()
    }
}

#[async_trait]
impl Jury for SimpleJury {
    fn judges(&self) -> Vec<Arc<dyn Judge>> {
        self.judges.clone()
    }

    async fn vote(&self, context: Arc<JudgmentContext>) -> Result<Verdict, JuryError> {
        debug!(
            judges = self.judges.len(),
            mode = ?self.execution,
            "starting jury vote"
        );

        let named = match self.execution {
            ExecutionMode::Sequential => self.collect_sequential(&context).await,
            ExecutionMode::Concurrent => self.collect_concurrent(&context).await,
        };

        let judgments: Vec<Judgment> = named.iter().map(|(_, j)| j.clone()).collect();
        let aggregated = self.strategy.aggregate(&judgments);
        debug!(status = %aggregated.status, "jury vote complete");

        Ok(Verdict::new(aggregated, named))
    }
}

/// Run one judge, converting errors and panics into attributed
/// error-status judgments so a single misbehaving judge cannot abort the
/// vote.
async fn evaluate_guarded(judge: Arc<dyn Judge>, context: Arc<JudgmentContext>) -> Judgment {
    let name = judge.name().to_string();
    match AssertUnwindSafe(judge.evaluate(&context)).catch_unwind().await {
        Ok(Ok(judgment)) => judgment,
        Ok(Err(err)) => {
            warn!(judge = %name, error = %err, "judge failed, recording error judgment");
            Judgment::error(format!("judge '{}' failed: {}", name, err))
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            warn!(judge = %name, panic = %message, "judge panicked, recording error judgment");
            Judgment::error(format!("judge '{}' panicked: {}", name, message))
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Builder for [`SimpleJury`]. Validation happens once in
/// [`build`](SimpleJuryBuilder::build), never during a vote.
#[derive(Default)]
pub struct SimpleJuryBuilder {
    judges: Vec<Arc<dyn Judge>>,
    strategy: Option<Arc<dyn VotingStrategy>>,
    execution: ExecutionMode,
}

impl SimpleJuryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a judge to the panel
    pub fn judge(mut self, judge: impl Judge + 'static) -> Self {
        self.judges.push(Arc::new(judge));
        self
    }

    /// Add an already-shared judge to the panel
    pub fn judge_arc(mut self, judge: Arc<dyn Judge>) -> Self {
        self.judges.push(judge);
        self
    }

    /// Set the voting strategy
    pub fn voting_strategy(mut self, strategy: impl VotingStrategy + 'static) -> Self {
        self.strategy = Some(Arc::new(strategy));
        self
    }

    /// Set an already-shared voting strategy
    pub fn voting_strategy_arc(mut self, strategy: Arc<dyn VotingStrategy>) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Run judges one after another, in declaration order
    pub fn sequential(mut self) -> Self {
        self.execution = ExecutionMode::Sequential;
        self
    }

    /// Run judges concurrently (the default)
    pub fn concurrent(mut self) -> Self {
        self.execution = ExecutionMode::Concurrent;
        self
    }

    /// Set the execution mode explicitly
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.execution = mode;
        self
    }

    /// Validate and build the jury.
    ///
    /// Requires at least one judge, unique judge names (the verdict's
    /// name-keyed lookup depends on them), and a voting strategy.
    pub fn build(self) -> Result<SimpleJury, JuryConfigError> {
        if self.judges.is_empty() {
            return Err(JuryConfigError::NoJudges);
        }
        let mut seen = HashSet::new();
        for judge in &self.judges {
            if !seen.insert(judge.name().to_string()) {
                return Err(JuryConfigError::DuplicateJudge(judge.name().to_string()));
            }
        }
        let strategy = self.strategy.ok_or(JuryConfigError::NoStrategy)?;

        Ok(SimpleJury {
            judges: self.judges,
            strategy,
            execution: self.execution,
        })
    }
}
