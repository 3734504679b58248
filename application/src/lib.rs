//! Application layer for agent-tribunal
//!
//! This crate contains the jury orchestration, the capability ports, and
//! the declarative cascade configuration. It depends only on the domain
//! layer.
//!
//! # Entry Point
//!
//! External callers interact with exactly one surface:
//! [`Jury::vote`](jury::Jury::vote). A [`jury::SimpleJury`] fans a shared
//! [`JudgmentContext`](tribunal_domain::JudgmentContext) out to its judges
//! and folds their judgments through a voting strategy; a
//! [`jury::CascadedJury`] runs tiers of juries in order, escalating from
//! cheap deterministic checks to expensive evaluation only when needed.

pub mod config;
pub mod jury;
pub mod ports;

// Re-export commonly used types
pub use config::{
    AssemblyError, CascadeAssembler, ConfigLoader, FileCascadeConfig, FileConfig, JudgeRegistry,
};
pub use jury::{
    CascadedJury, ExecutionMode, Jury, JuryConfigError, JuryError, SimpleJury, TierConfig,
    TierPolicy,
};
pub use ports::{AgentRun, AgentRunner, AgentRunnerError, Judge, JudgeError};
