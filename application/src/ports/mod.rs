//! Port definitions
//!
//! Ports are the narrow interfaces through which the evaluation engine
//! consumes external capabilities:
//!
//! - [`judge::Judge`] - a single evaluator, invoked by flat juries
//! - [`agent_runner::AgentRunner`] - drives the process under evaluation
//!   and yields the context juries vote on

pub mod agent_runner;
pub mod judge;

pub use agent_runner::{AgentRun, AgentRunner, AgentRunnerError};
pub use judge::{Judge, JudgeError};
