//! Declarative cascade configuration.
//!
//! This module lets callers describe a cascade in TOML instead of code:
//!
//! - [`file::FileConfig`] - serde types mirroring `tribunal.toml`
//! - [`loader::ConfigLoader`] - multi-source discovery and merging
//! - [`assembler::CascadeAssembler`] - resolves judge names against a
//!   [`assembler::JudgeRegistry`] and builds the validated cascade

pub mod assembler;
pub mod file;
pub mod loader;

pub use assembler::{AssemblyError, CascadeAssembler, JudgeRegistry};
pub use file::{FileCascadeConfig, FileConfig, FileStrategyConfig, FileTierConfig};
pub use loader::ConfigLoader;
