// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for actually running one instance of the
//! configured command, using `tokio::process::Command`, and reporting the
//! captured output (or the typed failure) back to the round orchestrator.

pub mod command;

pub use command::{run_instance, CommandSpec, InstanceResult};
