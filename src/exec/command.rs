// src/exec/command.rs

use std::process::Stdio;

use anyhow::Context;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::errors::{Result, RunnerError};

/// The child command: program path plus arguments.
///
/// Built once from the invocation arguments and fixed for the lifetime of
/// the process; every instance in every round runs exactly this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Split a raw argument list into program + args.
    ///
    /// Returns `None` for an empty list; the CLI layer already rejects that
    /// case with a usage error.
    pub fn new(argv: Vec<String>) -> Option<Self> {
        let mut argv = argv.into_iter();
        let program = argv.next()?;
        Some(Self {
            program,
            args: argv.collect(),
        })
    }
}

/// Output of one successfully completed instance.
#[derive(Debug, Clone)]
pub struct InstanceResult {
    /// Worker slot the instance ran in. Log label only.
    pub slot: usize,
    /// Captured stdout, decoded as UTF-8 (lossily).
    pub stdout: String,
}

/// Run a single instance of the command in the given worker slot.
///
/// Stdout and stderr are captured, not streamed; nothing from the child
/// reaches the console until the instance has exited. A non-zero exit (or a
/// failure to launch at all) is returned as a [`RunnerError`] and is fatal
/// for the whole run.
pub async fn run_instance(slot: usize, spec: &CommandSpec) -> Result<InstanceResult> {
    println!("Launching on CPU {slot}");
    debug!(slot, program = %spec.program, "spawning instance");

    let mut cmd = Command::new(&spec.program);
    cmd.args(&spec.args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let child = cmd
        .spawn()
        .map_err(|source| RunnerError::Spawn { slot, source })?;

    let output = child
        .wait_with_output()
        .await
        .with_context(|| format!("waiting for instance on CPU {slot}"))?;

    if output.status.success() {
        println!("Completed on CPU {slot}");
        debug!(slot, "instance exited cleanly");
        Ok(InstanceResult {
            slot,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    } else {
        let code = output.status.code().unwrap_or(-1);
        warn!(slot, exit_code = code, "instance failed");
        Err(RunnerError::InstanceFailed {
            slot,
            code,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
