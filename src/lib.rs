// src/lib.rs

pub mod cli;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod workers;

use anyhow::{anyhow, Result};
use tracing::{info, warn};

use crate::cli::CliArgs;
use crate::exec::CommandSpec;

/// Immutable run configuration, computed once at startup and reused for
/// every round.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    pub command: CommandSpec,
    pub workers: usize,
}

impl RunnerConfig {
    /// Build the configuration from parsed CLI arguments, sizing the worker
    /// count to the host's logical CPU count.
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let command =
            CommandSpec::new(args.command).ok_or_else(|| anyhow!("no command supplied"))?;
        Ok(Self {
            command,
            workers: workers::detect(),
        })
    }
}

/// High-level entry point used by `main.rs`.
///
/// Runs rounds forever: each round fans the command out across all worker
/// slots and waits for every instance to finish. The loop only ends when a
/// round fails (the error propagates to the caller, which maps it to exit
/// status 1) or on Ctrl-C (clean exit). A Ctrl-C mid-round drops the round
/// future; `kill_on_drop` reaps any children still running.
pub async fn run(args: CliArgs) -> Result<()> {
    let config = RunnerConfig::from_args(args)?;
    info!(
        workers = config.workers,
        program = %config.command.program,
        "batch runner starting"
    );

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C; running until killed");
            std::future::pending::<()>().await;
        }
    };
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            res = engine::run_round(&config) => {
                res?;
            }
            _ = &mut shutdown => {
                info!("interrupted, stopping");
                return Ok(());
            }
        }
    }
}
