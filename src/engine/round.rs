// src/engine/round.rs

use anyhow::anyhow;
use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::errors::Result;
use crate::exec::{run_instance, InstanceResult};
use crate::RunnerConfig;

/// Run one round: launch `config.workers` concurrent instances and wait for
/// all of them.
///
/// Results are consumed in completion order, not launch order; each
/// instance's non-empty captured stdout is printed as its result is
/// consumed. The first instance failure short-circuits the round and is
/// returned as-is — remaining join handles are dropped with the `JoinSet`,
/// which aborts their tasks and (via `kill_on_drop`) reaps any children
/// still running. There is no cooperative mid-round cancellation.
///
/// On success the per-round `Done executing all <N> jobs` notice is printed
/// and the results are returned in the order they were consumed.
pub async fn run_round(config: &RunnerConfig) -> Result<Vec<InstanceResult>> {
    let mut set = JoinSet::new();
    for slot in 0..config.workers {
        let spec = config.command.clone();
        set.spawn(async move { run_instance(slot, &spec).await });
    }

    let mut results = Vec::with_capacity(config.workers);
    while let Some(joined) = set.join_next().await {
        let result = joined.map_err(|e| anyhow!(e).context("joining instance task"))??;
        debug!(
            slot = result.slot,
            bytes = result.stdout.len(),
            "instance result consumed"
        );
        if let Some(text) = printable_output(&result.stdout) {
            print!("{text}");
        }
        results.push(result);
    }

    println!("Done executing all {} jobs", config.workers);
    info!(jobs = config.workers, "round complete");
    Ok(results)
}

/// Normalise captured stdout for printing.
///
/// Empty output is skipped entirely; otherwise the text is printed raw, with
/// a trailing newline added only if the child did not end with one.
fn printable_output(stdout: &str) -> Option<String> {
    if stdout.is_empty() {
        None
    } else if stdout.ends_with('\n') {
        Some(stdout.to_string())
    } else {
        Some(format!("{stdout}\n"))
    }
}
